//! Stacked bars: every category of a row in one line, summed in the tail.

use std::io::{self, Write};

use crate::{
    core::{config::Config, data::Table},
    render::{
        chart::{Chart, Render},
        normalize::normalize,
        row::{RowLayout, bar_run, ticks},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct StackedChart {
    normal: Vec<Vec<f64>>,
    val_min: f64,
}

impl StackedChart {
    /// Ticks come from one normalization over the whole table.
    #[must_use]
    pub fn new(table: &Table, cfg: &Config) -> Self {
        Self {
            normal: normalize(table.rows(), cfg.width),
            val_min: table.find_min(),
        }
    }
}

impl Render for StackedChart {
    fn render<W: Write>(&self, chart: &Chart, out: &mut W) -> io::Result<()> {
        let table = chart.table();
        let cfg = chart.config();
        let layout = RowLayout::new(cfg, table);

        let rows = table.labels().iter().zip(table.rows()).zip(&self.normal);
        for (i, ((label, values), normal)) in rows.enumerate() {
            if cfg.space_between && i != 0 {
                out.write_all(b"\n")?;
            }
            let runs: Vec<_> = values
                .iter()
                .zip(normal)
                .enumerate()
                .map(|(j, (&v, &n))| (bar_run(v, ticks(n), self.val_min, false), chart.color(j)))
                .collect();
            // the total is exact, and always after the bar
            let total: f64 = values.iter().sum();
            let label = layout.colon_label(label);
            layout.write_row_bar_first(out, &label, &runs, &layout.raw_tail(total))?;
        }
        Ok(())
    }

    fn normalized(&self) -> &[Vec<f64>] {
        &self.normal
    }
}
