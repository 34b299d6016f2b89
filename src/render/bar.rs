//! Horizontal bars, one line per value.

use std::io::{self, Write};

use crate::{
    core::{bounds::value_range, config::Config, data::Table},
    render::{
        chart::{Chart, Render},
        normalize::{normalize, normalize_columns},
        row::RowLayout,
    },
};

/// Rows share one scale, or each category column gets its own.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    normal: Vec<Vec<f64>>,
    /// Smallest raw value each category is compared against.
    val_mins: Vec<f64>,
}

impl BarChart {
    #[must_use]
    pub fn new(table: &Table, cfg: &Config) -> Self {
        let categories = table.category_count();
        if cfg.different_scale {
            let val_mins = (0..categories)
                .map(|j| value_range(&table.column(j)).0)
                .collect();
            Self {
                normal: normalize_columns(table.rows(), cfg.width),
                val_mins,
            }
        } else {
            Self {
                normal: normalize(table.rows(), cfg.width),
                val_mins: vec![table.find_min(); categories],
            }
        }
    }
}

impl Render for BarChart {
    fn render<W: Write>(&self, chart: &Chart, out: &mut W) -> io::Result<()> {
        let table = chart.table();
        let cfg = chart.config();
        let layout = RowLayout::new(cfg, table);

        let rows = table.labels().iter().zip(table.rows()).zip(&self.normal);
        for (i, ((label, values), normal)) in rows.enumerate() {
            if cfg.space_between && i != 0 {
                out.write_all(b"\n")?;
            }
            // Only the first category of a row carries the label.
            let first = layout.label(label);
            let blank = RowLayout::blank_like(&first);

            for (j, (&value, &n)) in values.iter().zip(normal).enumerate() {
                let run = layout.run(value, n, self.val_mins[j]);
                layout.write_row(
                    out,
                    if j == 0 { &first } else { &blank },
                    &[(run, chart.color(j))],
                    &layout.tail(value),
                )?;
            }
        }
        Ok(())
    }

    fn normalized(&self) -> &[Vec<f64>] {
        &self.normal
    }
}
