//! Histogram of the first category, one bar per bucket.

use std::io::{self, Write};

use crate::{
    core::{config::Config, data::Table},
    render::{
        binner::{Bucket, bin},
        chart::{Chart, Render},
        normalize::normalize,
        row::{RowLayout, bar_run, ticks},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    buckets: Vec<Bucket>,
    normal: Vec<Vec<f64>>,
}

impl HistogramChart {
    #[must_use]
    pub fn new(table: &Table, cfg: &Config) -> Self {
        let values: Vec<f64> = table.rows().iter().map(|r| r[0]).collect();
        let buckets = bin(&values, cfg.bins);
        #[allow(clippy::cast_precision_loss)]
        let counts: Vec<Vec<f64>> = buckets.iter().map(|b| vec![b.count as f64]).collect();
        Self {
            normal: normalize(&counts, cfg.width),
            buckets,
        }
    }

    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// `"{start} – {end}"` for every bucket, right-aligned to the widest border.
    fn ranges(&self) -> Vec<String> {
        let width = self
            .buckets
            .iter()
            .flat_map(|b| [b.start, b.end])
            .map(|x| format!("{x:.1}").len())
            .max()
            .unwrap_or(0);
        self.buckets
            .iter()
            .map(|b| format!("{:>width$.1} – {:>width$.1}", b.start, b.end))
            .collect()
    }
}

impl Render for HistogramChart {
    fn render<W: Write>(&self, chart: &Chart, out: &mut W) -> io::Result<()> {
        let cfg = chart.config();
        let layout = RowLayout::with_label_width(cfg, 0);

        for (i, ((bucket, normal), range)) in self
            .buckets
            .iter()
            .zip(&self.normal)
            .zip(self.ranges())
            .enumerate()
        {
            if cfg.space_between && i != 0 {
                out.write_all(b"\n")?;
            }
            let label = if cfg.no_labels {
                String::new()
            } else {
                format!("{range}: ")
            };
            #[allow(clippy::cast_precision_loss)]
            let count = bucket.count as f64;
            let run = bar_run(count, ticks(normal[0]), 0.0, false);
            layout.write_row_bar_first(
                out,
                &label,
                &[(run, chart.color(0))],
                &layout.raw_tail(count),
            )?;
        }
        Ok(())
    }

    fn normalized(&self) -> &[Vec<f64>] {
        &self.normal
    }
}
