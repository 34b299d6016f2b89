//! Vertical columns, tallest at the top, with value and label legends below.

use std::io::{self, Write};

use crate::{
    core::{color::write_styled, config::Config, data::Table, format::shortest},
    render::{
        chart::{Chart, Render},
        normalize::{normalize, normalize_columns},
        row::{Glyphs, ticks},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct VerticalChart {
    normal: Vec<Vec<f64>>,
}

impl VerticalChart {
    /// Several categories are only drawn with independent scales; the
    /// caller has rejected the other case.
    #[must_use]
    pub fn new(table: &Table, cfg: &Config) -> Self {
        let normal = if table.category_count() > 1 {
            normalize_columns(table.rows(), cfg.width)
        } else {
            normalize(table.rows(), cfg.width)
        };
        Self { normal }
    }
}

/// Columns for one category, built fresh on every draw.
struct Grid<'g> {
    columns: Vec<Vec<&'g str>>,
    blank: &'g str,
}

impl<'g> Grid<'g> {
    /// A zero-tick bar still shows the minor glyph so every column is visible.
    fn build(normal: impl Iterator<Item = f64>, glyphs: &'g Glyphs) -> Self {
        let columns = normal
            .map(|n| match ticks(n) {
                0 if glyphs.minor.is_empty() => Vec::new(),
                0 => vec![glyphs.minor.as_str()],
                k => vec![glyphs.tick.as_str(); k],
            })
            .collect();
        Self {
            columns,
            blank: " ",
        }
    }

    /// Rows to print: the tallest column's height.
    fn height(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Row `level` counted from the bottom, cells joined by one space.
    fn row(&self, level: usize) -> String {
        self.columns
            .iter()
            .map(|c| c.get(level).copied().unwrap_or(self.blank))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Print `texts` top to bottom, one character per line, each under its bar.
fn write_legend<W: Write>(out: &mut W, title: &str, texts: &[String]) -> io::Result<()> {
    let n = texts.len();
    writeln!(out, "{}{title}{}", "-".repeat(n), "-".repeat(n))?;

    let chars: Vec<Vec<char>> = texts.iter().map(|t| t.chars().collect()).collect();
    let depth = chars.iter().map(Vec::len).max().unwrap_or(0);
    for k in 0..depth {
        let line: Vec<String> = chars
            .iter()
            .map(|c| c.get(k).copied().unwrap_or(' ').to_string())
            .collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

impl Render for VerticalChart {
    fn render<W: Write>(&self, chart: &Chart, out: &mut W) -> io::Result<()> {
        let table = chart.table();
        let cfg = chart.config();
        let glyphs = Glyphs::from_config(cfg);

        for j in 0..table.category_count() {
            let grid = Grid::build(self.normal.iter().map(|r| r[j]), &glyphs);
            for level in (0..grid.height()).rev() {
                write_styled(out, chart.color(j), &grid.row(level))?;
                out.write_all(b"\n")?;
            }

            if !cfg.no_values {
                let values: Vec<String> = table.rows().iter().map(|r| shortest(r[j])).collect();
                write_legend(out, "Values", &values)?;
            }
            if !cfg.no_labels {
                write_legend(out, "Labels", table.labels())?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn normalized(&self) -> &[Vec<f64>] {
        &self.normal
    }
}
