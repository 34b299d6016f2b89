//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder, OptionValue},
    data::{Table, read_rows},
    error::{ConfigError, DataError, GraphError, ParseError},
    format::NumberFormat,
    readable::format_readable,
};

pub use crate::render::{Chart, ChartKind, Render, normalize, normalize_columns};

/// Draw `table` to stdout in one go.
///
/// Every configuration problem surfaces before the first byte is written.
pub fn plot_table(table: Table, config: Config) -> Result<(), GraphError> {
    let chart = Chart::new(table, config)?;
    chart.draw(&mut std::io::stdout().lock())
}
