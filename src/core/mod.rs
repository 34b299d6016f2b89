//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod readable;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder, OptionValue};
pub use constants::{DEFAULT_BINS, DEFAULT_FORMAT, DEFAULT_WIDTH, SM_TICK, TICK};
pub use data::Table;
pub use error::{ConfigError, DataError, GraphError, ParseError};
pub use format::{NumberFormat, shortest};
pub use readable::format_readable;
