//! A collection of constants.

/// One unit of normalized magnitude.
pub const TICK: &str = "▇";
/// Marks a value that is non-zero but shorter than one full tick.
pub const SM_TICK: &str = "▏";

/// Base-1000 unit suffixes for human readable numbers.
pub const UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// Bars are at most 50 ticks long unless told otherwise.
pub const DEFAULT_WIDTH: usize = 50;
/// Histograms split the value range into 5 buckets by default.
pub const DEFAULT_BINS: usize = 5;
/// Two decimals, left aligned in a five character field.
///
/// 1.0 becomes `"1.00 "`
pub const DEFAULT_FORMAT: &str = "{:<5.2f}";
/// Fields are split on commas unless the line has none.
pub const DEFAULT_DELIM: &str = ",";

/// Room kept for `": "` after a label.
pub const LABEL_GUTTER: usize = 2;
/// Room kept for the value printed after a bar when fitting to the terminal.
pub const TAIL_RESERVE: usize = 12;
