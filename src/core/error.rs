//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::color::ColorError;

/// Table shape faults, caught when the table is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("no data provided")]
    EmptyData,
    #[error("row {row} has no values")]
    EmptyRow { row: usize },
    #[error("label and data array sizes don't match ({labels} labels, {rows} rows)")]
    LabelMismatch { labels: usize, rows: usize },
    #[error("there are missing values: row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("{categories} category names given for {values} values per row")]
    CategoryMismatch { categories: usize, values: usize },
    #[error("value at row {row}, column {column} is not a finite number")]
    NonFinite { row: usize, column: usize },
}

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid option `{0}`")]
    UnknownOption(String),
    #[error("option `{name}` expects {expected}")]
    OptionType {
        name: &'static str,
        expected: &'static str,
    },
    #[error("width must be at least 1")]
    ZeroWidth,
    #[error("histogram needs at least 1 bin")]
    ZeroBins,
    #[error("bad number format: {0}")]
    Format(String),
    #[error("color and category array sizes don't match ({colors} colors, {categories} categories)")]
    ColorCount { colors: usize, categories: usize },
    #[error("vertical graph for multiple series of same scale is not supported")]
    VerticalMultiSeries,
    #[error("vertical graph for histogram is not supported")]
    VerticalHistogram,
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Where in the input a line could not be turned into a row.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("multiple labels not allowed: '{label}' then '{text}'")]
    MultipleLabels { label: String, text: String },
    #[error("label '{0}' has no values")]
    NoValues(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GraphError {
    /// The reader on the other end of stdout went away.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<ColorError> for GraphError {
    fn from(e: ColorError) -> Self {
        Self::Config(ConfigError::Color(e))
    }
}
