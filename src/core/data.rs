//! Labeled numeric table + line-based loader with zero-allocation float parsing.

use std::{
    fmt,
    io::{BufRead, BufReader, Read},
};

use crate::core::{
    constants::DEFAULT_DELIM,
    error::{DataError, ParseError, ParseErrorKind},
};

// --- Table ---

/// Rows of values, one label per row, optionally one name per column.
///
/// Every row holds the same number of values (one per category); this is
/// checked on construction and the table is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
    categories: Vec<String>,
}

impl Table {
    pub fn new<L>(labels: Vec<L>, rows: Vec<Vec<f64>>) -> Result<Self, DataError>
    where
        L: Into<String>,
    {
        if rows.is_empty() {
            return Err(DataError::EmptyData);
        }
        if labels.len() != rows.len() {
            return Err(DataError::LabelMismatch {
                labels: labels.len(),
                rows: rows.len(),
            });
        }
        let expected = rows[0].len();
        for (row, values) in rows.iter().enumerate() {
            if values.is_empty() {
                return Err(DataError::EmptyRow { row });
            }
            if values.len() != expected {
                return Err(DataError::RaggedRow {
                    row,
                    expected,
                    got: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite { row, column });
            }
        }
        Ok(Self {
            labels: labels.into_iter().map(Into::into).collect(),
            rows,
            categories: Vec::new(),
        })
    }

    /// Attach column names.  An empty list clears them.
    pub fn with_categories<C>(mut self, categories: Vec<C>) -> Result<Self, DataError>
    where
        C: Into<String>,
    {
        if !categories.is_empty() && categories.len() != self.category_count() {
            return Err(DataError::CategoryMismatch {
                categories: categories.len(),
                values: self.category_count(),
            });
        }
        self.categories = categories.into_iter().map(Into::into).collect();
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Values per row.
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn find_min(&self) -> f64 {
        self.rows.iter().flatten().copied().fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn find_max(&self) -> f64 {
        self.rows
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Longest label, counted in characters.
    #[must_use]
    pub fn find_max_label_length(&self) -> usize {
        self.labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Column `j` as a single-column table (`[[v0], [v1], …]`).
    #[must_use]
    pub fn column(&self, j: usize) -> Vec<Vec<f64>> {
        self.rows.iter().map(|r| vec![r[j]]).collect()
    }
}

impl fmt::Display for Table {
    /// Labels right-aligned in one column, values (per category) in the next.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_w = self.find_max_label_length().max("Labels".len()) + 1;
        writeln!(f, "{:>label_w$} | Data", "Labels")?;
        writeln!(f, "{}|{}", "-".repeat(label_w + 1), "-".repeat(12))?;

        for (label, values) in self.labels.iter().zip(&self.rows) {
            if self.categories.is_empty() {
                writeln!(f, "{label:>label_w$} | {values:?}")?;
                continue;
            }
            for (j, (cat, v)) in self.categories.iter().zip(values).enumerate() {
                let shown = if j == 0 { label.as_str() } else { "" };
                writeln!(f, "{shown:>label_w$} | ({cat}) {v}")?;
            }
        }
        Ok(())
    }
}

// --- Helpers ---

#[inline]
pub fn normalize_unicode_minus(line: &str) -> std::borrow::Cow<'_, str> {
    if line.contains('\u{2212}') {
        line.replace('\u{2212}', "-").into()
    } else {
        line.into()
    }
}

/// A finite float, or `None` when the token is not a number.
#[inline]
fn parse_f64(token: &str) -> Option<f64> {
    lexical_core::parse::<f64>(token.as_bytes())
        .ok()
        .filter(|v| v.is_finite())
}

/// Split one data line into its label and values.
///
/// Leading non-numeric tokens form the label (joined back with `delim`).  If
/// every token is numeric the first one is the label.
fn label_row(tokens: &[&str], delim: &str, line: usize) -> Result<(String, Vec<f64>), ParseError> {
    let mut label_parts: Vec<&str> = Vec::new();
    let mut values = Vec::with_capacity(tokens.len());

    for &tok in tokens {
        match parse_f64(tok) {
            Some(v) => values.push(v),
            None if values.is_empty() => label_parts.push(tok),
            None => {
                return Err(ParseError {
                    line,
                    kind: ParseErrorKind::MultipleLabels {
                        label: label_parts.join(delim),
                        text: tok.to_owned(),
                    },
                });
            }
        }
    }

    let label = if label_parts.is_empty() {
        values.remove(0);
        tokens[0].to_owned()
    } else {
        label_parts.join(delim)
    };
    if values.is_empty() {
        return Err(ParseError {
            line,
            kind: ParseErrorKind::NoValues(label),
        });
    }
    Ok((label, values))
}

// --- Line ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Raw rows as read from text, before shape validation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Parsed {
    pub categories: Vec<String>,
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Parsed {
    /// Validate into a [`Table`].
    pub fn into_table(self) -> Result<Table, DataError> {
        Table::new(self.labels, self.rows)?.with_categories(self.categories)
    }
}

/// Read `label,value[,value…]` lines.
///
/// * blank lines and lines starting with `#` are skipped
/// * a line starting with `@` names the categories
/// * lines split on `delim` when it appears after the first character,
///   otherwise on whitespace
pub fn read_rows<R: Read>(src: R, delim: Option<&str>) -> Result<Parsed, ParseError> {
    let delim = delim.filter(|d| !d.is_empty()).unwrap_or(DEFAULT_DELIM);
    let rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut parsed = Parsed::default();

    for (idx, line) in rdr.lines().enumerate() {
        let line_no = idx + 1;
        let raw = line.map_err(|e| ParseError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        let norm = normalize_unicode_minus(&raw);
        let line = norm.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('@') {
            parsed.categories = rest
                .split(delim)
                .map(|c| c.trim().to_owned())
                .collect();
            continue;
        }

        let (tokens, joiner): (Vec<&str>, &str) = match line.find(delim) {
            Some(pos) if pos > 0 => (line.split(delim).map(str::trim).collect(), delim),
            _ => (line.split_whitespace().collect(), " "),
        };
        let (label, values) = label_row(&tokens, joiner, line_no)?;
        parsed.labels.push(label);
        parsed.rows.push(values);
    }

    log::debug!(
        "read {} rows, {} categories",
        parsed.rows.len(),
        parsed.categories.len()
    );
    Ok(parsed)
}

/// Read rows from a path, `-` meaning stdin.
pub fn read_rows_from_path(path: &str, delim: Option<&str>) -> Result<Parsed, ParseError> {
    if path == "-" {
        log::debug!("reading data from stdin");
        read_rows(std::io::stdin(), delim)
    } else {
        use std::fs::File;
        log::debug!("reading data from {path}");
        read_rows(
            File::open(path).map_err(|e| ParseError {
                line: 0,
                kind: ParseErrorKind::Io(e),
            })?,
            delim,
        )
    }
}
