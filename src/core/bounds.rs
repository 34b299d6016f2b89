//! Geometry helpers: value range + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{LABEL_GUTTER, TAIL_RESERVE};

/// Inclusive `(min, max)` over every cell, `(0.0, 0.0)` for no cells.
#[must_use]
pub fn value_range(rows: &[Vec<f64>]) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in rows.iter().flatten() {
        low = low.min(v);
        high = high.max(v);
    }
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 0.0);
    }
    (low, high)
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_columns() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Cap the bar width so `label: bar value` fits in `columns`.
///
/// Never returns less than one tick.
#[inline]
#[must_use]
pub fn fit_width(requested: usize, label_width: usize, columns: usize) -> usize {
    let room = columns.saturating_sub(label_width + LABEL_GUTTER + TAIL_RESERVE);
    requested.min(room).max(1)
}
