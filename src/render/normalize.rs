//! Raw values -> tick counts.

use crate::core::bounds::value_range;

/// Scale `rows` so the largest cell is `width` ticks long.
///
/// Negative data is first shifted up by `|min|` so every bar length is
/// non-negative.  The scale factor is `width / max`, not `width / (max - min)`:
/// the smallest value keeps its proportional length against the largest.
///
/// When every cell is equal after the shift there is no spread to scale and
/// the shifted table comes back as is.  `rows` must be non-empty.
#[must_use]
pub fn normalize(rows: &[Vec<f64>], width: usize) -> Vec<Vec<f64>> {
    let (min_raw, _) = value_range(rows);
    let offset = if min_raw < 0.0 { min_raw.abs() } else { 0.0 };
    let shifted: Vec<Vec<f64>> = if offset > 0.0 {
        rows.iter()
            .map(|r| r.iter().map(|v| v + offset).collect())
            .collect()
    } else {
        rows.to_vec()
    };

    let (min, max) = value_range(&shifted);
    if min == max {
        log::debug!("normalize: degenerate table (all cells {min}), left unscaled");
        return shifted;
    }

    #[allow(clippy::cast_precision_loss)]
    let norm_factor = width as f64 / max;
    shifted
        .into_iter()
        .map(|r| r.into_iter().map(|v| v * norm_factor).collect())
        .collect()
}

/// Normalize each column on its own and put the columns back side by side.
#[must_use]
pub fn normalize_columns(rows: &[Vec<f64>], width: usize) -> Vec<Vec<f64>> {
    let cols = rows.first().map_or(0, Vec::len);
    let mut out: Vec<Vec<f64>> = vec![Vec::with_capacity(cols); rows.len()];
    for j in 0..cols {
        let column: Vec<Vec<f64>> = rows.iter().map(|r| vec![r[j]]).collect();
        for (dst, cell) in out.iter_mut().zip(normalize(&column, width)) {
            dst.push(cell[0]);
        }
    }
    out
}
