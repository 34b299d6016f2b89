//! Histogram binning.
//!
//! Splits `[floor(min), ceil(max)]` into equal-width buckets.  Buckets are
//! half-open `[start, end)` except the last, which also takes its end border,
//! so the maximum is always counted and bucket counts add up to the number of
//! input values.

/// One histogram bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    pub start: f64, // inclusive
    pub end: f64,   // exclusive, except for the last bucket
    pub count: usize,
}

/// Inner borders are rounded to one decimal; the outer ones are whole numbers.
#[must_use]
pub fn borders(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let low = min.floor();
    let mut high = max.ceil();
    if high <= low {
        high = low + 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let step = (high - low) / bins as f64;

    (0..=bins)
        .map(|k| {
            if k == bins {
                high
            } else {
                #[allow(clippy::cast_precision_loss)]
                let b = low + step * k as f64;
                (b * 10.0).round() / 10.0
            }
        })
        .collect()
}

/// Count `values` into `bins` buckets.  No buckets for no values or no bins.
#[must_use]
pub fn bin(values: &[f64], bins: usize) -> Vec<Bucket> {
    if bins == 0 || values.is_empty() {
        return Vec::new();
    }
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let edges = borders(min, max, bins);
    let mut counts = vec![0usize; bins];

    for &v in values {
        // borders at or below v; at least one since edges[0] = floor(min)
        let below = edges.partition_point(|&b| b <= v);
        let idx = below.saturating_sub(1).min(bins - 1);
        counts[idx] += 1;
    }

    log::debug!("histogram borders {edges:?} counts {counts:?}");
    edges
        .windows(2)
        .zip(counts)
        .map(|(w, count)| Bucket {
            start: w[0],
            end: w[1],
            count,
        })
        .collect()
}
