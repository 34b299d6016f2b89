//! Human readable magnitudes: `1_250_000 -> (1.25, "M")`.

use crate::core::constants::UNITS;

/// Scale `value` into base-1000 units, or relabel it as a percentage.
///
/// * `percentage` multiplies by 100 and returns `"%"`, whatever the magnitude.
/// * Magnitudes below 1 (and exact zero) are returned untouched with no unit.
/// * Otherwise the value is divided by the largest power of 1000 not above it
///   and rounded to three decimals, keeping its sign.
/// * Magnitudes past the last unit (`T`) are not abbreviated at all: the raw
///   value comes back with no unit.
#[must_use]
pub fn format_readable(value: f64, percentage: bool) -> (f64, &'static str) {
    if percentage {
        return (value * 100.0, "%");
    }
    let magnitude = value.abs();
    if magnitude < 1.0 || !magnitude.is_finite() {
        return (value, UNITS[0]);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (magnitude.log10() / 3.0).floor() as usize;
    let Some(unit) = UNITS.get(index) else {
        return (value, UNITS[0]);
    };

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let scaled = round_to(magnitude / 1000f64.powi(index as i32), 3);
    (scaled.copysign(value), unit)
}

/// Round half away from zero to `places` decimals.
#[inline]
fn round_to(x: f64, places: i32) -> f64 {
    let k = 10f64.powi(places);
    (x * k).round() / k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_1000_units() {
        assert_eq!(format_readable(999.0, false), (999.0, ""));
        assert_eq!(format_readable(1000.0, false), (1.0, "K"));
        assert_eq!(format_readable(1_250_000.0, false), (1.25, "M"));
        assert_eq!(format_readable(19_561_100.0, false), (19.561, "M"));
        assert_eq!(format_readable(12_550.0, false), (12.55, "K"));
        assert_eq!(format_readable(3.2e9, false), (3.2, "B"));
        assert_eq!(format_readable(1.234_567e12, false), (1.235, "T"));
    }

    #[test]
    fn zero_and_small_values_are_untouched() {
        assert_eq!(format_readable(0.0, false), (0.0, ""));
        assert_eq!(format_readable(0.123_456_7, false), (0.123_456_7, ""));
        assert_eq!(format_readable(-0.5, false), (-0.5, ""));
    }

    #[test]
    fn sign_is_preserved() {
        assert_eq!(format_readable(-1500.0, false), (-1.5, "K"));
        assert_eq!(format_readable(-1.0, false), (-1.0, ""));
    }

    #[test]
    fn percentage_is_a_relabel() {
        assert_eq!(format_readable(0.5, true), (50.0, "%"));
        assert_eq!(format_readable(2.0, true), (200.0, "%"));
        assert_eq!(format_readable(5000.0, true), (500_000.0, "%"));
    }

    #[test]
    fn past_trillions_falls_back_to_raw() {
        assert_eq!(format_readable(1.234_567e15, false), (1.234_567e15, ""));
        assert_eq!(format_readable(-1.234_567e16, false), (-1.234_567e16, ""));
    }
}
