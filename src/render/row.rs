//! Row layout engine: tick runs, label column and value tail for one value.
//!
//! Independent of orientation; every chart kind lays its rows out through
//! [`RowLayout`].

use std::io::{self, Write};

use crate::core::{
    color::{AnsiCode, write_styled},
    config::Config,
    constants::{SM_TICK, TICK},
    data::Table,
    readable::format_readable,
};

/// What to draw for one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Run {
    /// A single minor tick: non-zero, but under one full tick.
    Minor,
    /// `n` full ticks; zero means nothing at all.
    Full(usize),
}

/// Tick count for a normalized value: truncated, never negative.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ticks(normalized: f64) -> usize {
    normalized as usize
}

/// Decide the run for `value`, which normalized to `num_blocks` ticks in a
/// table whose smallest raw value is `val_min`.
///
/// Anything that truncated to zero ticks but sits above the minimum, or above
/// zero, gets a minor tick so it does not look like the minimum.  With
/// `zero_as_small_tick` an exact zero always gets one too.
#[must_use]
pub fn bar_run(value: f64, num_blocks: usize, val_min: f64, zero_as_small_tick: bool) -> Run {
    let below_one = num_blocks < 1 && (value > val_min || value > 0.0);
    if below_one || (zero_as_small_tick && value == 0.0) {
        Run::Minor
    } else {
        Run::Full(num_blocks)
    }
}

/// Full and minor tick glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub tick: String,
    pub minor: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            tick: TICK.to_owned(),
            minor: SM_TICK.to_owned(),
        }
    }
}

impl Glyphs {
    /// A custom tick replaces the full tick and drops the minor one.
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        match &cfg.custom_tick {
            Some(t) => Self {
                tick: t.clone(),
                minor: String::new(),
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn render(&self, run: Run) -> String {
        match run {
            Run::Minor => self.minor.clone(),
            Run::Full(n) => self.tick.repeat(n),
        }
    }
}

/// Per-chart layout state: glyphs, label column width and the tail format.
pub struct RowLayout<'a> {
    cfg: &'a Config,
    glyphs: Glyphs,
    label_width: usize,
}

impl<'a> RowLayout<'a> {
    #[must_use]
    pub fn new(cfg: &'a Config, table: &Table) -> Self {
        Self::with_label_width(cfg, table.find_max_label_length())
    }

    #[must_use]
    pub fn with_label_width(cfg: &'a Config, label_width: usize) -> Self {
        Self {
            cfg,
            glyphs: Glyphs::from_config(cfg),
            label_width,
        }
    }

    #[inline]
    #[must_use]
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Values go before bars (horizontal charts only).
    #[inline]
    #[must_use]
    pub fn values_first(&self) -> bool {
        self.cfg.label_before && !self.cfg.vertical
    }

    /// Label column for the first value of a row: padded to the longest
    /// label, followed by `": "` unless values come first.
    #[must_use]
    pub fn label(&self, label: &str) -> String {
        if self.cfg.no_labels {
            return String::new();
        }
        if self.cfg.label_before {
            let w = self.label_width;
            format!("{label:<w$}")
        } else {
            self.colon_label(label)
        }
    }

    /// `"{label:<w}: "` whatever the value placement; empty with `no_labels`.
    #[must_use]
    pub fn colon_label(&self, label: &str) -> String {
        if self.cfg.no_labels {
            return String::new();
        }
        let w = self.label_width;
        format!("{label:<w$}: ")
    }

    /// Blank column of the same width, for the rest of a multi-category row.
    #[must_use]
    pub fn blank_like(label: &str) -> String {
        " ".repeat(label.chars().count())
    }

    /// `value` through the readable formatter (unless disabled) and the
    /// numeric template, unit appended.
    #[must_use]
    pub fn value_text(&self, value: f64) -> String {
        let (shown, unit) = if self.cfg.no_readable {
            (value, "")
        } else {
            format_readable(value, self.cfg.percentage)
        };
        format!("{}{unit}", self.cfg.format.format(shown))
    }

    /// Text after the bar: `" {value}{unit}{suffix}"`, or only the suffix
    /// when values are hidden.
    #[must_use]
    pub fn tail(&self, value: f64) -> String {
        if self.cfg.no_values {
            return self.cfg.suffix.clone();
        }
        let sep = if self.cfg.label_before { "" } else { " " };
        format!("{sep}{}{}", self.value_text(value), self.cfg.suffix)
    }

    /// Tail for totals and counts: the template applied to the exact value,
    /// never abbreviated to K/M/B/T.  Always follows the bar.
    #[must_use]
    pub fn raw_tail(&self, value: f64) -> String {
        if self.cfg.no_values {
            return self.cfg.suffix.clone();
        }
        let text = if self.cfg.percentage {
            format!("{}%", self.cfg.format.format(value * 100.0))
        } else {
            self.cfg.format.format(value)
        };
        format!(" {text}{}", self.cfg.suffix)
    }

    /// Run for a value whose normalized length is `normalized`.
    #[must_use]
    pub fn run(&self, value: f64, normalized: f64, val_min: f64) -> Run {
        bar_run(value, ticks(normalized), val_min, self.values_first())
    }

    /// Write a run, wrapped in `color` when there is one.
    pub fn write_run<W: Write>(
        &self,
        out: &mut W,
        run: Run,
        color: Option<&AnsiCode>,
    ) -> io::Result<()> {
        let text = self.glyphs.render(run);
        if text.is_empty() {
            return Ok(());
        }
        write_styled(out, color, &text)
    }

    /// One output line: `{label}{runs}{tail}`, or `{label} {tail}  {runs}`
    /// when values come first.
    pub fn write_row<W: Write>(
        &self,
        out: &mut W,
        label: &str,
        runs: &[(Run, Option<&AnsiCode>)],
        tail: &str,
    ) -> io::Result<()> {
        if !self.values_first() {
            return self.write_row_bar_first(out, label, runs, tail);
        }
        write!(out, "{label} {tail}  ")?;
        for &(run, color) in runs {
            self.write_run(out, run, color)?;
        }
        out.write_all(b"\n")
    }

    /// `{label}{runs}{tail}`, ignoring `label_before`.
    pub fn write_row_bar_first<W: Write>(
        &self,
        out: &mut W,
        label: &str,
        runs: &[(Run, Option<&AnsiCode>)],
        tail: &str,
    ) -> io::Result<()> {
        out.write_all(label.as_bytes())?;
        for &(run, color) in runs {
            self.write_run(out, run, color)?;
        }
        out.write_all(tail.as_bytes())?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::default()
    }

    // num_blocks == 0 in every case; the two conditions are
    // `value > val_min` and `value > 0`.
    #[test]
    fn truth_table_not_above_min_not_positive() {
        assert_eq!(bar_run(0.0, 0, 0.0, false), Run::Full(0));
        assert_eq!(bar_run(-5.0, 0, -5.0, false), Run::Full(0));
    }

    #[test]
    fn truth_table_not_above_min_but_positive() {
        assert_eq!(bar_run(1.0, 0, 1.0, false), Run::Minor);
    }

    #[test]
    fn truth_table_above_min_not_positive() {
        assert_eq!(bar_run(-1.0, 0, -5.0, false), Run::Minor);
        assert_eq!(bar_run(0.0, 0, -5.0, false), Run::Minor);
    }

    #[test]
    fn truth_table_above_min_and_positive() {
        assert_eq!(bar_run(0.5, 0, 0.1, false), Run::Minor);
    }

    #[test]
    fn full_ticks_ignore_the_minor_rule() {
        assert_eq!(bar_run(183.32, 17, 1.0, false), Run::Full(17));
        assert_eq!(bar_run(1.0, 1, 1.0, false), Run::Full(1));
    }

    #[test]
    fn values_first_turns_zero_into_minor_tick() {
        assert_eq!(bar_run(0.0, 0, 0.0, true), Run::Minor);
        assert_eq!(bar_run(3.0, 2, 0.0, true), Run::Full(2));
    }

    #[test]
    fn ticks_truncate() {
        assert_eq!(ticks(17.945), 17);
        assert_eq!(ticks(0.999), 0);
        assert_eq!(ticks(50.0), 50);
    }

    #[test]
    fn labels_pad_to_longest() {
        let c = cfg();
        let layout = RowLayout::with_label_width(&c, 4);
        assert_eq!(layout.label("ab"), "ab  : ");
        assert_eq!(RowLayout::blank_like("ab  : "), "      ");

        let c = Config::builder().label_before(true).build().unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).label("ab"), "ab  ");

        let c = Config::builder().no_labels(true).build().unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).label("ab"), "");
    }

    #[test]
    fn tails() {
        let c = cfg();
        let layout = RowLayout::with_label_width(&c, 4);
        assert_eq!(layout.tail(183.32), " 183.32");
        assert_eq!(layout.tail(1.0), " 1.00 ");
        assert_eq!(layout.tail(1_250_000.0), " 1.25 M");

        let c = Config::builder().no_readable(true).build().unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).tail(1500.0), " 1500.00");

        let c = Config::builder()
            .percentage(true)
            .format("{:.0f}")
            .build()
            .unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).tail(2.0), " 200%");

        let c = Config::builder()
            .no_values(true)
            .suffix(" kg")
            .build()
            .unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).tail(9.0), " kg");

        let c = Config::builder()
            .label_before(true)
            .suffix("x")
            .build()
            .unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).tail(2.0), "2.00 x");
    }

    #[test]
    fn raw_tail_is_never_abbreviated() {
        let c = cfg();
        let layout = RowLayout::with_label_width(&c, 4);
        assert_eq!(layout.tail(12_345.0), " 12.35K");
        assert_eq!(layout.raw_tail(12_345.0), " 12345.00");
        assert_eq!(layout.raw_tail(1.0), " 1.00 ");

        let c = Config::builder()
            .percentage(true)
            .format("{:.0f}")
            .suffix(" of all")
            .build()
            .unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).raw_tail(0.25), " 25% of all");

        // the bar comes first, so the separator stays
        let c = Config::builder().label_before(true).build().unwrap();
        assert_eq!(RowLayout::with_label_width(&c, 4).raw_tail(1500.0), " 1500.00");
    }

    #[test]
    fn colon_label_ignores_value_placement() {
        let c = Config::builder().label_before(true).build().unwrap();
        let layout = RowLayout::with_label_width(&c, 3);
        assert_eq!(layout.label("ab"), "ab ");
        assert_eq!(layout.colon_label("ab"), "ab : ");

        let mut out = Vec::new();
        layout
            .write_row_bar_first(&mut out, "ab : ", &[(Run::Full(2), None)], " 2.00 ")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab : ▇▇ 2.00 \n");
    }

    #[test]
    fn runs_are_styled_only_with_a_colour() {
        let c = cfg();
        let layout = RowLayout::with_label_width(&c, 0);
        let mut out = Vec::new();
        layout.write_run(&mut out, Run::Full(3), None).unwrap();
        layout.write_run(&mut out, Run::Full(0), Some(&AnsiCode::red())).unwrap();
        layout.write_run(&mut out, Run::Minor, Some(&AnsiCode::red())).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "▇▇▇\x1b[91m▏\x1b[0m"
        );
    }

    #[test]
    fn custom_tick_has_no_minor_glyph() {
        let c = Config::builder().custom_tick("🔥").build().unwrap();
        let g = Glyphs::from_config(&c);
        assert_eq!(g.render(Run::Full(2)), "🔥🔥");
        assert_eq!(g.render(Run::Minor), "");
    }
}
