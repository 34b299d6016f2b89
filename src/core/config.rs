//! Run-time configuration object + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{DEFAULT_BINS, DEFAULT_WIDTH},
    error::ConfigError,
    format::NumberFormat,
};

/// Immutable parameters handed to the chart renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: Option<String>,
    /// Longest bar, in ticks.
    pub width: usize,
    pub format: NumberFormat,
    pub suffix: String,
    pub no_labels: bool,
    pub no_values: bool,
    pub space_between: bool,
    pub vertical: bool,
    pub stacked: bool,
    pub histogram: bool,
    pub bins: usize,
    pub different_scale: bool,
    pub label_before: bool,
    pub percentage: bool,
    pub no_readable: bool,
    pub custom_tick: Option<String>,
    /// One per category, or a single one for histograms.
    pub colors: Option<Vec<AnsiCode>>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_WIDTH,
            format: NumberFormat::default(),
            suffix: String::new(),
            no_labels: false,
            no_values: false,
            space_between: false,
            vertical: false,
            stacked: false,
            histogram: false,
            bins: DEFAULT_BINS,
            different_scale: false,
            label_before: false,
            percentage: false,
            no_readable: false,
            custom_tick: None,
            colors: None,
        }
    }
}

/// A loosely typed option value, checked against the option's kind by
/// [`ConfigBuilder::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(usize),
    Str(String),
    Colors(Vec<AnsiCode>),
    None,
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
impl From<usize> for OptionValue {
    fn from(v: usize) -> Self {
        Self::Int(v)
    }
}
impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}
impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
impl From<Vec<AnsiCode>> for OptionValue {
    fn from(v: Vec<AnsiCode>) -> Self {
        Self::Colors(v)
    }
}

/// Every option name accepted by [`ConfigBuilder::set`].
pub const OPTION_NAMES: [&str; 17] = [
    "title",
    "width",
    "format",
    "suffix",
    "no_labels",
    "no_values",
    "space_between",
    "colors",
    "vertical",
    "stacked",
    "histogram",
    "bins",
    "different_scale",
    "custom_tick",
    "label_before",
    "percentage",
    "no_readable",
];

/// Fluent builder; the numeric template is parsed in `build`.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    cfg: Config,
    format: Option<String>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: Config::default(),
            format: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.cfg.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.cfg.title = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.cfg.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn format(mut self, f: impl Into<String>) -> Self {
        self.format = Some(f.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn suffix(mut self, s: impl Into<String>) -> Self {
        self.cfg.suffix = s.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn no_labels(mut self, v: bool) -> Self {
        self.cfg.no_labels = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn no_values(mut self, v: bool) -> Self {
        self.cfg.no_values = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn space_between(mut self, v: bool) -> Self {
        self.cfg.space_between = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn vertical(mut self, v: bool) -> Self {
        self.cfg.vertical = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn stacked(mut self, v: bool) -> Self {
        self.cfg.stacked = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn histogram(mut self, v: bool) -> Self {
        self.cfg.histogram = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn bins(mut self, n: usize) -> Self {
        self.cfg.bins = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn different_scale(mut self, v: bool) -> Self {
        self.cfg.different_scale = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn label_before(mut self, v: bool) -> Self {
        self.cfg.label_before = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn percentage(mut self, v: bool) -> Self {
        self.cfg.percentage = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn no_readable(mut self, v: bool) -> Self {
        self.cfg.no_readable = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn custom_tick(mut self, t: impl Into<String>) -> Self {
        let t = t.into();
        self.cfg.custom_tick = (!t.is_empty()).then_some(t);
        self
    }
    #[inline]
    #[must_use]
    pub fn colors(mut self, c: Vec<AnsiCode>) -> Self {
        self.cfg.colors = Some(c);
        self
    }

    /// Set an option by name.  Unknown names and values of the wrong kind
    /// are rejected here, not when the chart is drawn.
    pub fn set(self, name: &str, value: impl Into<OptionValue>) -> Result<Self, ConfigError> {
        use OptionValue as V;

        let value = value.into();
        let Some(&name) = OPTION_NAMES.iter().find(|n| **n == name) else {
            return Err(ConfigError::UnknownOption(name.to_owned()));
        };
        let wrong = |expected| ConfigError::OptionType { name, expected };

        Ok(match (name, value) {
            ("title", V::Str(s)) => self.title(s),
            ("title", V::None) => {
                let mut b = self;
                b.cfg.title = None;
                b
            }
            ("title", _) => return Err(wrong("a string or nothing")),
            ("width", V::Int(n)) => self.width(n),
            ("bins", V::Int(n)) => self.bins(n),
            ("width" | "bins", _) => return Err(wrong("an integer")),
            ("format", V::Str(s)) => self.format(s),
            ("suffix", V::Str(s)) => self.suffix(s),
            ("custom_tick", V::Str(s)) => self.custom_tick(s),
            ("custom_tick", V::None) => self.custom_tick(""),
            ("format" | "suffix" | "custom_tick", _) => return Err(wrong("a string")),
            ("colors", V::Colors(c)) => self.colors(c),
            ("colors", V::None) => {
                let mut b = self;
                b.cfg.colors = None;
                b
            }
            ("colors", _) => return Err(wrong("a list of colors")),
            (flag, V::Bool(v)) => self.flag(flag, v),
            (_, _) => return Err(wrong("a boolean")),
        })
    }

    fn flag(self, name: &str, v: bool) -> Self {
        match name {
            "no_labels" => self.no_labels(v),
            "no_values" => self.no_values(v),
            "space_between" => self.space_between(v),
            "vertical" => self.vertical(v),
            "stacked" => self.stacked(v),
            "histogram" => self.histogram(v),
            "different_scale" => self.different_scale(v),
            "label_before" => self.label_before(v),
            "percentage" => self.percentage(v),
            "no_readable" => self.no_readable(v),
            _ => self,
        }
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let mut cfg = self.cfg;
        if cfg.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if cfg.bins == 0 {
            return Err(ConfigError::ZeroBins);
        }
        if let Some(f) = self.format {
            cfg.format = NumberFormat::parse(&f)?;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::builder().build().unwrap();
        assert_eq!(cfg.width, 50);
        assert_eq!(cfg.bins, 5);
        assert_eq!(cfg.format.as_str(), "{:<5.2f}");
        assert!(cfg.colors.is_none());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn named_options() {
        let cfg = Config::builder()
            .set("width", 20usize)
            .and_then(|b| b.set("stacked", true))
            .and_then(|b| b.set("suffix", " kg"))
            .and_then(|b| b.set("colors", vec![AnsiCode::red()]))
            .and_then(ConfigBuilder::build)
            .unwrap();
        assert_eq!(cfg.width, 20);
        assert!(cfg.stacked);
        assert_eq!(cfg.suffix, " kg");
        assert_eq!(cfg.colors, Some(vec![AnsiCode::red()]));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = Config::builder().set("colour", true).unwrap_err();
        assert_eq!(err, ConfigError::UnknownOption("colour".into()));
    }

    #[test]
    fn mistyped_option_is_rejected() {
        assert_eq!(
            Config::builder().set("width", "wide").unwrap_err(),
            ConfigError::OptionType {
                name: "width",
                expected: "an integer"
            }
        );
        assert!(matches!(
            Config::builder().set("stacked", 3usize),
            Err(ConfigError::OptionType { name: "stacked", .. })
        ));
        assert!(matches!(
            Config::builder().set("suffix", false),
            Err(ConfigError::OptionType { name: "suffix", .. })
        ));
    }

    #[test]
    fn build_validates() {
        assert_eq!(
            Config::builder().width(0).build().unwrap_err(),
            ConfigError::ZeroWidth
        );
        assert_eq!(
            Config::builder().bins(0).build().unwrap_err(),
            ConfigError::ZeroBins
        );
        assert!(matches!(
            Config::builder().format("{:.2q}").build(),
            Err(ConfigError::Format(_))
        ));
    }

    #[test]
    fn empty_custom_tick_means_default() {
        let cfg = Config::builder().custom_tick("").build().unwrap();
        assert_eq!(cfg.custom_tick, None);
        let cfg = Config::builder().custom_tick("*").build().unwrap();
        assert_eq!(cfg.custom_tick.as_deref(), Some("*"));
    }
}
