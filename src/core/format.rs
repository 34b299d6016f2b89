//! Numeric format templates, e.g. `"{:<5.2f}"` or `"~{:+.1e}"`.
//!
//! One placeholder per template, with the usual mini-language inside it:
//! `{[:[[fill]align][sign][0][width][.precision][type]]}`.
//!
//! * `align`: `<` left, `>` right (default), `^` centre, `=` pad after sign
//! * `sign`:  `-` (default), `+` always, ` ` space for positives
//! * `type`:  `f`/`F` fixed, `e`/`E` exponent, `%` percent, none = shortest
//!
//! Braces outside the placeholder are written as `{{` and `}}`.

use std::{fmt, str::FromStr};

use crate::core::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    AfterSign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    Minus,
    Plus,
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Shortest,
    Fixed,
    Exp { upper: bool },
    Percent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Spec {
    fill: char,
    align: Align,
    sign: Sign,
    width: usize,
    precision: Option<usize>,
    kind: Kind,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Right,
            sign: Sign::Minus,
            width: 0,
            precision: None,
            kind: Kind::Shortest,
        }
    }
}

/// Parsed template, ready to format any number of values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    source: String,
    prefix: String,
    suffix: String,
    spec: Spec,
}

impl NumberFormat {
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let bad = |why: &str| ConfigError::Format(format!("{why} in `{template}`"));

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut field: Option<String> = None;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if field.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    if field.is_some() {
                        return Err(bad("more than one placeholder"));
                    }
                    let mut inner = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => inner.push(ch),
                            None => return Err(bad("unclosed placeholder")),
                        }
                    }
                    field = Some(inner);
                }
                '}' => return Err(bad("single '}'")),
                _ => literal.push(c),
            }
        }

        let field = field.ok_or_else(|| bad("no placeholder"))?;
        let spec_text = match field.split_once(':') {
            Some(("" | "0", spec)) => spec,
            None if field.is_empty() || field == "0" => "",
            _ => return Err(bad("only positional field 0 is supported")),
        };
        let spec = parse_spec(spec_text).map_err(bad)?;

        Ok(Self {
            source: template.to_owned(),
            prefix,
            suffix,
            spec,
        })
    }

    /// The template this format was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let spec = &self.spec;
        let negative = value < 0.0;
        let magnitude = value.abs();

        let p = spec.precision.unwrap_or(6);
        let body = match spec.kind {
            Kind::Shortest if spec.precision.is_some() => format!("{magnitude:.p$}"),
            Kind::Shortest => shortest(magnitude),
            Kind::Fixed => format!("{magnitude:.p$}"),
            Kind::Exp { upper } => {
                let s = exponent(magnitude, p);
                if upper { s.to_uppercase() } else { s }
            }
            Kind::Percent => format!("{:.p$}%", magnitude * 100.0),
        };
        let sign = match (negative, spec.sign) {
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Minus) => "",
        };

        let len = sign.chars().count() + body.chars().count();
        let pad = spec.width.saturating_sub(len);
        let fill = |n: usize| std::iter::repeat_n(spec.fill, n).collect::<String>();

        let number = match spec.align {
            Align::Left => format!("{sign}{body}{}", fill(pad)),
            Align::Right => format!("{}{sign}{body}", fill(pad)),
            Align::Center => format!("{}{sign}{body}{}", fill(pad / 2), fill(pad - pad / 2)),
            Align::AfterSign => format!("{sign}{}{body}", fill(pad)),
        };
        format!("{}{number}{}", self.prefix, self.suffix)
    }
}

/// Shortest text that reads back as `value`, always with a decimal point or
/// an exponent: `2.0`, `0.1`, `1e+16`, `1.5e-05`.
///
/// Scientific notation is used below `1e-4` and from `1e16` up.
#[must_use]
pub fn shortest(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{value:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let plain = value.to_string();
        if plain.contains('.') { plain } else { format!("{plain}.0") }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            source: crate::core::constants::DEFAULT_FORMAT.to_owned(),
            prefix: String::new(),
            suffix: String::new(),
            spec: Spec {
                align: Align::Left,
                width: 5,
                precision: Some(2),
                kind: Kind::Fixed,
                ..Spec::default()
            },
        }
    }
}

impl FromStr for NumberFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}

fn parse_spec(text: &str) -> Result<Spec, &'static str> {
    let chars: Vec<char> = text.chars().collect();
    let mut spec = Spec::default();
    let mut i = 0;
    let mut explicit_align = false;

    if let Some(a) = chars.get(1).copied().and_then(align_of) {
        spec.fill = chars[0];
        spec.align = a;
        explicit_align = true;
        i = 2;
    } else if let Some(a) = chars.first().copied().and_then(align_of) {
        spec.align = a;
        explicit_align = true;
        i = 1;
    }

    match chars.get(i) {
        Some('+') => {
            spec.sign = Sign::Plus;
            i += 1;
        }
        Some('-') => i += 1,
        Some(' ') => {
            spec.sign = Sign::Space;
            i += 1;
        }
        _ => {}
    }

    if chars.get(i) == Some(&'0') {
        if !explicit_align {
            spec.fill = '0';
            spec.align = Align::AfterSign;
        }
        i += 1;
    }

    let (width, next) = digits(&chars, i);
    spec.width = width.unwrap_or(0);
    i = next;

    if chars.get(i) == Some(&'.') {
        let (precision, next) = digits(&chars, i + 1);
        spec.precision = Some(precision.ok_or("missing precision after '.'")?);
        i = next;
    }

    if let Some(&t) = chars.get(i) {
        spec.kind = match t {
            'f' | 'F' => Kind::Fixed,
            'e' => Kind::Exp { upper: false },
            'E' => Kind::Exp { upper: true },
            '%' => Kind::Percent,
            _ => return Err("unsupported format type"),
        };
        i += 1;
    }

    if i != chars.len() {
        return Err("trailing characters in format spec");
    }
    Ok(spec)
}

fn digits(chars: &[char], start: usize) -> (Option<usize>, usize) {
    let mut end = start;
    let mut n: Option<usize> = None;
    while let Some(d) = chars.get(end).and_then(|c| c.to_digit(10)) {
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        end += 1;
    }
    (n, end)
}

/// `1234.5 -> "1.23e+03"`: mantissa then a signed exponent of at least two digits.
fn exponent(magnitude: f64, precision: usize) -> String {
    let raw = format!("{magnitude:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}
