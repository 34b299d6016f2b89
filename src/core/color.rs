//! Zero-alloc ANSI colour wrapper for bar styling.

use std::{fmt, io, str};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color '{0}'. choose from 'red', 'blue', 'green', 'magenta', 'yellow', 'black', 'cyan' or #RRGGBB")]
    UnknownName(String),
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Static("\x1b[90m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[91m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[92m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[93m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[94m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[95m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[96m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse colour names or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            other if other.starts_with('#') => Self::from_hex(other),
            other => Err(ColorError::UnknownName(other.to_owned())),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

/// Default stacked-chart colours, in assignment order.
pub const PALETTE: [AnsiCode; 7] = [
    AnsiCode::red(),
    AnsiCode::blue(),
    AnsiCode::green(),
    AnsiCode::magenta(),
    AnsiCode::yellow(),
    AnsiCode::black(),
    AnsiCode::cyan(),
];

/// First `n` palette colours, wrapping around when `n` exceeds the palette.
#[must_use]
pub fn palette(n: usize) -> Vec<AnsiCode> {
    PALETTE.iter().copied().cycle().take(n).collect()
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

/// Write `text`, wrapped in `color` when one is given.  No escapes otherwise.
pub fn write_styled<W: io::Write>(
    out: &mut W,
    color: Option<&AnsiCode>,
    text: &str,
) -> io::Result<()> {
    match color {
        Some(c) => write!(out, "{c}{text}{}", AnsiCode::reset()),
        None => out.write_all(text.as_bytes()),
    }
}
