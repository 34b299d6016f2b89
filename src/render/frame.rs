//! Chart chrome written before the rows: title and category legend.

use std::io::{self, Write};

use crate::{
    core::{
        color::{AnsiCode, colorize},
        data::Table,
    },
    render::row::Glyphs,
};

/// `# {title}` then a blank line.
pub fn write_title<W: Write>(out: &mut W, title: Option<&str>) -> io::Result<()> {
    match title {
        Some(t) => write!(out, "# {t}\n\n"),
        None => Ok(()),
    }
}

/// One `{tick} {name}` entry per category, in the category's colour, then two
/// blank lines.  Nothing when the table has no category names.
pub fn write_legend<W: Write>(
    out: &mut W,
    table: &Table,
    colors: &[Option<AnsiCode>],
    glyphs: &Glyphs,
) -> io::Result<()> {
    if table.categories().is_empty() {
        return Ok(());
    }
    for (i, name) in table.categories().iter().enumerate() {
        let entry = format!("{} {name}  ", glyphs.tick);
        match colors.get(i).copied().flatten() {
            Some(c) => out.write_all(colorize(&c, &entry).as_bytes())?,
            None => out.write_all(entry.as_bytes())?,
        }
    }
    out.write_all(b"\n\n\n")
}

/// Title then legend.
pub fn write_header<W: Write>(
    out: &mut W,
    title: Option<&str>,
    table: &Table,
    colors: &[Option<AnsiCode>],
    glyphs: &Glyphs,
) -> io::Result<()> {
    write_title(out, title)?;
    write_legend(out, table, colors, glyphs)
}
