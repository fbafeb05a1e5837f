use std::io::{self, Write};

use anyhow::Result;
use themegen_model::{ParsedTheme, ThemeSet};

/// One line per theme: identifier, display name, source file.
pub fn write_summary(out: &mut impl Write, themes: &ThemeSet) -> io::Result<()> {
    let width = themes
        .iter()
        .map(|t| t.identifier.len())
        .max()
        .unwrap_or(0);
    for theme in themes {
        write!(out, "{:<width$}  {}", theme.identifier, theme.display_name)?;
        match &theme.source {
            Some(source) => writeln!(out, "  ({source})")?,
            None => writeln!(out)?,
        }
    }
    writeln!(
        out,
        "{} theme(s), {} color role(s)",
        themes.len(),
        themes.role_names().len()
    )
}

pub fn write_theme(out: &mut impl Write, theme: &ParsedTheme) -> io::Result<()> {
    writeln!(out, "{} ({})", theme.display_name, theme.identifier)?;
    let width = theme.colors.keys().map(String::len).max().unwrap_or(0);
    for (role, value) in &theme.colors {
        writeln!(out, "  {role:<width$}  {value}")?;
    }
    Ok(())
}

pub fn write_theme_json(out: &mut impl Write, theme: &ParsedTheme) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, theme)?;
    writeln!(out)?;
    Ok(())
}
