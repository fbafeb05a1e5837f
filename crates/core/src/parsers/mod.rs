pub mod legacy;
pub mod naming;
pub mod structured;

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use themegen_model::ParsedTheme;
use thiserror::Error;

use crate::tokens::ResolveError;
use legacy::{LegacyShapeError, LegacyThemeFile};
use structured::{StructuredShapeError, StructuredThemeFile};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read theme directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read theme file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{file}: not a theme file\n  as token set: {structured}\n  as legacy theme: {legacy}")]
    ThemeFile {
        file: String,
        structured: StructuredShapeError,
        legacy: LegacyShapeError,
    },
    #[error("{file}: {source}")]
    Resolve { file: String, source: ResolveError },
}

/// Which input shape a file looks like before it is fully parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFileKind {
    /// Token set: `color` category plus optional `$themes`.
    Structured,
    /// Flat `{name, enumName, colors}`.
    Legacy,
}

impl ThemeFileKind {
    /// An object with `colors` but no `color` category is a legacy file;
    /// everything else is tried as a token set first.
    pub fn detect(data: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
            return Self::Structured;
        };
        match value.as_object() {
            Some(obj) if obj.contains_key("colors") && !obj.contains_key("color") => Self::Legacy,
            _ => Self::Structured,
        }
    }
}

/// A theme file interpreted as exactly one of the two input shapes.
#[derive(Debug)]
pub enum ThemeFile {
    Structured(StructuredThemeFile),
    Legacy(LegacyThemeFile),
}

impl ThemeFile {
    /// Interpret `data` with the detected shape, falling back to the other
    /// one. Both failures are returned when neither shape fits.
    pub fn parse(data: &[u8]) -> Result<Self, (StructuredShapeError, LegacyShapeError)> {
        let as_structured = || structured::parse_structured(data).map(Self::Structured);
        let as_legacy = || legacy::parse_legacy(data).map(Self::Legacy);
        match ThemeFileKind::detect(data) {
            ThemeFileKind::Structured => {
                as_structured().or_else(|s| as_legacy().map_err(|l| (s, l)))
            }
            // A token set only stands in for a broken legacy file when it
            // declares something; otherwise the theme would vanish silently.
            ThemeFileKind::Legacy => as_legacy().or_else(|l| match structured::parse_structured(data) {
                Ok(file) if file.declares_tokens() => Ok(Self::Structured(file)),
                Ok(_) => Err((StructuredShapeError::NotATokenSet, l)),
                Err(s) => Err((s, l)),
            }),
        }
    }

    pub fn kind(&self) -> ThemeFileKind {
        match self {
            Self::Structured(_) => ThemeFileKind::Structured,
            Self::Legacy(_) => ThemeFileKind::Legacy,
        }
    }

    /// Build the themes this file declares. `stem` names the synthesized
    /// theme of a token set without `$themes`.
    pub fn into_themes(self, stem: &str) -> Result<Vec<ParsedTheme>, ResolveError> {
        match self {
            Self::Structured(file) => file.into_themes(stem),
            Self::Legacy(file) => Ok(vec![file.into_theme()]),
        }
    }
}

/// Parse one theme file's bytes into zero or more themes.
pub fn parse_theme_file(file_name: &str, data: &[u8]) -> Result<Vec<ParsedTheme>, ParseError> {
    let file = ThemeFile::parse(data).map_err(|(structured, legacy)| ParseError::ThemeFile {
        file: file_name.to_string(),
        structured,
        legacy,
    })?;
    debug!("{file_name}: parsed as {:?}", file.kind());

    let themes = file
        .into_themes(naming::file_stem(file_name))
        .map_err(|source| ParseError::Resolve {
            file: file_name.to_string(),
            source,
        })?;
    if themes.is_empty() {
        debug!("{file_name}: no color category, skipped");
    }
    Ok(themes
        .into_iter()
        .map(|t| t.with_source(file_name))
        .collect())
}

fn is_theme_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Parse every `*.json` file directly inside `dir`, in file-name order.
pub fn parse_theme_dir(dir: &Path) -> Result<Vec<ParsedTheme>, ParseError> {
    let read_dir_err = |source| ParseError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if is_theme_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut themes = Vec::new();
    for path in paths {
        let data = fs::read(&path).map_err(|source| ParseError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("reading {} ({} bytes)", path.display(), data.len());
        themes.extend(parse_theme_file(&file_name, &data)?);
    }
    Ok(themes)
}
