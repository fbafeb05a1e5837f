use std::collections::BTreeMap;

use serde::Deserialize;
use themegen_model::ParsedTheme;
use thiserror::Error;

use super::naming::identifier_from_name;

#[derive(Debug, Error)]
pub enum LegacyShapeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme name is empty")]
    EmptyName,
}

/// Flat theme file: one theme with literal colors, no references.
#[derive(Debug, Deserialize)]
pub struct LegacyThemeFile {
    pub name: String,
    #[serde(default, rename = "enumName", alias = "identifier")]
    pub enum_name: Option<String>,
    pub colors: BTreeMap<String, String>,
}

pub fn parse_legacy(data: &[u8]) -> Result<LegacyThemeFile, LegacyShapeError> {
    let file: LegacyThemeFile = serde_json::from_slice(data)?;
    if file.name.trim().is_empty() {
        return Err(LegacyShapeError::EmptyName);
    }
    Ok(file)
}

impl LegacyThemeFile {
    /// Colors are taken verbatim; validation happens later.
    pub fn into_theme(self) -> ParsedTheme {
        let identifier = self
            .enum_name
            .unwrap_or_else(|| identifier_from_name(&self.name));
        ParsedTheme::new(self.name, identifier, self.colors)
    }
}
