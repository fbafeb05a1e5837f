use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Color role name → resolved hex color (`#RRGGBB` or `#AARRGGBB`).
pub type ColorMap = BTreeMap<String, String>;

/// One fully resolved theme, as produced by a theme file.
///
/// Several themes may come from the same file: a structured file that
/// declares named themes backs all of them with one shared palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTheme {
    /// Human-readable name (may contain spaces and punctuation).
    pub display_name: String,
    /// Code identifier, `SCREAMING_SNAKE_CASE` by convention.
    pub identifier: String,
    /// Resolved colors keyed by role name.
    pub colors: ColorMap,
    /// File the theme was read from, for diagnostics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ParsedTheme {
    pub fn new(
        display_name: impl Into<String>,
        identifier: impl Into<String>,
        colors: ColorMap,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            identifier: identifier.into(),
            colors,
            source: None,
        }
    }

    /// Attach the originating file name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Role names in sorted order.
    pub fn role_names(&self) -> BTreeSet<&str> {
        self.colors.keys().map(String::as_str).collect()
    }

    pub fn color(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_are_sorted() {
        let colors = ColorMap::from([
            ("surface".to_string(), "#FFFFFF".to_string()),
            ("on-primary".to_string(), "#000000".to_string()),
            ("primary".to_string(), "#4682B4".to_string()),
        ]);
        let theme = ParsedTheme::new("Ocean Fire", "OCEAN_FIRE", colors);
        let roles: Vec<_> = theme.role_names().into_iter().collect();
        assert_eq!(roles, ["on-primary", "primary", "surface"]);
        assert_eq!(theme.color("primary"), Some("#4682B4"));
        assert_eq!(theme.color("missing"), None);
    }

    #[test]
    fn source_is_omitted_from_json_when_absent() {
        let theme = ParsedTheme::new("Royal", "ROYAL", ColorMap::new());
        let json = serde_json::to_string(&theme).unwrap();
        assert!(!json.contains("source"));

        let json = serde_json::to_string(&theme.with_source("royal.json")).unwrap();
        assert!(json.contains(r#""source":"royal.json""#));
    }
}
