use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::theme::ParsedTheme;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme identifier: {identifier} (known: {})", .known.join(", "))]
pub struct UnknownThemeIdentifier {
    pub identifier: String,
    pub known: Vec<String>,
}

/// The ordered themes of one generation run.
///
/// Built from a validated theme list; lookups by identifier never return an
/// empty result, they fail with [`UnknownThemeIdentifier`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ThemeSet {
    themes: Vec<ParsedTheme>,
}

impl ThemeSet {
    pub fn new(themes: Vec<ParsedTheme>) -> Self {
        Self { themes }
    }

    pub fn themes(&self) -> &[ParsedTheme] {
        &self.themes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedTheme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme identifiers in run order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.identifier.as_str()).collect()
    }

    /// Union of role names over every theme, sorted.
    pub fn role_names(&self) -> BTreeSet<&str> {
        self.themes
            .iter()
            .flat_map(|t| t.colors.keys().map(String::as_str))
            .collect()
    }

    pub fn get(&self, identifier: &str) -> Result<&ParsedTheme, UnknownThemeIdentifier> {
        self.themes
            .iter()
            .find(|t| t.identifier == identifier)
            .ok_or_else(|| UnknownThemeIdentifier {
                identifier: identifier.to_string(),
                known: self.identifiers().into_iter().map(str::to_string).collect(),
            })
    }
}

impl<'a> IntoIterator for &'a ThemeSet {
    type Item = &'a ParsedTheme;
    type IntoIter = std::slice::Iter<'a, ParsedTheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
