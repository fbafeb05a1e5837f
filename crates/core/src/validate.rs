//! Cross-theme invariants checked before any code is emitted.

use std::collections::{BTreeMap, BTreeSet};

use themegen_model::ParsedTheme;
use thiserror::Error;

use crate::color::{is_token_reference, is_valid_hex};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no themes found")]
    EmptyThemeSet,
    #[error("duplicate theme names: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),
    #[error("duplicate theme identifiers: {}", .0.join(", "))]
    DuplicateIdentifiers(Vec<String>),
    #[error("theme `{theme}`: identifier {identifier:?} is not a valid identifier")]
    InvalidIdentifier { theme: String, identifier: String },
    #[error(
        "theme `{theme}` has different color roles than `{reference}` (missing: [{}], extra: [{}])",
        .missing.join(", "),
        .extra.join(", ")
    )]
    InconsistentColorKeys {
        theme: String,
        reference: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    #[error("theme `{theme}`: role `{role}` has invalid color value {value:?}")]
    InvalidColorValue {
        theme: String,
        role: String,
        value: String,
    },
}

/// Check a run's themes. The first theme is the reference for role keys.
pub fn validate_themes(themes: &[ParsedTheme]) -> Result<(), ValidationError> {
    let Some(reference) = themes.first() else {
        return Err(ValidationError::EmptyThemeSet);
    };

    let names = duplicates(themes.iter().map(|t| t.display_name.as_str()));
    if !names.is_empty() {
        return Err(ValidationError::DuplicateNames(names));
    }
    let identifiers = duplicates(themes.iter().map(|t| t.identifier.as_str()));
    if !identifiers.is_empty() {
        return Err(ValidationError::DuplicateIdentifiers(identifiers));
    }

    if let Some(theme) = themes.iter().find(|t| !is_identifier(&t.identifier)) {
        return Err(ValidationError::InvalidIdentifier {
            theme: theme.display_name.clone(),
            identifier: theme.identifier.clone(),
        });
    }

    let expected = reference.role_names();
    for theme in &themes[1..] {
        let actual = theme.role_names();
        if actual != expected {
            let owned = |set: BTreeSet<&&str>| -> Vec<String> {
                set.into_iter().map(|s| s.to_string()).collect()
            };
            return Err(ValidationError::InconsistentColorKeys {
                theme: theme.display_name.clone(),
                reference: reference.display_name.clone(),
                missing: owned(expected.difference(&actual).collect()),
                extra: owned(actual.difference(&expected).collect()),
            });
        }
    }

    for theme in themes {
        for (role, value) in &theme.colors {
            if !is_valid_hex(value) && !is_token_reference(value) {
                return Err(ValidationError::InvalidColorValue {
                    theme: theme.display_name.clone(),
                    role: role.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Every value seen more than once, sorted.
fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts = BTreeMap::<&str, usize>::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(value, _)| value.to_string())
        .collect()
}

/// `[A-Za-z_][A-Za-z0-9_]*`, excluding a lone `_`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s != "_"
}

#[cfg(test)]
mod tests {
    use super::*;
    use themegen_model::ColorMap;

    fn theme(name: &str, id: &str, colors: &[(&str, &str)]) -> ParsedTheme {
        let colors: ColorMap = colors
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ParsedTheme::new(name, id, colors)
    }

    #[test]
    fn empty_set_fails() {
        assert_eq!(validate_themes(&[]), Err(ValidationError::EmptyThemeSet));
    }

    #[test]
    fn single_theme_passes() {
        let themes = [theme("Ocean Fire", "OCEAN_FIRE", &[("primary", "#4682B4")])];
        assert_eq!(validate_themes(&themes), Ok(()));
    }

    #[test]
    fn identical_keys_pass() {
        let themes = [
            theme("Light", "LIGHT", &[("primary", "#FFF"), ("surface", "#FFFFFF")]),
            theme("Dark", "DARK", &[("surface", "#000000"), ("primary", "#80000000")]),
        ];
        assert_eq!(validate_themes(&themes), Ok(()));
    }

    #[test]
    fn duplicate_names_are_all_reported() {
        let themes = [
            theme("Royal", "ROYAL_A", &[]),
            theme("Royal", "ROYAL_B", &[]),
            theme("Ocean", "OCEAN_A", &[]),
            theme("Ocean", "OCEAN_B", &[]),
            theme("Forest", "FOREST", &[]),
        ];
        assert_eq!(
            validate_themes(&themes),
            Err(ValidationError::DuplicateNames(vec![
                "Ocean".into(),
                "Royal".into()
            ]))
        );
    }

    #[test]
    fn duplicate_identifiers_fail() {
        let themes = [theme("Royal", "ROYAL", &[]), theme("Royal Two", "ROYAL", &[])];
        let err = validate_themes(&themes).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateIdentifiers(vec!["ROYAL".into()]));
        assert_eq!(err.to_string(), "duplicate theme identifiers: ROYAL");
    }

    #[test]
    fn one_key_difference_is_named() {
        let themes = [
            theme("Light", "LIGHT", &[("primary", "#FFFFFF"), ("surface", "#FFFFFF")]),
            theme("Dark", "DARK", &[("primary", "#000000"), ("surfaces", "#000000")]),
        ];
        assert_eq!(
            validate_themes(&themes),
            Err(ValidationError::InconsistentColorKeys {
                theme: "Dark".into(),
                reference: "Light".into(),
                missing: vec!["surface".into()],
                extra: vec!["surfaces".into()],
            })
        );
    }

    #[test]
    fn missing_key_only() {
        let themes = [
            theme("Light", "LIGHT", &[("primary", "#FFFFFF"), ("surface", "#FFFFFF")]),
            theme("Dark", "DARK", &[("primary", "#000000")]),
        ];
        let err = validate_themes(&themes).unwrap_err();
        assert_eq!(
            err.to_string(),
            "theme `Dark` has different color roles than `Light` (missing: [surface], extra: [])"
        );
    }

    #[test]
    fn invalid_color_value() {
        let themes = [theme("Light", "LIGHT", &[("primary", "steelblue")])];
        assert_eq!(
            validate_themes(&themes),
            Err(ValidationError::InvalidColorValue {
                theme: "Light".into(),
                role: "primary".into(),
                value: "steelblue".into(),
            })
        );
    }

    #[test]
    fn reference_values_pass_validation() {
        let themes = [theme("Light", "LIGHT", &[("gap", "{spacing.small}")])];
        assert_eq!(validate_themes(&themes), Ok(()));
    }

    #[test]
    fn identifiers_must_be_code_identifiers() {
        let themes = [theme("Ocean Fire", "OCEAN FIRE", &[])];
        assert!(matches!(
            validate_themes(&themes),
            Err(ValidationError::InvalidIdentifier { .. })
        ));
        assert!(is_identifier("OCEAN_FIRE"));
        assert!(is_identifier("_2024"));
        assert!(!is_identifier("_"));
        assert!(!is_identifier("2024"));
        assert!(!is_identifier(""));
    }
}
