//! Rust source emission for a validated theme set.
//!
//! Two files are produced: `theme_colors.rs` (the `ThemeColors` trait and one
//! unit struct per theme) and `theme_registry.rs` (the `ThemeId` enum and the
//! `ThemeRegistry` lookup). Output depends only on the themes and the
//! namespace, so unchanged input gives byte-identical files.

mod colors;
mod registry;

use std::fmt;

use themegen_model::{ParsedTheme, ThemeSet};
use thiserror::Error;

use crate::color::hex_to_argb;
use crate::validate::is_identifier;

pub const COLORS_FILE: &str = "theme_colors.rs";
pub const REGISTRY_FILE: &str = "theme_registry.rs";
pub(crate) const COLORS_MODULE: &str = "theme_colors";
pub(crate) const HEADER: &str = "// @generated by themegen. Do not edit by hand.";

/// Type names the generated files declare or rely on.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Color",
    "ThemeColors",
    "ThemeId",
    "ThemeInfo",
    "ThemePalette",
    "ThemeRegistry",
    "Sync",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Associated items of the generated `ThemeId`; a variant of the same name
/// would shadow them.
const RESERVED_VARIANT_NAMES: &[&str] = &["ALL"];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("invalid namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },
    #[error("color role {role:?} cannot be used as a property name: {reason}")]
    InvalidRoleName { role: String, reason: String },
    #[error("color roles {first:?} and {second:?} both become property `{property}`")]
    RoleNameCollision {
        first: String,
        second: String,
        property: String,
    },
    #[error("theme identifier {identifier:?} cannot be used as a type name ({name:?})")]
    InvalidTypeName { identifier: String, name: String },
    #[error("theme identifier {identifier:?} maps to type `{name}`, which is already taken")]
    TypeNameCollision { identifier: String, name: String },
    #[error("theme identifier {identifier:?} cannot be used as an enum variant")]
    InvalidVariantName { identifier: String },
    #[error("theme `{theme}`: role `{role}` has no color")]
    MissingRole { theme: String, role: String },
    #[error("theme `{theme}`: role `{role}` value {value:?} is not a concrete color")]
    UnresolvedColor {
        theme: String,
        role: String,
        value: String,
    },
    #[error("formatting generated source: {0}")]
    Format(#[from] fmt::Error),
}

/// Target Rust module path of the generated files, e.g. `app::theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Accepts `a::b` or the dotted `a.b`; a leading `crate::` is implied.
    pub fn parse(raw: &str) -> Result<Self, EmitError> {
        let invalid = |reason: &str| EmitError::InvalidNamespace {
            namespace: raw.to_string(),
            reason: reason.to_string(),
        };
        let trimmed = raw.trim();
        let path = trimmed.strip_prefix("crate::").unwrap_or(trimmed);
        if path.is_empty() {
            return Err(invalid("empty module path"));
        }
        let segments: Vec<String> = if path.contains("::") {
            path.split("::").map(str::to_string).collect()
        } else {
            path.split('.').map(str::to_string).collect()
        };
        for segment in &segments {
            if !is_identifier(segment) {
                return Err(invalid(&format!("`{segment}` is not an identifier")));
            }
            if KEYWORDS.contains(&segment.as_str()) || NON_RAW_KEYWORDS.contains(&segment.as_str())
            {
                return Err(invalid(&format!("`{segment}` is a keyword")));
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

/// One emitted source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: &'static str,
    pub contents: String,
}

/// Emit both source files for a validated theme set.
pub fn emit_sources(
    themes: &ThemeSet,
    namespace: &Namespace,
) -> Result<Vec<GeneratedFile>, EmitError> {
    let plan = Plan::build(themes, namespace)?;
    Ok(vec![
        GeneratedFile {
            file_name: COLORS_FILE,
            contents: colors::render(&plan)?,
        },
        GeneratedFile {
            file_name: REGISTRY_FILE,
            contents: registry::render(&plan)?,
        },
    ])
}

/// `on-primary` → `onprimary`; keywords become raw identifiers.
pub fn role_property_name(role: &str) -> Result<String, EmitError> {
    let invalid = |reason: &str| EmitError::InvalidRoleName {
        role: role.to_string(),
        reason: reason.to_string(),
    };
    let mut chars = role.chars().filter(char::is_ascii_alphanumeric);
    let Some(first) = chars.next() else {
        return Err(invalid("no alphanumeric characters"));
    };
    if first.is_ascii_digit() {
        return Err(invalid("starts with a digit"));
    }
    let property: String = std::iter::once(first.to_ascii_lowercase())
        .chain(chars)
        .collect();
    raw_if_keyword(&property).ok_or_else(|| invalid("reserved keyword"))
}

/// `OCEAN_FIRE` → `OceanFire`.
pub fn theme_type_name(identifier: &str) -> Result<String, EmitError> {
    let name: String = identifier
        .to_lowercase()
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect();
    if !is_identifier(&name) || name == "Self" {
        return Err(EmitError::InvalidTypeName {
            identifier: identifier.to_string(),
            name,
        });
    }
    Ok(name)
}

/// `Some(ident)`, `Some(r#ident)` for keywords, `None` when unusable.
fn raw_if_keyword(ident: &str) -> Option<String> {
    if NON_RAW_KEYWORDS.contains(&ident) {
        None
    } else if KEYWORDS.contains(&ident) {
        Some(format!("r#{ident}"))
    } else {
        Some(ident.to_string())
    }
}

struct Role {
    name: String,
    property: String,
}

struct ThemeEntry<'a> {
    theme: &'a ParsedTheme,
    type_name: String,
    variant: String,
    /// Packed `0xAARRGGBB`, one per role in role order.
    colors: Vec<u32>,
}

/// Names and packed colors shared by both renderers.
struct Plan<'a> {
    namespace: &'a Namespace,
    roles: Vec<Role>,
    themes: Vec<ThemeEntry<'a>>,
}

impl<'a> Plan<'a> {
    fn build(set: &'a ThemeSet, namespace: &'a Namespace) -> Result<Self, EmitError> {
        let mut roles: Vec<Role> = Vec::new();
        for name in set.role_names() {
            let property = role_property_name(name)?;
            if let Some(prev) = roles.iter().find(|r| r.property == property) {
                return Err(EmitError::RoleNameCollision {
                    first: prev.name.clone(),
                    second: name.to_string(),
                    property,
                });
            }
            roles.push(Role {
                name: name.to_string(),
                property,
            });
        }

        let mut themes: Vec<ThemeEntry<'a>> = Vec::with_capacity(set.len());
        for theme in set {
            let type_name = theme_type_name(&theme.identifier)?;
            let taken = RESERVED_TYPE_NAMES.contains(&type_name.as_str())
                || themes.iter().any(|t| t.type_name == type_name);
            if taken {
                return Err(EmitError::TypeNameCollision {
                    identifier: theme.identifier.clone(),
                    name: type_name,
                });
            }
            let variant = raw_if_keyword(&theme.identifier)
                .filter(|v| !RESERVED_VARIANT_NAMES.contains(&v.as_str()))
                .ok_or_else(|| EmitError::InvalidVariantName {
                    identifier: theme.identifier.clone(),
                })?;
            let colors = roles
                .iter()
                .map(|role| pack(theme, &role.name))
                .collect::<Result<_, _>>()?;
            themes.push(ThemeEntry {
                theme,
                type_name,
                variant,
                colors,
            });
        }

        Ok(Self {
            namespace,
            roles,
            themes,
        })
    }
}

fn pack(theme: &ParsedTheme, role: &str) -> Result<u32, EmitError> {
    let value = theme.color(role).ok_or_else(|| EmitError::MissingRole {
        theme: theme.display_name.clone(),
        role: role.to_string(),
    })?;
    hex_to_argb(value).map_err(|_| EmitError::UnresolvedColor {
        theme: theme.display_name.clone(),
        role: role.to_string(),
        value: value.to_string(),
    })
}

/// Single-line doc text: newlines would end the comment early.
fn doc_text(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
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
    fn role_names_are_sanitized() {
        assert_eq!(role_property_name("on-primary").unwrap(), "onprimary");
        assert_eq!(role_property_name("primary_container").unwrap(), "primarycontainer");
        assert_eq!(role_property_name("OnPrimaryContainer").unwrap(), "onPrimaryContainer");
        assert_eq!(role_property_name("brand.primary").unwrap(), "brandprimary");
        assert_eq!(role_property_name("type").unwrap(), "r#type");
        assert!(role_property_name("--").is_err());
        assert!(role_property_name("1st").is_err());
        assert!(role_property_name("self").is_err());
    }

    #[test]
    fn type_names_are_title_cased() {
        assert_eq!(theme_type_name("OCEAN_FIRE").unwrap(), "OceanFire");
        assert_eq!(theme_type_name("LEGACY").unwrap(), "Legacy");
        assert_eq!(theme_type_name("_DARK__MODE_").unwrap(), "DarkMode");
        assert!(theme_type_name("_2024").is_err());
        assert!(theme_type_name("SELF").is_err());
    }

    #[test]
    fn namespaces() {
        assert_eq!(Namespace::parse("app.theme.generated").unwrap().to_string(), "app::theme::generated");
        assert_eq!(Namespace::parse("crate::generated").unwrap().to_string(), "generated");
        assert!(Namespace::parse("").is_err());
        assert!(Namespace::parse("app..theme").is_err());
        assert!(Namespace::parse("app::mod").is_err());
        assert!(Namespace::parse("com.example-app").is_err());
    }

    #[test]
    fn emits_two_files() {
        let set = ThemeSet::new(vec![theme("Ocean Fire", "OCEAN_FIRE", &[("primary", "#4682B4")])]);
        let files = emit_sources(&set, &Namespace::parse("generated").unwrap()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name).collect();
        assert_eq!(names, [COLORS_FILE, REGISTRY_FILE]);
        assert!(files.iter().all(|f| f.contents.starts_with(HEADER)));
    }

    #[test]
    fn colliding_roles_are_rejected() {
        let set = ThemeSet::new(vec![theme(
            "A",
            "A",
            &[("on-primary", "#000000"), ("onprimary", "#000000")],
        )]);
        let err = emit_sources(&set, &Namespace::parse("generated").unwrap()).unwrap_err();
        assert_eq!(
            err,
            EmitError::RoleNameCollision {
                first: "on-primary".into(),
                second: "onprimary".into(),
                property: "onprimary".into(),
            }
        );
    }

    #[test]
    fn colliding_type_names_are_rejected() {
        let ns = Namespace::parse("generated").unwrap();
        let set = ThemeSet::new(vec![theme("A", "DARK_MODE", &[]), theme("B", "DARK__MODE", &[])]);
        assert!(matches!(
            emit_sources(&set, &ns),
            Err(EmitError::TypeNameCollision { name, .. }) if name == "DarkMode"
        ));

        let set = ThemeSet::new(vec![theme("Color", "COLOR", &[])]);
        assert!(matches!(
            emit_sources(&set, &ns),
            Err(EmitError::TypeNameCollision { .. })
        ));
    }

    #[test]
    fn variants_cannot_shadow_theme_id_items() {
        let ns = Namespace::parse("generated").unwrap();
        let set = ThemeSet::new(vec![theme("All", "ALL", &[]), theme("Dark", "DARK", &[])]);
        assert_eq!(
            emit_sources(&set, &ns),
            Err(EmitError::InvalidVariantName {
                identifier: "ALL".into()
            })
        );

        let set = ThemeSet::new(vec![theme("Crate", "crate", &[])]);
        assert!(matches!(
            emit_sources(&set, &ns),
            Err(EmitError::InvalidVariantName { .. })
        ));
    }

    #[test]
    fn unresolved_values_cannot_be_emitted() {
        let set = ThemeSet::new(vec![theme("A", "A", &[("gap", "{spacing.small}")])]);
        assert!(matches!(
            emit_sources(&set, &Namespace::parse("generated").unwrap()),
            Err(EmitError::UnresolvedColor { role, .. }) if role == "gap"
        ));
    }

    #[test]
    fn output_is_deterministic() {
        let set = ThemeSet::new(vec![
            theme("Light", "LIGHT", &[("surface", "#FFFFFF"), ("primary", "#4682B4")]),
            theme("Dark", "DARK", &[("primary", "#1A1A2E"), ("surface", "#000")]),
        ]);
        let ns = Namespace::parse("generated").unwrap();
        assert_eq!(emit_sources(&set, &ns).unwrap(), emit_sources(&set, &ns).unwrap());
    }
}
