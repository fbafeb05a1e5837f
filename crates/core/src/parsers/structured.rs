use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use themegen_model::ParsedTheme;
use thiserror::Error;

use super::naming::{display_name_from_stem, identifier_from_name};
use crate::tokens::{
    resolve_tokens, MissingMixColor, Modifier, ModifierKind, RawToken, ResolveError, TokenKind,
    TokenValue,
};

#[derive(Debug, Error)]
pub enum StructuredShapeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("color token `{path}`: {source}")]
    Token {
        path: String,
        source: serde_json::Error,
    },
    #[error("color entry `{path}` is neither a token nor a group")]
    NotAToken { path: String },
    #[error("color token `{path}` has no string value")]
    NonStringValue { path: String },
    #[error("color token `{path}` has a non-numeric modifier amount {amount:?}")]
    InvalidAmount { path: String, amount: String },
    #[error("color token `{path}`: {source}")]
    Modifier {
        path: String,
        source: MissingMixColor,
    },
    #[error("theme #{index} in $themes has neither a name nor an id")]
    UnnamedTheme { index: usize },
    #[error("no `color` category or `$themes`")]
    NotATokenSet,
}

/// Token Studio / W3C token set. Categories other than `color` are ignored.
#[derive(Debug, Deserialize)]
struct TokenSetFile {
    #[serde(default)]
    color: Option<Map<String, Value>>,
    #[serde(rename = "$themes", default)]
    themes: Option<ThemeDecls>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ThemeDecls {
    Map(BTreeMap<String, ThemeDecl>),
    List(Vec<ThemeDecl>),
}

#[derive(Debug, Deserialize)]
struct ThemeDecl {
    #[serde(default, alias = "displayName")]
    name: Option<String>,
    #[serde(default, rename = "enumName", alias = "identifier")]
    enum_name: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

/// Both key conventions; the W3C `$`-prefixed keys win when present.
#[derive(Debug, Deserialize)]
struct TokenFields {
    #[serde(rename = "$value", default)]
    w3c_value: Option<Value>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(rename = "$type", default)]
    w3c_type: Option<String>,
    #[serde(rename = "type", default)]
    legacy_type: Option<String>,
    #[serde(rename = "$extensions", default)]
    w3c_extensions: Option<Extensions>,
    #[serde(default)]
    extensions: Option<Extensions>,
}

#[derive(Debug, Default, Deserialize)]
struct Extensions {
    #[serde(default)]
    modify: Option<ModifySpec>,
    #[serde(rename = "studio.tokens", default)]
    studio: Option<StudioExtensions>,
}

#[derive(Debug, Default, Deserialize)]
struct StudioExtensions {
    #[serde(default)]
    modify: Option<ModifySpec>,
}

#[derive(Debug, Deserialize)]
struct ModifySpec {
    #[serde(rename = "type")]
    kind: String,
    #[serde(alias = "amount")]
    value: Amount,
    #[serde(default, alias = "mixColor")]
    color: Option<String>,
    #[serde(default, alias = "colorSpace")]
    space: Option<String>,
}

/// Token Studio writes amounts as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

/// One theme a token set declares in `$themes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDeclaration {
    pub display_name: String,
    pub identifier: String,
}

/// A token set reduced to what the generator uses: the flattened color
/// tokens (absent when the file has no `color` category) and the declared
/// theme names.
#[derive(Debug)]
pub struct StructuredThemeFile {
    pub tokens: Option<BTreeMap<String, RawToken>>,
    pub themes: Vec<ThemeDeclaration>,
}

pub fn parse_structured(data: &[u8]) -> Result<StructuredThemeFile, StructuredShapeError> {
    let file: TokenSetFile = serde_json::from_slice(data)?;

    let tokens = match &file.color {
        Some(color) => {
            let mut tokens = BTreeMap::new();
            flatten_group(color, "", None, &mut tokens)?;
            Some(tokens)
        }
        None => None,
    };

    let themes = match file.themes {
        None => Vec::new(),
        Some(ThemeDecls::Map(map)) => map
            .into_iter()
            .map(|(key, decl)| {
                let name = decl.name.unwrap_or_else(|| display_name_from_stem(&key));
                declaration(name, decl.enum_name)
            })
            .collect(),
        Some(ThemeDecls::List(list)) => list
            .into_iter()
            .enumerate()
            .map(|(index, decl)| {
                let name = decl
                    .name
                    .or_else(|| decl.id.as_deref().map(display_name_from_stem))
                    .ok_or(StructuredShapeError::UnnamedTheme { index })?;
                Ok(declaration(name, decl.enum_name))
            })
            .collect::<Result<_, StructuredShapeError>>()?,
    };

    Ok(StructuredThemeFile { tokens, themes })
}

fn declaration(display_name: String, identifier: Option<String>) -> ThemeDeclaration {
    let identifier = identifier.unwrap_or_else(|| identifier_from_name(&display_name));
    ThemeDeclaration {
        display_name,
        identifier,
    }
}

fn is_token(entry: &Map<String, Value>) -> bool {
    entry.contains_key("$value")
        || entry
            .get("value")
            .is_some_and(|v| !v.is_object() || entry.contains_key("type"))
}

/// Walk a color group, collecting tokens under dotted names. A group's
/// `$type` is inherited by tokens that declare none.
fn flatten_group(
    group: &Map<String, Value>,
    prefix: &str,
    inherited_type: Option<&str>,
    out: &mut BTreeMap<String, RawToken>,
) -> Result<(), StructuredShapeError> {
    let group_type = group
        .get("$type")
        .and_then(Value::as_str)
        .or(inherited_type);

    for (key, entry) in group {
        if key.starts_with('$') {
            continue;
        }
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        let Some(fields) = entry.as_object() else {
            return Err(StructuredShapeError::NotAToken { path });
        };
        if !is_token(fields) {
            flatten_group(fields, &path, group_type, out)?;
            continue;
        }

        let fields = TokenFields::deserialize(entry).map_err(|source| {
            StructuredShapeError::Token {
                path: path.clone(),
                source,
            }
        })?;
        match raw_token(&path, fields, group_type)? {
            Some(token) => {
                out.insert(path, token);
            }
            None => debug!("skipping non-color token `{path}`"),
        }
    }
    Ok(())
}

/// `None` for tokens of a kind other than color.
fn raw_token(
    path: &str,
    fields: TokenFields,
    inherited_type: Option<&str>,
) -> Result<Option<RawToken>, StructuredShapeError> {
    let kind = TokenKind::from_name(
        fields
            .w3c_type
            .as_deref()
            .or(fields.legacy_type.as_deref())
            .or(inherited_type),
    );
    if !kind.is_color() {
        return Ok(None);
    }

    let value = match fields.w3c_value.or(fields.value) {
        Some(Value::String(value)) => value,
        _ => {
            return Err(StructuredShapeError::NonStringValue {
                path: path.to_string(),
            });
        }
    };

    let spec = fields
        .w3c_extensions
        .or(fields.extensions)
        .and_then(|ext| ext.modify.or_else(|| ext.studio.and_then(|s| s.modify)));
    let modifier = match spec {
        Some(spec) => modifier(path, spec)?,
        None => None,
    };

    Ok(Some(RawToken {
        value: TokenValue::classify(value),
        kind,
        modifier,
    }))
}

fn modifier(path: &str, spec: ModifySpec) -> Result<Option<Modifier>, StructuredShapeError> {
    let amount = match spec.value {
        Amount::Number(n) => n,
        Amount::Text(text) => {
            text.trim()
                .parse()
                .map_err(|_| StructuredShapeError::InvalidAmount {
                    path: path.to_string(),
                    amount: text.clone(),
                })?
        }
    };
    let kind = ModifierKind::from_name(&spec.kind, spec.color.as_deref()).map_err(|source| {
        StructuredShapeError::Modifier {
            path: path.to_string(),
            source,
        }
    })?;
    let Some(kind) = kind else {
        warn!("color token `{path}`: unknown modifier {:?}, ignored", spec.kind);
        return Ok(None);
    };
    Ok(Some(Modifier {
        kind,
        amount,
        color_space: spec.space,
    }))
}

impl StructuredThemeFile {
    /// Whether the file has a `color` category or declares `$themes`.
    pub fn declares_tokens(&self) -> bool {
        self.tokens.is_some() || !self.themes.is_empty()
    }

    /// Resolve the palette once and share it across every declared theme;
    /// a token set without `$themes` becomes one theme named after `stem`.
    pub fn into_themes(self, stem: &str) -> Result<Vec<ParsedTheme>, ResolveError> {
        let Some(tokens) = self.tokens else {
            return Ok(Vec::new());
        };
        let colors = resolve_tokens(&tokens)?;

        let declarations = if self.themes.is_empty() {
            vec![ThemeDeclaration {
                display_name: display_name_from_stem(stem),
                identifier: identifier_from_name(stem),
            }]
        } else {
            self.themes
        };

        Ok(declarations
            .into_iter()
            .map(|d| ParsedTheme::new(d.display_name, d.identifier, colors.clone()))
            .collect())
    }
}
