//! Color token model for structured theme files.

pub mod resolver;

use thiserror::Error;

pub use resolver::{ResolveError, resolve_tokens};

/// Reference namespace honored by the resolver: `{color.<name>}`.
pub const COLOR_NAMESPACE: &str = "color";

/// A color token before resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub value: TokenValue,
    pub kind: TokenKind,
    /// `None` means the base color is used unchanged.
    pub modifier: Option<Modifier>,
}

impl RawToken {
    pub fn color(value: impl Into<String>) -> Self {
        Self {
            value: TokenValue::classify(value),
            kind: TokenKind::Color,
            modifier: None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

/// Declared token type. A missing type is treated as [`TokenKind::Color`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenKind {
    #[default]
    Color,
    /// Dimension, typography and the like; recognized and skipped.
    Other(String),
}

impl TokenKind {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None => Self::Color,
            Some(n) if n.eq_ignore_ascii_case("color") => Self::Color,
            Some(n) => Self::Other(n.to_string()),
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color)
    }
}

/// A raw token value, classified once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// `{color.<name>}`; holds `<name>`.
    Reference(String),
    /// Brace-wrapped text that is not a color reference (`{spacing.sm}`,
    /// `{color.}`, `{primary}`); kept verbatim.
    Passthrough(String),
    /// Anything else; must be a hex color.
    Literal(String),
}

impl TokenValue {
    pub fn classify(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let Some(inner) = raw.strip_prefix('{').and_then(|r| r.strip_suffix('}')) else {
            return Self::Literal(raw);
        };
        match inner.split_once('.') {
            Some((COLOR_NAMESPACE, name)) if !name.is_empty() => Self::Reference(name.to_string()),
            _ => Self::Passthrough(raw),
        }
    }

    /// The token name this value points at, if it is a color reference.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Reference(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub kind: ModifierKind,
    /// Meaning depends on the kind: lighten/darken fraction, alpha, mix ratio.
    pub amount: f64,
    /// Accepted and carried; resolution always works in sRGB bytes.
    pub color_space: Option<String>,
}

impl Modifier {
    pub fn new(kind: ModifierKind, amount: f64) -> Self {
        Self {
            kind,
            amount,
            color_space: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mix modifier requires a color")]
pub struct MissingMixColor;

#[derive(Debug, Clone, PartialEq)]
pub enum ModifierKind {
    Lighten,
    Darken,
    Alpha,
    Mix { color: TokenValue },
}

impl ModifierKind {
    /// `Ok(None)` for modifier names this generator does not know.
    pub fn from_name(name: &str, mix_color: Option<&str>) -> Result<Option<Self>, MissingMixColor> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "lighten" => Self::Lighten,
            "darken" => Self::Darken,
            "alpha" => Self::Alpha,
            "mix" => Self::Mix {
                color: TokenValue::classify(mix_color.ok_or(MissingMixColor)?),
            },
            _ => return Ok(None),
        };
        Ok(Some(kind))
    }
}
