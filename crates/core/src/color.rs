//! Hex color parsing and the modifier arithmetic used by token resolution.
//!
//! Lighten, darken and mix truncate toward zero; alpha rounds. Generated
//! palettes depend on these exact byte values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
}

/// An sRGB byte triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    fn zip(self, other: Rgb, f: impl Fn(u8, u8) -> u8) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }
    let expanded = match digits.len() {
        3 => expand_short(digits),
        6 => digits.to_string(),
        _ => return Err(ColorError::InvalidColorFormat(hex.to_string())),
    };
    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// `#` followed by exactly 3, 6 or 8 hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// Uppercase with a single leading `#`; 3 digits are expanded to 6.
pub fn normalize_hex(s: &str) -> String {
    let digits = s.trim_start_matches('#').to_ascii_uppercase();
    if digits.len() == 3 {
        format!("#{}", expand_short(&digits))
    } else {
        format!("#{digits}")
    }
}

fn expand_short(digits: &str) -> String {
    digits.chars().flat_map(|c| [c, c]).collect()
}

/// Truncate toward zero and clamp into a byte.
fn to_channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}

pub fn lighten(rgb: Rgb, amount: f64) -> Rgb {
    rgb.map(|c| {
        let c = f64::from(c);
        to_channel(c + (255.0 - c) * amount)
    })
}

pub fn darken(rgb: Rgb, amount: f64) -> Rgb {
    rgb.map(|c| to_channel(f64::from(c) * (1.0 - amount)))
}

/// `#AARRGGBB` with `AA = round(alpha * 255)`.
pub fn apply_alpha(rgb: Rgb, alpha: f64) -> String {
    let a = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{a:02X}{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Linear blend towards `other`; `ratio` is clamped into `[0, 1]`.
pub fn mix(rgb: Rgb, other: &str, ratio: f64) -> Result<Rgb, ColorError> {
    let other = parse_hex(other)?;
    let t = ratio.clamp(0.0, 1.0);
    Ok(rgb.zip(other, |a, b| {
        let a = f64::from(a);
        to_channel(a + (f64::from(b) - a) * t)
    }))
}

/// `{…}` with a dotted path inside, e.g. `{color.primary}`.
pub fn is_token_reference(s: &str) -> bool {
    s.strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .is_some_and(|inner| inner.contains('.'))
}

/// Pack a validated hex color as `0xAARRGGBB`; alpha defaults to opaque.
pub fn hex_to_argb(s: &str) -> Result<u32, ColorError> {
    if !is_valid_hex(s) {
        return Err(ColorError::InvalidColorFormat(s.to_string()));
    }
    let digits = normalize_hex(s);
    let digits = &digits[1..];
    let argb = if digits.len() == 6 {
        format!("FF{digits}")
    } else {
        digits.to_string()
    };
    u32::from_str_radix(&argb, 16).map_err(|_| ColorError::InvalidColorFormat(s.to_string()))
}
