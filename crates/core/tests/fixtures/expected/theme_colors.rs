// @generated by themegen. Do not edit by hand.
// Namespace: generated

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// Color roles every generated theme provides.
#[allow(non_snake_case)]
pub trait ThemeColors: Sync {
    /// on-primary
    fn onprimary(&self) -> Color;
    /// primary
    fn primary(&self) -> Color;
    /// surface
    fn surface(&self) -> Color;
}

/// Legacy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Legacy;

impl ThemeColors for Legacy {
    fn onprimary(&self) -> Color {
        Color(0xFFFFFFFF)
    }

    fn primary(&self) -> Color {
        Color(0xFFFF0000)
    }

    fn surface(&self) -> Color {
        Color(0x80FF5722)
    }
}

/// Midnight Rose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MidnightRose;

impl ThemeColors for MidnightRose {
    fn onprimary(&self) -> Color {
        Color(0x801A1A2E)
    }

    fn primary(&self) -> Color {
        Color(0xFF1A1A2E)
    }

    fn surface(&self) -> Color {
        Color(0xFF0D0D17)
    }
}

/// Ocean Fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OceanFire;

impl ThemeColors for OceanFire {
    fn onprimary(&self) -> Color {
        Color(0xFFFFFFFF)
    }

    fn primary(&self) -> Color {
        Color(0xFF4682B4)
    }

    fn surface(&self) -> Color {
        Color(0xFF6B9BC3)
    }
}
