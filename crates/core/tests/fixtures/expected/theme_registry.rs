// @generated by themegen. Do not edit by hand.
// Namespace: generated

use crate::generated::theme_colors::{self, Color, ThemeColors};

/// Identifier of every generated theme, in registry order.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeId {
    /// Legacy
    LEGACY,
    /// Midnight Rose
    MIDNIGHT_ROSE,
    /// Ocean Fire
    OCEAN_FIRE,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [
        ThemeId::LEGACY,
        ThemeId::MIDNIGHT_ROSE,
        ThemeId::OCEAN_FIRE,
    ];

    pub const fn identifier(self) -> &'static str {
        match self {
            ThemeId::LEGACY => "LEGACY",
            ThemeId::MIDNIGHT_ROSE => "MIDNIGHT_ROSE",
            ThemeId::OCEAN_FIRE => "OCEAN_FIRE",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            ThemeId::LEGACY => "Legacy",
            ThemeId::MIDNIGHT_ROSE => "Midnight Rose",
            ThemeId::OCEAN_FIRE => "Ocean Fire",
        }
    }
}

/// Colors of one theme keyed by their role names in the theme files.
#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    roles: &'static [(&'static str, Color)],
}

impl ThemePalette {
    pub fn get(&self, role: &str) -> Option<Color> {
        self.roles
            .iter()
            .find(|(name, _)| *name == role)
            .map(|&(_, color)| color)
    }

    pub fn roles(&self) -> &'static [(&'static str, Color)] {
        self.roles
    }
}

/// A generated theme.
pub struct ThemeInfo {
    pub id: ThemeId,
    pub display_name: &'static str,
    pub colors: &'static (dyn ThemeColors + Sync),
    pub palette: ThemePalette,
}

/// Indexed by `ThemeId as usize`.
pub static THEMES: [ThemeInfo; 3] = [
    ThemeInfo {
        id: ThemeId::LEGACY,
        display_name: "Legacy",
        colors: &theme_colors::Legacy,
        palette: ThemePalette {
            roles: &[
                ("on-primary", Color(0xFFFFFFFF)),
                ("primary", Color(0xFFFF0000)),
                ("surface", Color(0x80FF5722)),
            ],
        },
    },
    ThemeInfo {
        id: ThemeId::MIDNIGHT_ROSE,
        display_name: "Midnight Rose",
        colors: &theme_colors::MidnightRose,
        palette: ThemePalette {
            roles: &[
                ("on-primary", Color(0x801A1A2E)),
                ("primary", Color(0xFF1A1A2E)),
                ("surface", Color(0xFF0D0D17)),
            ],
        },
    },
    ThemeInfo {
        id: ThemeId::OCEAN_FIRE,
        display_name: "Ocean Fire",
        colors: &theme_colors::OceanFire,
        palette: ThemePalette {
            roles: &[
                ("on-primary", Color(0xFFFFFFFF)),
                ("primary", Color(0xFF4682B4)),
                ("surface", Color(0xFF6B9BC3)),
            ],
        },
    },
];

/// Lookup over every generated theme.
pub struct ThemeRegistry;

impl ThemeRegistry {
    /// Every theme, in registry order.
    pub fn themes() -> &'static [ThemeInfo] {
        &THEMES
    }

    pub fn identifiers() -> Vec<&'static str> {
        ThemeId::ALL.iter().map(|id| id.identifier()).collect()
    }

    pub fn theme(id: ThemeId) -> &'static ThemeInfo {
        &THEMES[id as usize]
    }

    /// # Panics
    ///
    /// Panics if no generated theme has this identifier.
    pub fn get(identifier: &str) -> &'static ThemeInfo {
        match THEMES.iter().find(|theme| theme.id.identifier() == identifier) {
            Some(theme) => theme,
            None => panic!("unknown theme identifier: {identifier}"),
        }
    }
}
