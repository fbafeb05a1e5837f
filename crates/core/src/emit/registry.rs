use std::fmt::{self, Write};

use super::{COLORS_MODULE, HEADER, Plan, doc_text};

const PALETTE_TYPE: &str = "\
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
";

const REGISTRY_TYPE: &str = "\
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
            None => panic!(\"unknown theme identifier: {identifier}\"),
        }
    }
}
";

/// `theme_registry.rs`: the identifier enum, per-theme metadata and the
/// registry that looks themes up.
pub(super) fn render(plan: &Plan<'_>) -> Result<String, fmt::Error> {
    let count = plan.themes.len();
    let mut out = String::new();
    writeln!(out, "{HEADER}")?;
    writeln!(out, "// Namespace: {}", plan.namespace)?;
    writeln!(out)?;
    writeln!(
        out,
        "use crate::{}::{COLORS_MODULE}::{{self, Color, ThemeColors}};",
        plan.namespace
    )?;
    writeln!(out)?;

    writeln!(out, "/// Identifier of every generated theme, in registry order.")?;
    writeln!(out, "#[allow(non_camel_case_types)]")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]")?;
    writeln!(out, "pub enum ThemeId {{")?;
    for entry in &plan.themes {
        writeln!(out, "    /// {}", doc_text(&entry.theme.display_name))?;
        writeln!(out, "    {},", entry.variant)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl ThemeId {{")?;
    writeln!(out, "    pub const ALL: [ThemeId; {count}] = [")?;
    for entry in &plan.themes {
        writeln!(out, "        ThemeId::{},", entry.variant)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;
    writeln!(out, "    pub const fn identifier(self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for entry in &plan.themes {
        writeln!(
            out,
            "            ThemeId::{} => {:?},",
            entry.variant, entry.theme.identifier
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    pub const fn display_name(self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for entry in &plan.themes {
        writeln!(
            out,
            "            ThemeId::{} => {:?},",
            entry.variant, entry.theme.display_name
        )?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    out.push_str(PALETTE_TYPE);
    writeln!(out)?;

    writeln!(out, "/// Indexed by `ThemeId as usize`.")?;
    writeln!(out, "pub static THEMES: [ThemeInfo; {count}] = [")?;
    for entry in &plan.themes {
        writeln!(out, "    ThemeInfo {{")?;
        writeln!(out, "        id: ThemeId::{},", entry.variant)?;
        writeln!(out, "        display_name: {:?},", entry.theme.display_name)?;
        writeln!(out, "        colors: &{COLORS_MODULE}::{},", entry.type_name)?;
        writeln!(out, "        palette: ThemePalette {{")?;
        if plan.roles.is_empty() {
            writeln!(out, "            roles: &[],")?;
        } else {
            writeln!(out, "            roles: &[")?;
            for (role, argb) in plan.roles.iter().zip(&entry.colors) {
                writeln!(out, "                ({:?}, Color(0x{argb:08X})),", role.name)?;
            }
            writeln!(out, "            ],")?;
        }
        writeln!(out, "        }},")?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    out.push_str(REGISTRY_TYPE);
    Ok(out)
}
