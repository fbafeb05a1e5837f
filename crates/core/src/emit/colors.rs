use std::fmt::{self, Write};

use super::{HEADER, Plan, doc_text};

const COLOR_TYPE: &str = "\
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
";

/// `theme_colors.rs`: the color type, the role trait and one implementor per
/// theme.
pub(super) fn render(plan: &Plan<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{HEADER}")?;
    writeln!(out, "// Namespace: {}", plan.namespace)?;
    writeln!(out)?;
    out.push_str(COLOR_TYPE);

    writeln!(out)?;
    writeln!(out, "/// Color roles every generated theme provides.")?;
    writeln!(out, "#[allow(non_snake_case)]")?;
    writeln!(out, "pub trait ThemeColors: Sync {{")?;
    for role in &plan.roles {
        writeln!(out, "    /// {}", doc_text(&role.name))?;
        writeln!(out, "    fn {}(&self) -> Color;", role.property)?;
    }
    writeln!(out, "}}")?;

    for entry in &plan.themes {
        writeln!(out)?;
        writeln!(out, "/// {}", doc_text(&entry.theme.display_name))?;
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
        writeln!(out, "pub struct {};", entry.type_name)?;
        writeln!(out)?;
        writeln!(out, "impl ThemeColors for {} {{", entry.type_name)?;
        for (i, (role, argb)) in plan.roles.iter().zip(&entry.colors).enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "    fn {}(&self) -> Color {{", role.property)?;
            writeln!(out, "        Color(0x{argb:08X})")?;
            writeln!(out, "    }}")?;
        }
        writeln!(out, "}}")?;
    }
    Ok(out)
}
