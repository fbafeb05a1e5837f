pub mod registry;
pub mod theme;

pub use registry::{ThemeSet, UnknownThemeIdentifier};
pub use theme::{ColorMap, ParsedTheme};
