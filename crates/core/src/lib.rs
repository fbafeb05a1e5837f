pub mod color;
pub mod config;
pub mod emit;
pub mod generate;
pub mod parsers;
pub mod tokens;
pub mod validate;

pub use config::GeneratorConfig;
pub use generate::{GenerateError, GenerationReport, check, generate};
