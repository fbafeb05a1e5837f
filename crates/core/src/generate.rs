//! One generator run: parse, validate, emit, then replace the output
//! directory. Nothing is written until every earlier stage has succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use themegen_model::ThemeSet;
use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::emit::{EmitError, GeneratedFile, Namespace, emit_sources};
use crate::parsers::{ParseError, parse_theme_dir};
use crate::validate::{ValidationError, validate_themes};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error("output directory {} must name a directory to replace", .path.display())]
    InvalidOutputDir { path: PathBuf },
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub themes: usize,
    pub roles: usize,
    pub files: Vec<PathBuf>,
}

/// Parse and validate `input_dir` without emitting anything.
pub fn check(input_dir: &Path) -> Result<ThemeSet, GenerateError> {
    let themes = parse_theme_dir(input_dir)?;
    validate_themes(&themes)?;
    debug!("{} theme(s) in {} are valid", themes.len(), input_dir.display());
    Ok(ThemeSet::new(themes))
}

pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    let namespace = Namespace::parse(&config.namespace)?;
    staging_dir(&config.output_dir)?;
    let themes = check(&config.input_dir)?;
    let sources = emit_sources(&themes, &namespace)?;

    let files = write_staged(&config.output_dir, &sources)?;
    let report = GenerationReport {
        themes: themes.len(),
        roles: themes.role_names().len(),
        files,
    };
    info!(
        "generated {} theme(s) with {} role(s) into {}",
        report.themes,
        report.roles,
        config.output_dir.display()
    );
    Ok(report)
}

/// `out/generated` → `out/.generated.staging`.
///
/// Paths without a final name (`.`, `..`, `/`) are refused: the output
/// directory is deleted on every run.
fn staging_dir(output_dir: &Path) -> Result<PathBuf, GenerateError> {
    let name = output_dir
        .file_name()
        .ok_or_else(|| GenerateError::InvalidOutputDir {
            path: output_dir.to_path_buf(),
        })?;
    Ok(output_dir.with_file_name(format!(".{}.staging", name.to_string_lossy())))
}

/// Write every file into a sibling staging directory, then swap it in for
/// `output_dir`.
fn write_staged(output_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, GenerateError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| GenerateError::Io { path, source }
    };

    let staging = staging_dir(output_dir)?;
    if staging.exists() {
        fs::remove_dir_all(&staging).map_err(io_err(&staging))?;
    }
    if let Some(parent) = staging.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::create_dir(&staging).map_err(io_err(&staging))?;

    for file in files {
        let path = staging.join(file.file_name);
        fs::write(&path, &file.contents).map_err(io_err(&path))?;
        debug!("staged {}", path.display());
    }

    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(io_err(output_dir))?;
    }
    fs::rename(&staging, output_dir).map_err(io_err(output_dir))?;

    Ok(files
        .iter()
        .map(|file| output_dir.join(file.file_name))
        .collect())
}
