mod show;

use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use themegen_core::config::CONFIG_FILE_NAME;
use themegen_core::{GeneratorConfig, check, generate};

/// Generate typed Rust theme code from design token files
#[derive(Parser, Debug)]
#[command(name = "themegen")]
#[command(about = "Generate typed Rust theme code from design token files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write theme_colors.rs and theme_registry.rs
    Generate(GenerateArgs),
    /// Parse and validate a theme directory without writing anything
    Check {
        /// Directory of theme JSON files
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Print one resolved theme
    Show {
        /// Directory of theme JSON files
        #[arg(short, long)]
        input: PathBuf,
        /// Theme identifier, e.g. OCEAN_FIRE
        identifier: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Config file; ./themegen.toml is used when present
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory of theme JSON files
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Directory the generated files replace
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Rust module path of the generated files, e.g. theme::generated
    #[arg(short, long)]
    namespace: Option<String>,
}

impl GenerateArgs {
    /// Flags override the config file.
    fn into_config(self) -> Result<GeneratorConfig> {
        let path = self.config.or_else(|| {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            default.is_file().then_some(default)
        });
        let file = match path {
            Some(path) => {
                log::debug!("reading config {}", path.display());
                Some(GeneratorConfig::load(&path)?)
            }
            None => None,
        };

        let input_dir = self
            .input
            .or_else(|| file.as_ref().map(|c| c.input_dir.clone()))
            .context("no input directory: pass --input or set input_dir in themegen.toml")?;
        let output_dir = self
            .output
            .or_else(|| file.as_ref().map(|c| c.output_dir.clone()))
            .context("no output directory: pass --output or set output_dir in themegen.toml")?;
        let namespace = self
            .namespace
            .or_else(|| file.map(|c| c.namespace))
            .context("no namespace: pass --namespace or set namespace in themegen.toml")?;
        Ok(GeneratorConfig::new(input_dir, output_dir, namespace))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut out = stdout().lock();

    match cli.command {
        Command::Generate(args) => {
            let config = args.into_config()?;
            let report = generate(&config).with_context(|| {
                format!("failed to generate from {}", config.input_dir.display())
            })?;
            for file in &report.files {
                log::info!("wrote {}", file.display());
            }
        }
        Command::Check { input } => {
            let themes = check(&input)
                .with_context(|| format!("invalid themes in {}", input.display()))?;
            show::write_summary(&mut out, &themes)?;
        }
        Command::Show {
            input,
            identifier,
            json,
        } => {
            let themes = check(&input)
                .with_context(|| format!("invalid themes in {}", input.display()))?;
            let theme = themes.get(&identifier)?;
            if json {
                show::write_theme_json(&mut out, theme)?;
            } else {
                show::write_theme(&mut out, theme)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
