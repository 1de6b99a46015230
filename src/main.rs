//! Convert every bank export below an input directory.
//!
//! # Usage
//!
//! ```bash
//! # Directories from a config file
//! convert-statement --config config.toml
//!
//! # Directories from flags, overriding the config file
//! convert-statement --config config.toml --out-dir /tmp/out
//!
//! # Show the directory names that select a format
//! convert-statement --list-formats
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use statement_convert::{Config, ConfigFile, Registry, batch};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Convert bank and credit card exports into one CSV layout.
///
/// Input files are expected at `<in-dir>/<format>/<subdir>/<file>.csv` and
/// written to the same relative path below `<out-dir>`.
#[derive(Parser, Debug)]
#[command(name = "convert-statement")]
#[command(version, about)]
struct Args {
    /// TOML file with `input_dir` and `output_dir`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input directory. Overrides the config file.
    #[arg(long)]
    in_dir: Option<PathBuf>,

    /// Output directory. Overrides the config file.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print the supported format names and exit.
    #[arg(long)]
    list_formats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let registry = Registry::builtin();

    if args.list_formats {
        for tag in registry.tags() {
            println!("{tag}");
        }
        return Ok(());
    }

    let file = args
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()
        .context("Failed to load config")?;
    let config = Config::resolve(file, args.in_dir, args.out_dir).context("Incomplete configuration")?;

    batch::run(&config, registry).with_context(|| {
        format!(
            "Failed to convert '{}' into '{}'",
            config.input_dir.display(),
            config.output_dir.display()
        )
    })?;
    Ok(())
}
