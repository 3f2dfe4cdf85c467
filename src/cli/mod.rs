//! Command-line interface for rnaseq-prep
//!
//! `run` is the interactive flow; `tools`, `configure` and `rename` expose
//! each step on its own for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod configure;
mod rename;
mod run;
mod tools;
mod utils;

/// Prepare bulk RNA-seq workflow configs and normalize FASTQ read file names
#[derive(Parser)]
#[command(name = "rnaseq-prep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (TOML or YAML); defaults to rnaseq-prep.toml/.yaml in the working directory
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick tools interactively, update the workflow configs and rename read files
    Run(run::RunArgs),

    /// List the workflow's optional tools
    Tools(tools::ToolsArgs),

    /// Enable tools and override parameters without prompting
    Configure(configure::ConfigureArgs),

    /// Rename *.fastq.gz files under a directory into canonical form
    Rename(rename::RenameArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(cli.verbose, rust_log.as_deref());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let settings = utils::resolve_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => run::run(args, settings),
        Commands::Tools(args) => tools::run(args, settings),
        Commands::Configure(args) => configure::run(args, settings),
        Commands::Rename(args) => rename::run(args, settings),
    }
}

/// A usable `RUST_LOG` replaces the default level entirely; otherwise
/// `--verbose` selects DEBUG and the default is WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).to_string(), "warn");
    }

    #[test]
    fn log_filter_verbose_selects_debug() {
        assert_eq!(log_filter(true, None).to_string(), "debug");
    }

    #[test]
    fn log_filter_rust_log_wins_over_verbose() {
        assert_eq!(log_filter(true, Some("rnaseq_prep=trace")).to_string(), "rnaseq_prep=trace");
        assert_eq!(log_filter(false, Some("error")).to_string(), "error");
    }

    #[test]
    fn log_filter_ignores_empty_rust_log() {
        assert_eq!(log_filter(true, Some("  ")).to_string(), "debug");
    }
}
