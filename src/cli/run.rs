//! Interactive preprocessing flow.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;

use super::configure::{apply_overrides, print_summary};
use super::rename::rename_reads;
use super::tools::print_tools;
use super::utils::{collect_params, parse_csv, parse_param};
use crate::config::Settings;
use crate::domain::{ParamValue, ReadLayout};
use crate::rename::{CollisionPolicy, FailureMode};

#[derive(Args)]
pub struct RunArgs {
    /// Directory containing tools.yaml and params.yaml
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory holding the *.fastq.gz read files
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Tools to enable (comma-separated); skips the prompt
    #[arg(short, long, value_name = "TOOLS")]
    pub tools: Option<String>,

    /// Sequencing layout; skips the prompt
    #[arg(long, value_enum)]
    pub layout: Option<ReadLayout>,

    /// Override a parameter; the value is parsed as YAML (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, ParamValue)>,

    /// What to do when a canonical read file name already exists
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_collision: Option<CollisionPolicy>,

    /// Keep going after a bad file name and report all failures at the end
    #[arg(long)]
    pub keep_going: bool,
}

pub fn run(args: RunArgs, mut settings: Settings) -> Result<()> {
    if let Some(dir) = args.config_dir {
        settings.config_dir = dir;
    }
    if let Some(dir) = args.input_dir {
        settings.input_dir = dir;
    }
    if let Some(policy) = args.on_collision {
        settings.on_collision = policy;
    }
    settings.keep_going |= args.keep_going;

    let files = settings.workflow_files();
    let tools = files
        .load_tools()
        .with_context(|| format!("Failed to load tools from {}", files.tools_path().display()))?;
    print_tools(&tools);

    let theme = ColorfulTheme::default();
    let tools_input = match args.tools {
        Some(list) => list,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Enter the tools to use (comma-separated)")
            .allow_empty(true)
            .interact_text()?,
    };
    let layout = match args.layout {
        Some(layout) => layout,
        None => ReadLayout::from_paired(
            Confirm::with_theme(&theme)
                .with_prompt("Is the data paired-end?")
                .default(false)
                .interact()?,
        ),
    };

    let selected = parse_csv(&tools_input);
    let overrides = collect_params(&args.params);
    tracing::debug!("selected tools {:?}, layout {}", selected, layout);

    let (tools, params) = apply_overrides(&files, &selected, &overrides)?;
    print_summary(&tools, &params);

    rename_reads(
        &settings.input_dir,
        layout,
        settings.on_collision,
        FailureMode::from_keep_going(settings.keep_going),
        false,
    )
}
