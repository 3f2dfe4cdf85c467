//! Tools command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;

use crate::config::Settings;
use crate::domain::ToolConfig;

#[derive(Args)]
pub struct ToolsArgs {
    /// Directory containing tools.yaml and params.yaml
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

pub fn run(args: ToolsArgs, mut settings: Settings) -> Result<()> {
    if let Some(dir) = args.config_dir {
        settings.config_dir = dir;
    }
    let files = settings.workflow_files();
    let tools = files
        .load_tools()
        .with_context(|| format!("Failed to load tools from {}", files.tools_path().display()))?;

    print_tools(&tools);
    Ok(())
}

/// Print `- name: description`, marking tools that are already enabled.
pub fn print_tools(tools: &ToolConfig) {
    println!("Available tools:");
    for (name, tool) in tools.iter() {
        let marker = if tool.use_tool { style("[on] ").green() } else { style("[off]").dim() };
        println!("  {} {}: {}", marker, style(name).bold(), tool.description);
    }
}
