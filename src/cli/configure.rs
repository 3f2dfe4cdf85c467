//! Configure command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::utils::{collect_params, parse_csv, parse_param};
use crate::config::{merge_params, merge_tools, Merged, Settings, WorkflowFiles};
use crate::domain::{ParamConfig, ParamValue, ToolConfig};

#[derive(Args)]
pub struct ConfigureArgs {
    /// Tools to enable (comma-separated)
    #[arg(short, long, value_name = "TOOLS")]
    pub tools: Option<String>,

    /// Override a parameter; the value is parsed as YAML (repeatable)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, ParamValue)>,

    /// Directory containing tools.yaml and params.yaml
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

pub fn run(args: ConfigureArgs, mut settings: Settings) -> Result<()> {
    if let Some(dir) = args.config_dir {
        settings.config_dir = dir;
    }
    let selected = args.tools.as_deref().map(parse_csv).unwrap_or_default();
    let overrides = collect_params(&args.params);

    let (tools, params) = apply_overrides(&settings.workflow_files(), &selected, &overrides)?;
    print_summary(&tools, &params);
    Ok(())
}

/// Load both documents, merge the selections in and write both back.
///
/// Neither file is written unless both loaded cleanly.
pub fn apply_overrides(
    files: &WorkflowFiles,
    selected: &[String],
    overrides: &BTreeMap<String, ParamValue>,
) -> Result<(Merged<ToolConfig>, Merged<ParamConfig>)> {
    let tools_path = files.tools_path();
    let params_path = files.params_path();
    let current_tools = files
        .load_tools()
        .with_context(|| format!("Failed to load tools from {}", tools_path.display()))?;
    let current_params = files
        .load_params()
        .with_context(|| format!("Failed to load parameters from {}", params_path.display()))?;

    let tools = merge_tools(current_tools, selected);
    let params = merge_params(current_params, overrides);

    files
        .save_tools(&tools.config)
        .with_context(|| format!("Failed to write {}", tools_path.display()))?;
    files
        .save_params(&params.config)
        .with_context(|| format!("Failed to write {}", params_path.display()))?;

    for name in &tools.ignored {
        tracing::warn!("unknown tool '{}' ignored", name);
    }
    for key in &params.ignored {
        tracing::warn!("unknown parameter '{}' ignored", key);
    }

    Ok((tools, params))
}

pub fn print_summary(tools: &Merged<ToolConfig>, params: &Merged<ParamConfig>) {
    let enabled: Vec<&str> = tools.config.enabled().collect();
    if enabled.is_empty() {
        println!("Enabled tools: (none)");
    } else {
        println!("Enabled tools: {}", enabled.join(", "));
    }
    if !tools.ignored.is_empty() {
        println!("Ignored {} unknown tool(s): {}", tools.ignored.len(), tools.ignored.join(", "));
    }

    for key in &params.applied {
        if let Some(value) = params.config.get(key) {
            println!("Set {key} = {value}");
        }
    }
    if !params.ignored.is_empty() {
        println!(
            "Ignored {} unknown parameter(s): {}",
            params.ignored.len(),
            params.ignored.join(", ")
        );
    }
}
