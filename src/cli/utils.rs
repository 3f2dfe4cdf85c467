//! Shared CLI utilities.

use crate::config::{load_settings, Settings};
use crate::domain::ParamValue;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Split a comma-separated list, trimming whitespace and discarding empty
/// segments.
pub fn parse_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Parse a `KEY=VALUE` parameter override. The value is read as YAML.
pub fn parse_param(raw: &str) -> std::result::Result<(String, ParamValue), String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got '{raw}'"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }
    Ok((key.to_string(), ParamValue::parse(value)))
}

/// Later occurrences of the same key win.
pub fn collect_params(pairs: &[(String, ParamValue)]) -> BTreeMap<String, ParamValue> {
    pairs.iter().cloned().collect()
}

/// Load settings from `--config` or the working directory.
pub fn resolve_settings(config: Option<&Path>) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    load_settings(&cwd, config)
}
