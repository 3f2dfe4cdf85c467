//! Settings file loading

use crate::config::settings::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CANDIDATES: [&str; 5] = [
    "rnaseq-prep.toml",
    ".rnaseq-prep.toml",
    "rnaseq-prep.yaml",
    "rnaseq-prep.yml",
    ".rnaseq-prep.yaml",
];

/// Load settings from `config_path`, or from the first settings file found in
/// `work_dir` when no path is given.
///
/// An explicit file that cannot be parsed is an error. An auto-discovered one
/// only logs a warning and falls back to defaults.
pub fn load_settings(work_dir: &Path, config_path: Option<&Path>) -> Result<Settings> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(work_dir),
    };

    let Some(settings_file) = discovered else {
        return Ok(Settings::default());
    };

    let content = fs::read_to_string(&settings_file)
        .with_context(|| format!("Failed reading settings file: {}", settings_file.display()))?;

    let ext = settings_file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => toml::from_str::<Settings>(&content)
            .with_context(|| format!("Invalid TOML settings: {}", settings_file.display())),
        "yaml" | "yml" => serde_yaml::from_str::<Settings>(&content)
            .with_context(|| format!("Invalid YAML settings: {}", settings_file.display())),
        other => Err(anyhow::anyhow!(
            "Unsupported settings extension '.{}' for file {}",
            other,
            settings_file.display()
        )),
    };

    match parsed {
        Ok(settings) => {
            tracing::debug!("loaded settings from {}", settings_file.display());
            Ok(settings)
        }
        Err(e) if !explicit => {
            tracing::warn!("Ignoring auto-discovered settings {}: {:#}", settings_file.display(), e);
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}

fn discover_settings(work_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|name| work_dir.join(name)).find(|path| path.is_file())
}
