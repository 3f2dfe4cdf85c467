//! Runtime settings for a preprocessing run

use crate::config::store::WorkflowFiles;
use crate::rename::CollisionPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_DIR: &str = "bulk-rnaseq-preproc/workflow";

/// Settings read from `rnaseq-prep.toml` / `rnaseq-prep.yaml`.
///
/// Every field has a default, so a missing file or a partial file is fine.
/// Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the workflow's `tools.yaml` and `params.yaml`
    pub config_dir: PathBuf,
    pub tools_file: String,
    pub params_file: String,
    /// Root of the read files to normalize
    pub input_dir: PathBuf,
    pub on_collision: CollisionPolicy,
    /// Keep renaming after a malformed name and report all failures at the end
    pub keep_going: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            tools_file: "tools.yaml".to_string(),
            params_file: "params.yaml".to_string(),
            input_dir: PathBuf::from("."),
            on_collision: CollisionPolicy::default(),
            keep_going: false,
        }
    }
}

impl Settings {
    pub fn workflow_files(&self) -> WorkflowFiles {
        WorkflowFiles {
            config_dir: self.config_dir.clone(),
            tools_file: self.tools_file.clone(),
            params_file: self.params_file.clone(),
        }
    }
}
