//! Selective merge of user selections into the workflow documents.
//!
//! Both merges only touch keys that already exist. Unknown names are never
//! added; they are reported back in [`Merged::ignored`] so the caller can
//! surface likely typos.

use crate::domain::{ParamConfig, ParamValue, ToolConfig};
use std::collections::{BTreeMap, BTreeSet};

/// Result of a merge plus which inputs matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<T> {
    pub config: T,
    /// Input names that matched an existing key (sorted, unique).
    pub applied: Vec<String>,
    /// Input names with no matching key (sorted, unique).
    pub ignored: Vec<String>,
}

impl<T> Merged<T> {
    pub fn into_config(self) -> T {
        self.config
    }
}

/// Enable every selected tool that exists in `current`.
///
/// Never disables a tool and never adds one.
pub fn merge_tools<I, S>(mut current: ToolConfig, selected: I) -> Merged<ToolConfig>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: BTreeSet<String> =
        selected.into_iter().map(|name| name.as_ref().to_string()).collect();

    let mut applied = Vec::new();
    let mut ignored = Vec::new();
    for name in selected {
        match current.get_mut(&name) {
            Some(tool) => {
                if !tool.use_tool {
                    tracing::debug!("enabling tool {}", name);
                }
                tool.use_tool = true;
                applied.push(name);
            }
            None => {
                tracing::debug!("ignoring unknown tool {}", name);
                ignored.push(name);
            }
        }
    }

    Merged { config: current, applied, ignored }
}

/// Replace the value of every override key that exists in `current`.
pub fn merge_params(
    mut current: ParamConfig,
    overrides: &BTreeMap<String, ParamValue>,
) -> Merged<ParamConfig> {
    let mut applied = Vec::new();
    let mut ignored = Vec::new();
    for (key, value) in overrides {
        match current.get_mut(key) {
            Some(slot) => {
                tracing::debug!("setting parameter {} = {}", key, value);
                *slot = value.clone();
                applied.push(key.clone());
            }
            None => {
                tracing::debug!("ignoring unknown parameter {}", key);
                ignored.push(key.clone());
            }
        }
    }

    Merged { config: current, applied, ignored }
}
