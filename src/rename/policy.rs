//! Knobs controlling how the renamer reacts to collisions and bad names

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when the canonical name is already taken in the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Replace the existing file, as a plain filesystem rename would.
    #[default]
    Overwrite,
    /// Stop with a collision error.
    Fail,
    /// Leave the source file under its original name.
    Skip,
    /// Append `-N` before `.fastq.gz`, picking the smallest free N.
    Suffix,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollisionPolicy::Overwrite => "overwrite",
            CollisionPolicy::Fail => "fail",
            CollisionPolicy::Skip => "skip",
            CollisionPolicy::Suffix => "suffix",
        };
        f.write_str(name)
    }
}

/// Whether a per-file failure ends the run or is recorded and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    #[default]
    Abort,
    Collect,
}

impl FailureMode {
    pub fn from_keep_going(keep_going: bool) -> Self {
        if keep_going {
            FailureMode::Collect
        } else {
            FailureMode::Abort
        }
    }
}
