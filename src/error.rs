//! Error types for config editing and read file renaming

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepError>;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("malformed read file name '{name}': {reason}")]
    MalformedFileName { name: String, reason: String },

    #[error("rename target already exists: {} -> {}", from.display(), to.display())]
    RenameCollision { from: PathBuf, to: PathBuf },

    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("schema violation in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrepError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        Self::MalformedFileName { name: name.to_string(), reason: reason.into() }
    }
}
