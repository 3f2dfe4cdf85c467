//! Sequencing read file names and the canonical naming rule.

use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension every read file handled by the renamer carries.
pub const FASTQ_EXTENSION: &str = ".fastq.gz";

/// Whether a sample was sequenced paired-end (R1/R2 files) or single-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReadLayout {
    PairedEnd,
    SingleEnd,
}

impl ReadLayout {
    pub fn from_paired(paired_end: bool) -> Self {
        if paired_end {
            ReadLayout::PairedEnd
        } else {
            ReadLayout::SingleEnd
        }
    }
}

impl fmt::Display for ReadLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadLayout::PairedEnd => write!(f, "paired-end"),
            ReadLayout::SingleEnd => write!(f, "single-end"),
        }
    }
}

/// Tokens pulled out of a delivered read file name such as `S1_R1_001.fastq.gz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFileName {
    pub sample: String,
    /// Read designator (`R1`, `R2`, ...); only set for paired-end data.
    pub read: Option<String>,
    pub suffix: String,
}

impl ReadFileName {
    /// Tokenize `name` on `_`.
    ///
    /// The first token is the sample. The last token's first `.`-segment is
    /// the suffix. In paired-end mode the second token is the read designator,
    /// and any tokens between it and the last one are dropped.
    pub fn parse(name: &str, layout: ReadLayout) -> Result<Self> {
        let parts: Vec<&str> = name.split('_').collect();

        let sample = parts[0];
        if sample.is_empty() {
            return Err(PrepError::malformed(name, "empty sample token"));
        }

        let last = parts[parts.len() - 1];
        let suffix = last.split('.').next().unwrap_or_default();
        if suffix.is_empty() {
            return Err(PrepError::malformed(name, "empty suffix before extension"));
        }

        let read = match layout {
            ReadLayout::PairedEnd => {
                let Some(read) = parts.get(1) else {
                    return Err(PrepError::malformed(
                        name,
                        "paired-end name needs a read token after the sample (SAMPLE_READ_...)",
                    ));
                };
                if read.is_empty() {
                    return Err(PrepError::malformed(name, "empty read token"));
                }
                Some((*read).to_string())
            }
            ReadLayout::SingleEnd => None,
        };

        Ok(Self { sample: sample.to_string(), read, suffix: suffix.to_string() })
    }

    /// Canonical `{sample}[_{read}].{suffix}.fastq.gz` form.
    pub fn canonical_name(&self) -> String {
        match &self.read {
            Some(read) => format!("{}_{}.{}{}", self.sample, read, self.suffix, FASTQ_EXTENSION),
            None => format!("{}.{}{}", self.sample, self.suffix, FASTQ_EXTENSION),
        }
    }
}

impl fmt::Display for ReadFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

pub fn is_read_file(name: &str) -> bool {
    name.ends_with(FASTQ_EXTENSION)
}

/// Compute the canonical name for a delivered read file.
pub fn compute_target_name(original_name: &str, layout: ReadLayout) -> Result<String> {
    ReadFileName::parse(original_name, layout).map(|parsed| parsed.canonical_name())
}
