//! rnaseq-prep: preprocessing helper for a bulk RNA-seq workflow
//!
//! Enables optional tools and overrides parameters in the workflow's
//! `tools.yaml`/`params.yaml`, and renames delivered `*.fastq.gz` read files
//! into the `{sample}[_{read}].{suffix}.fastq.gz` form the pipeline expects.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod rename;

pub use error::{PrepError, Result};
