//! Normalization of sequencing read file names
//!
//! Walks a directory tree and renames every `*.fastq.gz` file to its
//! canonical `{sample}[_{read}].{suffix}.fastq.gz` form in place.

pub mod policy;
pub mod renamer;

pub use policy::{CollisionPolicy, FailureMode};
pub use renamer::{rename_all, FileRenamer, RenameReport, RenamedFile};
