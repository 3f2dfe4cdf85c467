//! Core domain types shared by the config editor and the read file renamer

pub mod reads;
pub mod workflow;

pub use reads::{compute_target_name, is_read_file, ReadFileName, ReadLayout, FASTQ_EXTENSION};
pub use workflow::{ParamConfig, ParamValue, ToolConfig, ToolDescriptor};
