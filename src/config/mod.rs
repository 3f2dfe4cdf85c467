//! Workflow configuration: settings, YAML document store and selective merge
//!
//! Settings precedence is CLI > settings file > defaults.

pub mod loader;
pub mod merge;
pub mod settings;
pub mod store;

pub use loader::load_settings;
pub use merge::{merge_params, merge_tools, Merged};
pub use settings::Settings;
pub use store::WorkflowFiles;
