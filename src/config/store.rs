//! Load and write back the workflow's YAML documents.

use crate::domain::{ParamConfig, ToolConfig};
use crate::error::{PrepError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of `tools.yaml` and `params.yaml` for one workflow checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowFiles {
    pub config_dir: PathBuf,
    pub tools_file: String,
    pub params_file: String,
}

impl WorkflowFiles {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            tools_file: "tools.yaml".to_string(),
            params_file: "params.yaml".to_string(),
        }
    }

    pub fn tools_path(&self) -> PathBuf {
        self.config_dir.join(&self.tools_file)
    }

    pub fn params_path(&self) -> PathBuf {
        self.config_dir.join(&self.params_file)
    }

    pub fn load_tools(&self) -> Result<ToolConfig> {
        load_document(&self.tools_path())
    }

    pub fn load_params(&self) -> Result<ParamConfig> {
        load_document(&self.params_path())
    }

    pub fn save_tools(&self, tools: &ToolConfig) -> Result<()> {
        write_document(&self.tools_path(), tools)
    }

    pub fn save_params(&self, params: &ParamConfig) -> Result<()> {
        write_document(&self.params_path(), params)
    }
}

/// Read a YAML mapping document and validate it against `T`.
///
/// Syntax errors and shape errors are reported separately. An empty
/// document is treated as an empty mapping.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| PrepError::io(path, e))?;

    let raw: serde_yaml::Value = if content.trim().is_empty() {
        serde_yaml::Value::Null
    } else {
        serde_yaml::from_str(&content)
            .map_err(|source| PrepError::Yaml { path: path.to_path_buf(), source })?
    };

    let raw = match raw {
        serde_yaml::Value::Null => serde_yaml::Value::Mapping(serde_yaml::Mapping::new()),
        serde_yaml::Value::Mapping(_) => raw,
        other => {
            return Err(PrepError::Schema {
                path: path.to_path_buf(),
                message: format!("top-level document must be a mapping, found {}", kind(&other)),
            })
        }
    };

    serde_yaml::from_value(raw)
        .map_err(|e| PrepError::Schema { path: path.to_path_buf(), message: e.to_string() })
}

/// Overwrite `path` with the YAML form of `value`.
///
/// The document is written to a sibling temp file first and renamed over
/// the target.
pub fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value)
        .map_err(|source| PrepError::Yaml { path: path.to_path_buf(), source })?;

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("document.yaml");
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp_path, yaml).map_err(|e| PrepError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(PrepError::io(path, e));
    }

    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamValue;
    use tempfile::TempDir;

    const TOOLS: &str = "\
trimmomatic:
  description: Adapter trimming
  use_tool: false
fastqc:
  description: Read quality control
  use_tool: false
";

    const PARAMS: &str = "\
threads: 4
genome: hg38
adapters:
  - TruSeq3-PE.fa
";

    fn workflow(tmp: &TempDir) -> WorkflowFiles {
        fs::write(tmp.path().join("tools.yaml"), TOOLS).expect("write tools");
        fs::write(tmp.path().join("params.yaml"), PARAMS).expect("write params");
        WorkflowFiles::new(tmp.path())
    }

    #[test]
    fn loads_both_documents() {
        let tmp = TempDir::new().expect("tmp");
        let files = workflow(&tmp);

        let tools = files.load_tools().expect("tools");
        assert_eq!(tools.len(), 2);
        assert_eq!(tools.get("fastqc").expect("fastqc").description, "Read quality control");

        let params = files.load_params().expect("params");
        assert_eq!(params.get("threads"), Some(&ParamValue::Number(4.into())));
        assert_eq!(
            params.get("adapters"),
            Some(&ParamValue::List(vec![ParamValue::String("TruSeq3-PE.fa".to_string())]))
        );
    }

    #[test]
    fn save_then_load_preserves_content() {
        let tmp = TempDir::new().expect("tmp");
        let files = workflow(&tmp);

        let tools = files.load_tools().expect("tools");
        files.save_tools(&tools).expect("save");
        assert_eq!(files.load_tools().expect("reload"), tools);

        let written = fs::read_to_string(files.tools_path()).expect("read");
        let fastqc = written.find("fastqc").expect("fastqc key");
        let trimmomatic = written.find("trimmomatic").expect("trimmomatic key");
        assert!(fastqc < trimmomatic, "keys are written sorted");
        assert!(!tmp.path().join(".tools.yaml.tmp").exists());
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let files = WorkflowFiles::new(tmp.path().join("nope"));
        assert!(matches!(files.load_tools(), Err(PrepError::Io { .. })));
    }

    #[test]
    fn invalid_yaml_is_syntax_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tools.yaml");
        fs::write(&path, "fastqc: [unclosed\n").expect("write");
        assert!(matches!(load_document::<ToolConfig>(&path), Err(PrepError::Yaml { .. })));
    }

    #[test]
    fn non_mapping_document_is_schema_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("params.yaml");
        fs::write(&path, "- a\n- b\n").expect("write");
        let err = load_document::<ParamConfig>(&path).expect_err("should fail");
        assert!(matches!(err, PrepError::Schema { .. }));
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn tool_missing_flag_is_schema_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("tools.yaml");
        fs::write(&path, "fastqc:\n  description: QC\n").expect("write");
        assert!(matches!(load_document::<ToolConfig>(&path), Err(PrepError::Schema { .. })));
    }

    fn round_trip_params(tmp: &TempDir, content: &str) -> (ParamConfig, String) {
        let files = WorkflowFiles::new(tmp.path());
        fs::write(files.params_path(), content).expect("write params");
        let params = files.load_params().expect("params");
        files.save_params(&params).expect("save");
        assert_eq!(files.load_params().expect("reload"), params);
        (params, fs::read_to_string(files.params_path()).expect("read"))
    }

    #[test]
    fn params_with_integer_keys_survive_write_back() {
        let tmp = TempDir::new().expect("tmp");
        let (params, written) = round_trip_params(&tmp, "qual_bins:\n  1: low\n  2: high\n");
        assert_eq!(
            params.get("qual_bins"),
            Some(&ParamValue::Map(vec![
                (ParamValue::Number(1.into()), ParamValue::String("low".to_string())),
                (ParamValue::Number(2.into()), ParamValue::String("high".to_string())),
            ]))
        );
        assert!(written.contains("1: low"), "{written}");
        assert!(!written.contains("'1'"), "{written}");
    }

    #[test]
    fn params_with_large_unsigned_integers_survive_write_back() {
        let tmp = TempDir::new().expect("tmp");
        let (params, written) = round_trip_params(&tmp, "seed: 18446744073709551615\n");
        assert_eq!(params.get("seed"), Some(&ParamValue::Number(u64::MAX.into())));
        assert!(written.contains("seed: 18446744073709551615"), "{written}");
    }

    #[test]
    fn params_with_tags_survive_write_back() {
        let tmp = TempDir::new().expect("tmp");
        let (params, written) = round_trip_params(&tmp, "aligner: !star\n  index: ref\n");
        assert!(matches!(params.get("aligner"), Some(ParamValue::Tagged(..))));
        assert!(written.contains("!star"), "{written}");
        assert!(written.contains("index: ref"), "{written}");
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("params.yaml");
        fs::write(&path, "").expect("write");
        let params = load_document::<ParamConfig>(&path).expect("params");
        assert!(params.is_empty());
    }
}
