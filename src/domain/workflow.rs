//! Typed views of the workflow's `tools.yaml` and `params.yaml` documents.

use serde::{Deserialize, Serialize};
use serde_yaml::value::{Tag, TaggedValue};
use std::collections::BTreeMap;
use std::fmt;

/// One optional processing tool as listed in `tools.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub description: String,
    pub use_tool: bool,
    /// Any other keys on the record, written back untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ToolDescriptor {
    pub fn new(description: impl Into<String>, use_tool: bool) -> Self {
        Self { description: description.into(), use_tool, extra: BTreeMap::new() }
    }
}

/// Tool name to descriptor. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolConfig(BTreeMap<String, ToolDescriptor>);

impl ToolConfig {
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.0.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut ToolDescriptor> {
        self.0.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ToolDescriptor)> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter(|(_, tool)| tool.use_tool).map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ToolDescriptor)> for ToolConfig {
    fn from_iter<I: IntoIterator<Item = (String, ToolDescriptor)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A parameter value from `params.yaml`.
///
/// Converted through [`serde_yaml::Value`] so every YAML shape survives a
/// load/save cycle unchanged: numbers keep their exact integer or float
/// form, mappings keep non-string keys and their order, tags are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_yaml::Value", into = "serde_yaml::Value")]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
    List(Vec<ParamValue>),
    Map(Vec<(ParamValue, ParamValue)>),
    Tagged(Tag, Box<ParamValue>),
}

impl ParamValue {
    /// Parse a command-line value as a YAML scalar or flow collection.
    /// Input that is not valid YAML is kept as a plain string.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ParamValue::String(String::new());
        }
        match serde_yaml::from_str::<serde_yaml::Value>(trimmed) {
            Ok(value) => ParamValue::from(value),
            Err(_) => ParamValue::String(trimmed.to_string()),
        }
    }
}

impl From<serde_yaml::Value> for ParamValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => ParamValue::Null,
            serde_yaml::Value::Bool(b) => ParamValue::Bool(b),
            serde_yaml::Value::Number(n) => ParamValue::Number(n),
            serde_yaml::Value::String(s) => ParamValue::String(s),
            serde_yaml::Value::Sequence(items) => {
                ParamValue::List(items.into_iter().map(ParamValue::from).collect())
            }
            serde_yaml::Value::Mapping(map) => ParamValue::Map(
                map.into_iter().map(|(k, v)| (ParamValue::from(k), ParamValue::from(v))).collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => {
                let TaggedValue { tag, value } = *tagged;
                ParamValue::Tagged(tag, Box::new(ParamValue::from(value)))
            }
        }
    }
}

impl From<ParamValue> for serde_yaml::Value {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Null => serde_yaml::Value::Null,
            ParamValue::Bool(b) => serde_yaml::Value::Bool(b),
            ParamValue::Number(n) => serde_yaml::Value::Number(n),
            ParamValue::String(s) => serde_yaml::Value::String(s),
            ParamValue::List(items) => {
                serde_yaml::Value::Sequence(items.into_iter().map(Into::into).collect())
            }
            ParamValue::Map(entries) => serde_yaml::Value::Mapping(
                entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ),
            ParamValue::Tagged(tag, inner) => {
                serde_yaml::Value::Tagged(Box::new(TaggedValue { tag, value: (*inner).into() }))
            }
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Null => write!(f, "null"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::String(s) => write!(f, "{s}"),
            ParamValue::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            ParamValue::Map(entries) => {
                let parts: Vec<String> =
                    entries.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
            ParamValue::Tagged(tag, inner) => write!(f, "{tag} {inner}"),
        }
    }
}

/// Parameter name to value. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamConfig(BTreeMap<String, ParamValue>);

impl ParamConfig {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut ParamValue> {
        self.0.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ParamValue)> for ParamConfig {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
