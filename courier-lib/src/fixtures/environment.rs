use crate::core::error::CourierError;
use crate::syntax::VariableMap;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    #[serde(default)]
    pub value: String,
    /// Descriptive only, never interpreted.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
}

impl Variable {
    /// An enabled plain-text variable with no description.
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Variable {
            key: key.into(),
            value: value.into(),
            kind: "text".to_string(),
            description: String::new(),
            enabled: true,
        }
    }
}

/// Accepts both a bare array of variables and the exported
/// `{ "name": ..., "values": [...] }` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnvironmentDocument {
    Values(Vec<Variable>),
    Export { values: Vec<Variable> },
}

impl From<EnvironmentDocument> for Environment {
    fn from(doc: EnvironmentDocument) -> Self {
        match doc {
            EnvironmentDocument::Values(values) | EnvironmentDocument::Export { values } => {
                Environment { values }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EnvironmentDocument")]
pub struct Environment {
    pub values: Vec<Variable>,
}

impl Environment {
    pub fn new(values: Vec<Variable>) -> Self {
        Environment { values }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, CourierError> {
        super::decode_slice(bytes, "<environment>")
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, CourierError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_slice(&bytes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CourierError> {
        super::decode_path(path.as_ref())
    }

    /// Enabled variables keyed by name. Entries are applied in order, so the
    /// last enabled entry for a key wins and disabled entries never shadow.
    pub fn variable_map(&self) -> VariableMap {
        self.values
            .iter()
            .filter(|var| var.enabled)
            .map(|var| (var.key.clone(), var.value.clone()))
            .collect()
    }

    /// Appends enabled text variables in iteration order. Existing entries
    /// are left untouched.
    pub fn augment<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values
            .extend(pairs.into_iter().map(|(k, v)| Variable::text(k, v)));
    }
}
