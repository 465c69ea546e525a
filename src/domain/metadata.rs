//! Solidity compiler metadata document (the parts needed for userdoc resolution)

use std::collections::BTreeMap;

use alloy_json_abi::Function;
use serde::{Deserialize, Deserializer};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid metadata document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root of a `metadata.json` document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub output: MetadataOutput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataOutput {
    /// ABI functions in declaration order; other item kinds are skipped
    #[serde(default, deserialize_with = "deserialize_functions")]
    pub abi: Vec<Function>,
    #[serde(default)]
    pub userdoc: UserDoc,
}

/// `output.userdoc` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDoc {
    /// Normalized text signature -> method documentation
    #[serde(default)]
    pub methods: BTreeMap<String, MethodDoc>,
    /// Contract-level notice
    #[serde(default)]
    pub notice: Option<String>,
}

/// A single `userdoc.methods` entry
///
/// Older compilers emit plain strings for some entries; anything that is not a
/// JSON object is kept as [`MethodDoc::Other`] and carries no notice.
#[derive(Debug, Clone)]
pub enum MethodDoc {
    Entry { notice: Option<String> },
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for MethodDoc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.as_object() {
            Some(object) => Ok(MethodDoc::Entry {
                notice: object.get("notice").and_then(|n| n.as_str()).map(str::to_string),
            }),
            None => Ok(MethodDoc::Other(value)),
        }
    }
}

impl MethodDoc {
    pub fn notice(&self) -> Option<&str> {
        match self {
            MethodDoc::Entry { notice } => notice.as_deref().filter(|n| !n.is_empty()),
            MethodDoc::Other(_) => None,
        }
    }
}

impl MetadataDocument {
    pub fn parse(body: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(body)?)
    }

    /// All ABI functions in declaration order
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.output.abi.iter()
    }

    /// Non-empty notice template for a normalized signature
    pub fn notice_for(&self, normalized_signature: &str) -> Option<&str> {
        self.output
            .userdoc
            .methods
            .get(normalized_signature)
            .and_then(MethodDoc::notice)
    }

    pub fn contract_notice(&self) -> Option<&str> {
        self.output.userdoc.notice.as_deref().filter(|n| !n.is_empty())
    }
}

/// Keep only `function` entries, preserving their order in the document
///
/// Solidity treats an entry without `type` as a function.
fn deserialize_functions<'de, D>(deserializer: D) -> Result<Vec<Function>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<serde_json::Value>::deserialize(deserializer)?;
    items
        .into_iter()
        .filter_map(|mut item| {
            let kind = item.get("type").and_then(|t| t.as_str()).unwrap_or("function");
            if kind != "function" {
                return None;
            }
            if let Some(object) = item.as_object_mut() {
                object
                    .entry("type")
                    .or_insert_with(|| serde_json::Value::String("function".to_string()));
            }
            Some(serde_json::from_value::<Function>(item).map_err(serde::de::Error::custom))
        })
        .collect()
}
