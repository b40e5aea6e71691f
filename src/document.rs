//! Typed view over a single serialized resource document.
//!
//! A manifest document is mostly opaque to the engine; only `kind`,
//! `apiVersion` and `metadata.name` are ever inspected or rewritten. The
//! [`Document`] type pins those three fields down as typed accessors and
//! keeps everything else in an opaque remainder, so unknown fields survive a
//! parse/serialize round trip untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accessors for the identity fields of a resource object.
///
/// Absent fields are reported as `None` rather than as errors; deciding what
/// an absent field means is the caller's concern (the matcher treats it as
/// "no match").
pub trait ObjectMeta {
    fn kind(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    fn api_version(&self) -> Option<&str>;
}

/// Document is one resource's structured form within a manifest.
///
/// The typed fields serialize ahead of the flattened remainder, so the
/// fields the engine inspects are round-trip stable even though the
/// serialization is not byte-stable for unrelated fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(
        rename = "apiVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_yaml::Value>,
}

/// Metadata is the subset of object metadata the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub rest: BTreeMap<String, serde_yaml::Value>,
}

impl Document {
    /// Parses a single YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Document, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Re-serializes the document to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Overwrites the `apiVersion` field.
    pub fn set_api_version(&mut self, api_version: impl Into<String>) {
        self.api_version = Some(api_version.into());
    }
}

impl ObjectMeta for Document {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.name.as_deref())
    }

    fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }
}
