//! Resource descriptors and document matching.

use crate::document::{Document, ObjectMeta};

/// ResourceDescriptor selects the documents a patch applies to.
///
/// `kind` is always required; `name` and `api_version` are optional
/// restrictions. Matching is a conjunction of the set checks, so a
/// kind-only descriptor means "every resource of kind X" while a fully
/// specified one pins a single resource at a single version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub kind: String,
    pub name: Option<String>,
    pub api_version: Option<String>,
}

impl ResourceDescriptor {
    /// Creates a descriptor matching every resource of `kind`.
    pub fn kind(kind: impl Into<String>) -> Self {
        ResourceDescriptor {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Restricts the descriptor to resources named `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restricts the descriptor to resources currently at `api_version`.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Decides whether `document` is selected by this descriptor.
    ///
    /// A document with an absent or empty name, kind, or api version never
    /// matches; that is a no-match outcome, not an error.
    pub fn matches(&self, document: &Document) -> bool {
        let Some(name) = document.name() else {
            return false;
        };
        if name.is_empty() {
            return false;
        }
        if let Some(want) = &self.name {
            if want != name {
                return false;
            }
        }

        let Some(kind) = document.kind() else {
            return false;
        };
        if kind.is_empty() || kind != self.kind {
            return false;
        }

        let Some(api_version) = document.api_version() else {
            return false;
        };
        if api_version.is_empty() {
            return false;
        }
        if let Some(want) = &self.api_version {
            if want != api_version {
                return false;
            }
        }

        true
    }

    /// Parses `content` and matches it, returning the parsed document on a
    /// match. An unparsable document is a no-match.
    pub fn matches_text(&self, content: &str) -> Option<Document> {
        Document::from_yaml(content)
            .ok()
            .filter(|document| self.matches(document))
    }
}
