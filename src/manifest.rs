//! Splitting and joining of multi-document manifest blobs.
//!
//! A stored manifest is a single text blob holding any number of serialized
//! resources separated by `---` lines, each preceded by a provenance comment
//! (`# Source: ...` for chart-rendered documents, `# Exported form: ...` for
//! adopted ones). Documents are kept as an ordered sequence of
//! (provenance, content) entries: original document order survives a
//! split/join round trip, and two documents carrying the same label never
//! overwrite each other.

use std::fmt;

const SOURCE_PREFIX: &str = "# Source:";
const EXPORTED_PREFIX: &str = "# Exported form:";

/// Provenance records where a manifest document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Rendered from a chart template (or synthesized at split time).
    Source(String),
    /// Captured from a live object by the adopt workflow.
    Exported(String),
}

impl Provenance {
    /// The label identifying the document within its manifest.
    pub fn label(&self) -> &str {
        match self {
            Provenance::Source(label) => label,
            Provenance::Exported(label) => label,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Provenance::Source(_) => SOURCE_PREFIX,
            Provenance::Exported(_) => EXPORTED_PREFIX,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix(), self.label())
    }
}

/// One document of a manifest: a provenance label and the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub provenance: Provenance,
    pub content: String,
}

/// ManifestDocuments is the ordered document sequence of one manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDocuments {
    entries: Vec<ManifestEntry>,
}

impl ManifestDocuments {
    /// Creates an empty document sequence.
    pub fn new() -> Self {
        ManifestDocuments {
            entries: Vec::new(),
        }
    }

    /// Partitions a manifest blob into its documents.
    ///
    /// Segments are delimited by lines consisting of `---`. The provenance
    /// label is read from the segment's leading comment line when one is
    /// present, else `manifest-<n>` is synthesized from the running document
    /// index. Whitespace-only segments are dropped silently; every other
    /// segment appears in the output, in input order.
    pub fn split(blob: &str) -> Self {
        let mut docs = ManifestDocuments::new();
        let mut segment = String::new();

        for line in blob.lines() {
            if line.trim() == "---" {
                docs.push_segment(&segment);
                segment.clear();
            } else {
                segment.push_str(line);
                segment.push('\n');
            }
        }
        docs.push_segment(&segment);

        docs
    }

    fn push_segment(&mut self, segment: &str) {
        if segment.trim().is_empty() {
            return;
        }

        let trimmed = segment.trim_start_matches(['\n', '\r']);
        let (provenance, content) = match split_label_line(trimmed) {
            Some((provenance, remainder)) => (provenance, remainder),
            None => (
                Provenance::Source(format!("manifest-{}", self.entries.len())),
                trimmed,
            ),
        };

        self.entries.push(ManifestEntry {
            provenance,
            content: content.trim_end().to_string(),
        });
    }

    /// Appends a document.
    pub fn push(&mut self, provenance: Provenance, content: impl Into<String>) {
        self.entries.push(ManifestEntry {
            provenance,
            content: content.into(),
        });
    }

    /// Reassembles the documents into a single manifest blob.
    ///
    /// Each document is emitted as `---`, its provenance comment, then its
    /// content. Entries with whitespace-only content are skipped.
    pub fn join(&self) -> String {
        let mut blob = String::new();
        for entry in &self.entries {
            if entry.content.trim().is_empty() {
                continue;
            }
            blob.push_str("---\n");
            blob.push_str(&entry.provenance.to_string());
            blob.push('\n');
            blob.push_str(&entry.content);
            blob.push('\n');
        }
        blob
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the documents, in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over the documents, in manifest order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ManifestEntry> {
        self.entries.iter_mut()
    }
}

impl IntoIterator for ManifestDocuments {
    type Item = ManifestEntry;
    type IntoIter = std::vec::IntoIter<ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Splits a leading provenance comment off a segment, if one is present.
fn split_label_line(segment: &str) -> Option<(Provenance, &str)> {
    let first_line = segment.lines().next()?;
    let remainder = &segment[first_line.len()..];
    let remainder = remainder.strip_prefix('\n').unwrap_or(remainder);

    if let Some(label) = first_line.strip_prefix(SOURCE_PREFIX) {
        return Some((Provenance::Source(label.trim().to_string()), remainder));
    }
    if let Some(label) = first_line.strip_prefix(EXPORTED_PREFIX) {
        return Some((Provenance::Exported(label.trim().to_string()), remainder));
    }
    None
}
