//! The live-resource discovery contract.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// DiscoveryError represents a failure to resolve a live resource.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("resource '{0}' not found")]
    NotFound(String),

    #[error("discovery backend: {0}")]
    Backend(String),
}

/// LiveResources resolves a resource name to its live serialized form.
///
/// The returned text must parse into a structured object exposing at least
/// `kind`, `apiVersion`, and `metadata.name`; a resource that resolves to
/// empty content is valid and is skipped by the exporter, not an error.
pub trait LiveResources {
    fn fetch(&self, name: &str, namespace: &str) -> Result<String, DiscoveryError>;
}

/// DirResources reads resources from `<root>/<name>.yaml`.
///
/// A local stand-in for cluster discovery, which is an external
/// collaborator; the namespace is not encoded in the layout.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirResources { root: root.into() }
    }
}

impl LiveResources for DirResources {
    fn fetch(&self, name: &str, _namespace: &str) -> Result<String, DiscoveryError> {
        let path = self.root.join(format!("{}.yaml", name));
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DiscoveryError::NotFound(name.to_string()),
            _ => DiscoveryError::Backend(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_dir_resources_reads_named_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cm-a.yaml"), "kind: ConfigMap\n").unwrap();

        let live = DirResources::new(dir.path());
        assert_eq!(live.fetch("cm-a", "default").unwrap(), "kind: ConfigMap\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let live = DirResources::new(dir.path());
        assert!(matches!(
            live.fetch("cm-a", "default"),
            Err(DiscoveryError::NotFound(_))
        ));
    }
}
