//! The field patcher: rewrites `apiVersion` on a matched document.

use tracing::info;

use crate::document::{Document, ObjectMeta};
use crate::error::Result;

/// Overwrites the `apiVersion` of an already-matched document and returns
/// the re-serialized text.
///
/// The overwrite is unconditional, so patching is idempotent. The only
/// failure mode is a serialization error, which is fatal for the whole
/// invocation.
pub fn patch_document(document: &mut Document, to: &str) -> Result<String> {
    info!(
        kind = document.kind().unwrap_or_default(),
        name = document.name().unwrap_or_default(),
        from = document.api_version().unwrap_or_default(),
        to,
        "patching api version"
    );

    document.set_api_version(to);
    Ok(document.to_yaml()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEPLOYMENT: &str = "apiVersion: apps/v1beta1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 2
";

    #[test]
    fn test_patch_overwrites_api_version() {
        let mut document = Document::from_yaml(DEPLOYMENT).unwrap();
        let text = patch_document(&mut document, "apps/v1").unwrap();

        let reparsed = Document::from_yaml(&text).unwrap();
        assert_eq!(reparsed.api_version(), Some("apps/v1"));
        assert_eq!(reparsed.kind(), Some("Deployment"));
        assert!(text.contains("replicas: 2"));
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut document = Document::from_yaml(DEPLOYMENT).unwrap();
        let once = patch_document(&mut document, "apps/v1").unwrap();

        let mut reparsed = Document::from_yaml(&once).unwrap();
        let twice = patch_document(&mut reparsed, "apps/v1").unwrap();
        assert_eq!(once, twice);
    }
}
