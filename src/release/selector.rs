//! Revision selection over a release's stored history.

use tracing::debug;

use super::record::ReleaseRecord;
use super::store::{ReleaseStore, StoreError};
use crate::error::{Error, Result};

/// Picks exactly one historical record for `name`.
///
/// With `revision` unset, the record with the highest version is returned.
/// With `revision` set, the record whose version equals it is returned. An
/// unknown release, an empty history, or a missing revision all fail with an
/// explicit not-found error; the history is never dereferenced blindly.
pub fn select_revision(
    store: &dyn ReleaseStore,
    name: &str,
    revision: Option<u32>,
) -> Result<ReleaseRecord> {
    let mut records = match store.list(name) {
        Ok(records) => records,
        Err(StoreError::NotFound(_)) => return Err(Error::ReleaseNotFound(name.to_string())),
        Err(e) => return Err(e.into()),
    };
    debug!(release = name, revisions = records.len(), "listed release history");

    match revision {
        Some(revision) => records
            .into_iter()
            .find(|r| r.version == revision)
            .ok_or(Error::RevisionNotFound {
                name: name.to_string(),
                revision,
            }),
        None => records
            .pop()
            .ok_or_else(|| Error::ReleaseNotFound(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::MemoryStore;
    use pretty_assertions::assert_eq;

    fn store_with_versions(versions: &[u32]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for &v in versions {
            store.create(ReleaseRecord::new("app", "default", v)).unwrap();
        }
        store
    }

    #[test]
    fn test_unset_revision_selects_latest() {
        let store = store_with_versions(&[1, 2, 3]);
        let record = select_revision(&store, "app", None).unwrap();
        assert_eq!(record.version, 3);
    }

    #[test]
    fn test_explicit_revision_selects_exact_record() {
        let store = store_with_versions(&[1, 2, 3]);
        let record = select_revision(&store, "app", Some(2)).unwrap();
        assert_eq!(record.version, 2);
    }

    #[test]
    fn test_missing_revision_fails() {
        let store = store_with_versions(&[1, 2, 3]);
        let err = select_revision(&store, "app", Some(5)).unwrap_err();
        assert!(matches!(
            err,
            Error::RevisionNotFound { revision: 5, .. }
        ));
    }

    #[test]
    fn test_unknown_release_fails() {
        let store = MemoryStore::new();
        let err = select_revision(&store, "app", None).unwrap_err();
        assert!(matches!(err, Error::ReleaseNotFound(_)));
    }
}
