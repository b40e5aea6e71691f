//! In-memory release store.

use std::collections::BTreeMap;

use super::record::ReleaseRecord;
use super::store::{ReleaseStore, StoreError};

/// MemoryStore keeps release records in process memory.
///
/// Used by tests and by callers that assemble release history themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    releases: BTreeMap<String, Vec<ReleaseRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            releases: BTreeMap::new(),
        }
    }
}

impl ReleaseStore for MemoryStore {
    fn list(&self, name: &str) -> Result<Vec<ReleaseRecord>, StoreError> {
        match self.releases.get(name) {
            Some(records) => Ok(records.clone()),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    fn create(&mut self, record: ReleaseRecord) -> Result<(), StoreError> {
        let records = self.releases.entry(record.name.clone()).or_default();
        if records.iter().any(|r| r.version == record.version) {
            return Err(StoreError::AlreadyExists(record.name));
        }
        records.push(record);
        records.sort_by_key(|r| r.version);
        Ok(())
    }

    fn update(&mut self, record: ReleaseRecord) -> Result<(), StoreError> {
        let records = self
            .releases
            .get_mut(&record.name)
            .ok_or_else(|| StoreError::NotFound(record.name.clone()))?;

        match records.iter_mut().find(|r| r.version == record.version) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(record.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::Status;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_unknown_name_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.list("app"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_is_ascending_by_version() {
        let mut store = MemoryStore::new();
        store.create(ReleaseRecord::new("app", "default", 2)).unwrap();
        store.create(ReleaseRecord::new("app", "default", 1)).unwrap();
        store.create(ReleaseRecord::new("app", "default", 3)).unwrap();

        let versions: Vec<u32> = store.list("app").unwrap().iter().map(|r| r.version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
    }

    #[test]
    fn test_create_duplicate_version_is_rejected() {
        let mut store = MemoryStore::new();
        store.create(ReleaseRecord::new("app", "default", 1)).unwrap();

        let mut duplicate = ReleaseRecord::new("app", "default", 1);
        duplicate.manifest = "---\nkind: Service\n".into();
        let result = store.create(duplicate);
        assert!(matches!(result, Err(StoreError::AlreadyExists(_))));

        // The stored record is untouched.
        assert_eq!(store.list("app").unwrap()[0].manifest, "");
    }

    #[test]
    fn test_update_replaces_matching_version() {
        let mut store = MemoryStore::new();
        store.create(ReleaseRecord::new("app", "default", 1)).unwrap();

        let mut updated = ReleaseRecord::new("app", "default", 1);
        updated.manifest = "---\nkind: Service\n".into();
        updated.set_status(Status::Deployed, "patched");
        store.update(updated.clone()).unwrap();

        assert_eq!(store.list("app").unwrap(), vec![updated]);
    }

    #[test]
    fn test_update_missing_version_is_not_found() {
        let mut store = MemoryStore::new();
        store.create(ReleaseRecord::new("app", "default", 1)).unwrap();
        let result = store.update(ReleaseRecord::new("app", "default", 9));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }
}
