//! The backing-store contract for release records.

use thiserror::Error;

use super::record::ReleaseRecord;

/// StoreError represents a failure of the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("release '{0}' not found")]
    NotFound(String),

    #[error("release '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to decode stored release: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// ReleaseStore persists release records, keyed by name and version.
///
/// `list` returns every record for a name, ascending by version, and reports
/// [`StoreError::NotFound`] for names the store has never seen, so an unknown
/// release is distinguishable from an I/O failure. `create` rejects a record
/// whose name and version already exist; `update` replaces the record with
/// the same name and version.
pub trait ReleaseStore {
    fn list(&self, name: &str) -> Result<Vec<ReleaseRecord>, StoreError>;

    fn create(&mut self, record: ReleaseRecord) -> Result<(), StoreError>;

    fn update(&mut self, record: ReleaseRecord) -> Result<(), StoreError>;
}
