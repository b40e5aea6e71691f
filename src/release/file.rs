//! File-backed release store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::record::ReleaseRecord;
use super::store::{ReleaseStore, StoreError};

/// FileStore persists each release record as one YAML file under a root
/// directory, named `<release>.v<version>.yaml`.
///
/// A local driver for running the engine without a cluster-backed store; the
/// record files are plain serde_yaml serializations of [`ReleaseRecord`].
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(FileStore { root })
    }

    fn record_path(&self, name: &str, version: u32) -> PathBuf {
        self.root.join(format!("{}.v{}.yaml", name, version))
    }

    fn read_record(path: &Path) -> Result<ReleaseRecord, StoreError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn write_record(&self, record: &ReleaseRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.name, record.version);
        let content = serde_yaml::to_string(record)?;
        debug!(path = %path.display(), "writing release record");
        fs::write(path, content)?;
        Ok(())
    }
}

impl ReleaseStore for FileStore {
    fn list(&self, name: &str) -> Result<Vec<ReleaseRecord>, StoreError> {
        let prefix = format!("{}.v", name);
        let mut records = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !file_name.starts_with(&prefix) || !file_name.ends_with(".yaml") {
                continue;
            }
            let record = Self::read_record(&entry.path())?;
            // Prefix matching alone is ambiguous for names like "app" vs
            // "app.v2"; the record itself is authoritative.
            if record.name == name {
                records.push(record);
            }
        }

        if records.is_empty() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        records.sort_by_key(|r| r.version);
        Ok(records)
    }

    fn create(&mut self, record: ReleaseRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.name, record.version);
        if path.exists() {
            return Err(StoreError::AlreadyExists(record.name));
        }
        self.write_record(&record)
    }

    fn update(&mut self, record: ReleaseRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.name, record.version);
        if !path.exists() {
            return Err(StoreError::NotFound(record.name));
        }
        self.write_record(&record)
    }
}
