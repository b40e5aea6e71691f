//! Crate-level error types.

use thiserror::Error;

use crate::adopt::DiscoveryError;
use crate::release::StoreError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error represents a failure of one patch or adopt invocation.
///
/// Lookup failures are fatal for the invocation; they are never collapsed
/// into the "nothing to patch" success path. Serialization failures abort
/// the whole orchestration so a partially patched manifest is never
/// persisted.
#[derive(Debug, Error)]
pub enum Error {
    #[error("release '{0}' not found")]
    ReleaseNotFound(String),

    #[error("revision {revision} of release '{name}' not found")]
    RevisionNotFound { name: String, revision: u32 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to serialize manifest document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("release store: {0}")]
    Store(#[from] StoreError),

    #[error("resource discovery: {0}")]
    Discovery(#[from] DiscoveryError),
}

impl Error {
    /// Creates an input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}
