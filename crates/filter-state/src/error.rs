//! Error types for the filter-state crate.
//!
//! These never reach the UI: `FilterPersistence::load`/`save` log them and
//! fall back to defaults. The `try_*` variants hand them to callers that
//! want to inspect the failure.

use thiserror::Error;

/// Failures of the underlying key-value storage
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O error from file-backed storage
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the value would exceed the storage quota
    #[error("Storage quota exceeded: need {needed} bytes, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Storage cannot be used at all (e.g. disabled, poisoned lock)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures while saving or loading filter state
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored value is not valid JSON or not a FilterState
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored value was written by a different schema version
    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersion { found: u32, expected: u32 },
}

/// Convenience type alias for persistence Results
pub type Result<T> = std::result::Result<T, PersistenceError>;
