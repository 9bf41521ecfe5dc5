//! Persistence shim for filter state.
//!
//! Stored layout under a fixed key:
//!
//! ```json
//! { "version": 1, "state": { "searchQuery": "", "priceRange": [0, 1000], ... } }
//! ```
//!
//! `save` is fire-and-forget and `load` never fails: storage errors,
//! corrupt JSON and version mismatches are logged and the caller gets
//! defaults. The in-memory store stays authoritative either way.

use crate::error::{PersistenceError, Result};
use crate::storage::StorageBackend;
use directory_core::{DirectoryKind, FilterState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Version written into every stored envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Key used when no directory is specified.
pub const DEFAULT_STORAGE_KEY: &str = "directory-filters";

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    state: &'a FilterState,
}

#[derive(Deserialize)]
struct StoredEnvelope {
    version: u32,
    state: serde_json::Value,
}

/// Saves and restores one `FilterState` under a fixed storage key.
#[derive(Clone)]
pub struct FilterPersistence {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl FilterPersistence {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Persistence for one directory page, keyed `directory-filters:<kind>`.
    pub fn for_directory(backend: Arc<dyn StorageBackend>, kind: DirectoryKind) -> Self {
        Self::new(backend, format!("{}:{}", DEFAULT_STORAGE_KEY, kind.as_str()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Save the state, logging and swallowing any failure.
    pub fn save(&self, state: &FilterState) {
        if let Err(e) = self.try_save(state) {
            warn!(key = %self.key, error = %e, "failed to persist filter state");
        }
    }

    /// Load the saved state, or defaults when nothing usable is stored.
    pub fn load(&self) -> FilterState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!(key = %self.key, "no persisted filter state, using defaults");
                FilterState::default()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding persisted filter state");
                FilterState::default()
            }
        }
    }

    /// Remove the saved state, logging and swallowing any failure.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear persisted filter state");
        }
    }

    /// Save the state and report failures.
    pub fn try_save(&self, state: &FilterState) -> Result<()> {
        let json = serde_json::to_string(&Envelope {
            version: SCHEMA_VERSION,
            state,
        })?;
        self.backend.set(&self.key, &json)?;
        Ok(())
    }

    /// Load the saved state and report failures. `Ok(None)` when no value is stored.
    ///
    /// Loaded states are normalized, so a hand-edited value cannot break the
    /// range invariants.
    pub fn try_load(&self) -> Result<Option<FilterState>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let envelope: StoredEnvelope = serde_json::from_str(&raw)?;
        if envelope.version != SCHEMA_VERSION {
            return Err(PersistenceError::SchemaVersion {
                found: envelope.version,
                expected: SCHEMA_VERSION,
            });
        }
        let state: FilterState = serde_json::from_value(envelope.state)?;
        Ok(Some(state.normalized()))
    }
}

impl fmt::Debug for FilterPersistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPersistence").field("key", &self.key).finish()
    }
}
