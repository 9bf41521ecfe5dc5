//! # Filter State Crate
//!
//! Client-side state for the directory filter form.
//!
//! ## Components
//!
//! ### FilterStore
//! Owns one `FilterState`, exposes a getter and a setter/toggle per
//! dimension, clamps invalid input instead of rejecting it, and notifies
//! subscribers synchronously after every mutation.
//!
//! ### Active-filter projection
//! `chips::project` maps a state to display chips in a fixed order;
//! `chips::active_filter_count` is its length.
//!
//! ### FilterPersistence
//! Round-trips a state through a `StorageBackend` under a versioned JSON
//! envelope. Never fails toward the caller: anything unusable loads as
//! defaults.
//!
//! ## Example Usage
//!
//! ```ignore
//! use filter_state::{FilterPersistence, FilterStore, MemoryStorage};
//! use directory_core::DirectoryKind;
//! use std::sync::Arc;
//!
//! let persistence = FilterPersistence::for_directory(Arc::new(MemoryStorage::new()), DirectoryKind::Escorts);
//! let mut store = FilterStore::with_state(persistence.load());
//!
//! let shim = persistence.clone();
//! store.subscribe(move |state| shim.save(state));
//!
//! store.toggle_gender("female");
//! assert_eq!(store.active_filter_count(), 1);
//! ```

pub mod chips;
pub mod error;
pub mod persistence;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use chips::{active_filter_count, project};
pub use error::{PersistenceError, StorageError};
pub use persistence::{FilterPersistence, DEFAULT_STORAGE_KEY, SCHEMA_VERSION};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{FilterStore, Subscriber, SubscriptionId};
