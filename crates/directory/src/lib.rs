//! Directory crate: one directory page's filter state, persistence and
//! listing pipeline behind a single `DirectoryView`.
//!
//! State is injected (`DirectoryConfig`, `FilterPersistence`) rather than
//! read from globals, so each view can be built and tested on its own.

pub mod config;
pub mod view;

pub use config::{DirectoryConfig, DEFAULT_PAGE_SIZE};
pub use view::{DirectoryView, ListingPage};
