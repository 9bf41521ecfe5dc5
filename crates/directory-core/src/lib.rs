//! # Directory Core Crate
//!
//! Shared domain types for the marketplace directory pages (escorts,
//! creators, livecams).
//!
//! ## Main Components
//!
//! - **types**: `FilterState`, `ActiveFilterChip`, `CandidateRecord`, `RankingSignal`
//! - **catalog**: Load listings and signals from JSON files
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use directory_core::{Catalog, FilterState};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("fixtures/escorts"))?;
//! let state = FilterState::default();
//!
//! println!("{} listings, filters default: {}", catalog.len(), state.is_default());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result, UnknownVariant};
pub use catalog::Catalog;
pub use types::{
    // Type aliases
    ListingId,
    Range,
    // Core types
    FilterState,
    ActiveFilterChip,
    CandidateRecord,
    RankingSignal,
    // Enums
    DirectoryKind,
    ServiceType,
    ServiceTypeFilter,
    SortBy,
    // Bounds
    AGE_CEILING,
    AGE_FLOOR,
    DEFAULT_AGE_RANGE,
    DEFAULT_PRICE_RANGE,
    PRICE_CEILING,
    PRICE_FLOOR,
    RATING_CEILING,
};
