//! Filter implementations for the listing pipeline.
//!
//! One filter per FilterState dimension; each passes everything through
//! while its dimension is at the default.

pub mod attributes;
pub mod flags;
pub mod minimum_rating;
pub mod ranges;
pub mod search;
pub mod service_type;

// Re-export for convenience
pub use attributes::{GenderFilter, OrientationFilter, ServicesFilter};
pub use flags::{AvailableNowFilter, VerifiedFilter};
pub use minimum_rating::MinimumRatingFilter;
pub use ranges::{AgeRangeFilter, PriceRangeFilter};
pub use search::{LocationFilter, SearchFilter};
pub use service_type::ServiceTypeMatchFilter;
