//! Pipeline for filtering and ordering directory listings.
//!
//! This crate provides:
//! - Filter trait and one implementation per FilterState dimension
//! - FilterPipeline for composing filters
//! - The visibility/ranking adapter (`rank`)
//! - `sort_candidates` for the orders selectable in the filter form
//!
//! ## Architecture
//! A directory page processes its listing in stages:
//! 1. Filters remove listings that do not match the filter form
//! 2. The remaining listings are ordered by the selected `SortBy`
//!    (the featured order is the ranking adapter)
//! 3. The caller paginates the ordered ids
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{rank, FilterPipeline, RankOptions};
//!
//! let visible = FilterPipeline::standard().apply(listings, store.state())?;
//! let order = rank(&visible, &signals, &RankOptions::new().with_region("Berlin").with_limit(24));
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod sort;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranking::{rank, RankOptions, RankingWeights};
pub use sort::sort_candidates;
