//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::*;
use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(VerifiedFilter)
///     .add_filter(PriceRangeFilter);
///
/// let visible = pipeline.apply(listings, store.state())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline used by every directory page: one filter per
    /// FilterState dimension, cheapest checks first.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(VerifiedFilter)
            .add_filter(AvailableNowFilter)
            .add_filter(ServiceTypeMatchFilter)
            .add_filter(PriceRangeFilter)
            .add_filter(AgeRangeFilter)
            .add_filter(MinimumRatingFilter)
            .add_filter(GenderFilter)
            .add_filter(OrientationFilter)
            .add_filter(ServicesFilter)
            .add_filter(LocationFilter)
            .add_filter(SearchFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with the input listings
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set, in input order
    pub fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, listing};

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let mut state = FilterState::default();
        state.verified_only = true;

        let filtered = pipeline
            .apply(vec![listing("a"), listing("b")], &state)
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let mut verified = listing("a");
        verified.verified = true;
        let state = FilterState {
            verified_only: true,
            ..FilterState::default()
        };

        let pipeline = FilterPipeline::new().add_filter(VerifiedFilter);
        let filtered = pipeline.apply(vec![verified, listing("b")], &state).unwrap();

        assert_eq!(ids(&filtered), vec!["a"]);
    }

    #[test]
    fn test_standard_pipeline_default_state_passes_all() {
        let pipeline = FilterPipeline::standard();
        assert_eq!(pipeline.filter_names().len(), 11);

        let filtered = pipeline
            .apply(vec![listing("a"), listing("b"), listing("c")], &FilterState::default())
            .unwrap();
        assert_eq!(ids(&filtered), vec!["a", "b", "c"]);
    }
}
