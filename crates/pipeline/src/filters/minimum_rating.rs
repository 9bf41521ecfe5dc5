//! Filter to ensure a minimum star rating.

use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};

/// Removes listings rated below `state.rating_min`.
///
/// A minimum of 0 keeps everything, including unrated listings.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if state.rating_min <= 0.0 {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| c.rating >= state.rating_min)
            .collect())
    }
}
