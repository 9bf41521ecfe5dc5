//! Inclusive range filters for price and age.

use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState, Range, DEFAULT_AGE_RANGE, DEFAULT_PRICE_RANGE};

fn within((lo, hi): Range, value: u32) -> bool {
    value >= lo && value <= hi
}

/// Keeps listings priced inside `state.price_range`.
///
/// At the default range the slider sits at its bounds, so listings priced
/// above the ceiling are not hidden.
pub struct PriceRangeFilter;

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if state.price_range == DEFAULT_PRICE_RANGE {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| within(state.price_range, c.price))
            .collect())
    }
}

/// Keeps listings whose advertised age is inside `state.age_range`.
///
/// Like prices, the default range is not an active filter.
pub struct AgeRangeFilter;

impl Filter for AgeRangeFilter {
    fn name(&self) -> &str {
        "AgeRangeFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if state.age_range == DEFAULT_AGE_RANGE {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| within(state.age_range, c.age))
            .collect())
    }
}
