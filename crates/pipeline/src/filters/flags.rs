//! Boolean filters: verified-only and available-now.

use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};

/// Keeps only verified listings while `verified_only` is on.
pub struct VerifiedFilter;

impl Filter for VerifiedFilter {
    fn name(&self) -> &str {
        "VerifiedFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if !state.verified_only {
            return Ok(candidates);
        }
        Ok(candidates.into_iter().filter(|c| c.verified).collect())
    }
}

/// Keeps only listings available right now while `available_now` is on.
pub struct AvailableNowFilter;

impl Filter for AvailableNowFilter {
    fn name(&self) -> &str {
        "AvailableNowFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if !state.available_now {
            return Ok(candidates);
        }
        Ok(candidates.into_iter().filter(|c| c.available_now).collect())
    }
}
