//! Free-text filters: the search box and the location field.

use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};

/// Keeps listings whose name, region, tags or services contain the query.
///
/// Matching is a case-insensitive substring test on the trimmed query.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        let query = state.search_query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query)
                    || c.region.to_lowercase().contains(&query)
                    || c.tags.iter().any(|t| t.to_lowercase().contains(&query))
                    || c.services.iter().any(|s| s.to_lowercase().contains(&query))
            })
            .collect())
    }
}

/// Keeps listings whose region contains the location (case-insensitive).
pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        let location = state.location.trim().to_lowercase();
        if location.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| c.region.to_lowercase().contains(&location))
            .collect())
    }
}
