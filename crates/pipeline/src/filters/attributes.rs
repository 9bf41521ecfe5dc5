//! Multi-select filters: genders, orientations and services.
//!
//! Genders and orientations are any-of: a listing passes when its value is
//! one of the selected ones. Services are all-of: a listing must offer every
//! selected service. An empty selection passes everything.

use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};
use std::collections::BTreeSet;

fn selected(set: &BTreeSet<String>, value: &str) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(value))
}

/// Keeps listings whose gender is one of `selected_genders`.
pub struct GenderFilter;

impl Filter for GenderFilter {
    fn name(&self) -> &str {
        "GenderFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if state.selected_genders.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| selected(&state.selected_genders, &c.gender))
            .collect())
    }
}

/// Keeps listings whose orientation is one of `selected_orientations`.
pub struct OrientationFilter;

impl Filter for OrientationFilter {
    fn name(&self) -> &str {
        "OrientationFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if state.selected_orientations.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| selected(&state.selected_orientations, &c.orientation))
            .collect())
    }
}

/// Keeps listings offering every service in `selected_services`.
pub struct ServicesFilter;

impl Filter for ServicesFilter {
    fn name(&self) -> &str {
        "ServicesFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        if state.selected_services.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|c| {
                state
                    .selected_services
                    .iter()
                    .all(|wanted| c.services.iter().any(|s| s.eq_ignore_ascii_case(wanted)))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, listing};

    #[test]
    fn test_gender_any_of() {
        let a = listing("a");
        let mut b = listing("b");
        b.gender = "trans".to_string();
        let mut c = listing("c");
        c.gender = "male".to_string();

        let mut state = FilterState::default();
        state.selected_genders.insert("Female".to_string());
        state.selected_genders.insert("trans".to_string());

        let filtered = GenderFilter.apply(vec![a, b, c], &state).unwrap();
        assert_eq!(ids(&filtered), vec!["a", "b"]);
    }

    #[test]
    fn test_orientation_filter() {
        let a = listing("a");
        let mut b = listing("b");
        b.orientation = "lesbian".to_string();

        let mut state = FilterState::default();
        state.selected_orientations.insert("lesbian".to_string());

        let filtered = OrientationFilter.apply(vec![a, b], &state).unwrap();
        assert_eq!(ids(&filtered), vec!["b"]);
    }

    #[test]
    fn test_services_all_of() {
        let mut both = listing("both");
        both.services = vec!["dinner".to_string(), "travel".to_string()];
        let mut one = listing("one");
        one.services = vec!["dinner".to_string()];

        let mut state = FilterState::default();
        state.selected_services.insert("dinner".to_string());
        state.selected_services.insert("travel".to_string());

        let filtered = ServicesFilter.apply(vec![both, one], &state).unwrap();
        assert_eq!(ids(&filtered), vec!["both"]);
    }
}
