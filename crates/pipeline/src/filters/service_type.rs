//! Filter on how a listing delivers its services.

use crate::traits::Filter;
use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};

/// Applies `state.service_type_filter` to each listing's service type.
///
/// See `ServiceTypeFilter::accepts` for the matching table.
pub struct ServiceTypeMatchFilter;

impl Filter for ServiceTypeMatchFilter {
    fn name(&self) -> &str {
        "ServiceTypeMatchFilter"
    }

    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>> {
        let filter = state.service_type_filter;
        Ok(candidates
            .into_iter()
            .filter(|c| filter.accepts(c.service_type))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ids, listing};
    use directory_core::{ServiceType, ServiceTypeFilter};

    fn listings() -> Vec<CandidateRecord> {
        let in_person = listing("in-person");
        let mut virtual_only = listing("virtual");
        virtual_only.service_type = ServiceType::Virtual;
        let mut both = listing("both");
        both.service_type = ServiceType::Both;
        vec![in_person, virtual_only, both]
    }

    fn run(filter: ServiceTypeFilter) -> Vec<String> {
        let state = FilterState {
            service_type_filter: filter,
            ..FilterState::default()
        };
        let filtered = ServiceTypeMatchFilter.apply(listings(), &state).unwrap();
        ids(&filtered).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_service_type_matching() {
        assert_eq!(run(ServiceTypeFilter::Any), vec!["in-person", "virtual", "both"]);
        assert_eq!(run(ServiceTypeFilter::Virtual), vec!["virtual", "both"]);
        assert_eq!(run(ServiceTypeFilter::InPerson), vec!["in-person", "both"]);
        assert_eq!(run(ServiceTypeFilter::Both), vec!["both"]);
    }
}
