//! Listing fixtures shared by the unit tests.

use directory_core::{CandidateRecord, ServiceType};

/// A plain, unboosted, in-person listing with mid-range attributes.
pub(crate) fn listing(id: &str) -> CandidateRecord {
    CandidateRecord {
        id: id.to_string(),
        name: format!("Listing {}", id),
        region: "Berlin".to_string(),
        price: 200,
        age: 28,
        gender: "female".to_string(),
        orientation: "straight".to_string(),
        services: vec![],
        service_type: ServiceType::InPerson,
        verified: false,
        premium: false,
        available_now: false,
        rating: 4.0,
        tags: vec![],
        created_at: 1_700_000_000,
    }
}

pub(crate) fn ids(candidates: &[CandidateRecord]) -> Vec<&str> {
    candidates.iter().map(|c| c.id.as_str()).collect()
}
