//! Active-filter projection.
//!
//! Turns a `FilterState` into the chips shown above a listing, one per
//! non-default dimension, always in the same order:
//! search, location, service type, verified, available, rating, price, age,
//! genders, orientations, services.

use directory_core::{ActiveFilterChip, FilterState, ServiceTypeFilter, DEFAULT_AGE_RANGE, DEFAULT_PRICE_RANGE};
use std::collections::BTreeSet;

/// Project a state into its active-filter chips. Pure; safe to call on every render.
pub fn project(state: &FilterState) -> Vec<ActiveFilterChip> {
    let mut chips = Vec::new();

    let query = state.search_query.trim();
    if !query.is_empty() {
        chips.push(ActiveFilterChip::new("searchQuery", "Search", Some(query.to_string())));
    }

    let location = state.location.trim();
    if !location.is_empty() {
        chips.push(ActiveFilterChip::new("location", "Location", Some(location.to_string())));
    }

    if state.service_type_filter != ServiceTypeFilter::Any {
        chips.push(ActiveFilterChip::new(
            "serviceTypeFilter",
            "Service type",
            Some(state.service_type_filter.as_str().to_string()),
        ));
    }

    if state.verified_only {
        chips.push(ActiveFilterChip::new("verifiedOnly", "Verified only", None));
    }

    if state.available_now {
        chips.push(ActiveFilterChip::new("availableNow", "Available now", None));
    }

    if state.rating_min > 0.0 {
        chips.push(ActiveFilterChip::new(
            "ratingMin",
            "Rating",
            Some(format!("{}★", state.rating_min)),
        ));
    }

    if state.price_range != DEFAULT_PRICE_RANGE {
        let (lo, hi) = state.price_range;
        chips.push(ActiveFilterChip::new("priceRange", "Price", Some(format!("${}-${}", lo, hi))));
    }

    if state.age_range != DEFAULT_AGE_RANGE {
        let (lo, hi) = state.age_range;
        chips.push(ActiveFilterChip::new("ageRange", "Age", Some(format!("{}-{}", lo, hi))));
    }

    push_selection(&mut chips, "selectedGenders", "Genders", &state.selected_genders);
    push_selection(&mut chips, "selectedOrientations", "Orientations", &state.selected_orientations);
    push_selection(&mut chips, "selectedServices", "Services", &state.selected_services);

    chips
}

/// Number of non-default dimensions; always equals `project(state).len()`.
pub fn active_filter_count(state: &FilterState) -> usize {
    project(state).len()
}

/// Multi-selects collapse to the single value, or "<n> selected".
fn push_selection(chips: &mut Vec<ActiveFilterChip>, key: &str, label: &str, values: &BTreeSet<String>) {
    let value = match values.len() {
        0 => return,
        1 => values.iter().next().cloned(),
        n => Some(format!("{} selected", n)),
    };
    chips.push(ActiveFilterChip::new(key, label, value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(chips: &[ActiveFilterChip]) -> Vec<&str> {
        chips.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_default_state_has_no_chips() {
        assert!(project(&FilterState::default()).is_empty());
    }

    #[test]
    fn test_single_gender_chip() {
        let mut state = FilterState::default();
        state.selected_genders.insert("female".to_string());

        let chips = project(&state);
        assert_eq!(
            chips,
            vec![ActiveFilterChip::new("selectedGenders", "Genders", Some("female".to_string()))]
        );
        assert_eq!(active_filter_count(&state), 1);
    }

    #[test]
    fn test_multi_select_collapses_to_count() {
        let mut state = FilterState::default();
        state.selected_services.insert("dinner".to_string());
        state.selected_services.insert("travel".to_string());
        state.selected_services.insert("overnight".to_string());

        let chips = project(&state);
        assert_eq!(chips[0].value.as_deref(), Some("3 selected"));
    }

    #[test]
    fn test_rating_and_price_formatting() {
        let state = FilterState {
            rating_min: 4.5,
            price_range: (100, 400),
            age_range: (25, 35),
            ..FilterState::default()
        };

        let chips = project(&state);
        assert_eq!(chips[0].value.as_deref(), Some("4.5★"));
        assert_eq!(chips[1].value.as_deref(), Some("$100-$400"));
        assert_eq!(chips[2].value.as_deref(), Some("25-35"));
    }

    #[test]
    fn test_whole_star_rating_has_no_decimal() {
        let state = FilterState {
            rating_min: 4.0,
            ..FilterState::default()
        };
        assert_eq!(project(&state)[0].value.as_deref(), Some("4★"));
    }

    #[test]
    fn test_fixed_chip_order() {
        let mut state = FilterState {
            search_query: "tall".to_string(),
            location: "Madrid".to_string(),
            price_range: (0, 500),
            age_range: (20, 60),
            verified_only: true,
            available_now: true,
            rating_min: 3.0,
            service_type_filter: ServiceTypeFilter::InPerson,
            ..FilterState::default()
        };
        state.selected_services.insert("dinner".to_string());
        state.selected_genders.insert("female".to_string());
        state.selected_orientations.insert("bisexual".to_string());

        assert_eq!(
            keys(&project(&state)),
            vec![
                "searchQuery",
                "location",
                "serviceTypeFilter",
                "verifiedOnly",
                "availableNow",
                "ratingMin",
                "priceRange",
                "ageRange",
                "selectedGenders",
                "selectedOrientations",
                "selectedServices",
            ]
        );
    }

    #[test]
    fn test_whitespace_query_is_default() {
        let state = FilterState {
            search_query: "   ".to_string(),
            ..FilterState::default()
        };
        assert_eq!(active_filter_count(&state), 0);
    }

    #[test]
    fn test_sort_and_page_never_produce_chips() {
        let state = FilterState {
            sort_by: directory_core::SortBy::Rating,
            current_page: 7,
            ..FilterState::default()
        };
        assert!(project(&state).is_empty());
    }
}
