//! Integration tests for the pipeline.
//!
//! These tests verify that the filter pipeline and the ranking adapter
//! work together on a realistic directory listing.

use directory_core::{CandidateRecord, FilterState, RankingSignal, ServiceType, ServiceTypeFilter, SortBy};
use pipeline::{rank, sort_candidates, FilterPipeline, RankOptions};
use std::collections::HashMap;

fn listing(id: &str, region: &str, price: u32, service_type: ServiceType) -> CandidateRecord {
    CandidateRecord {
        id: id.to_string(),
        name: format!("Listing {}", id),
        region: region.to_string(),
        price,
        age: 26,
        gender: "female".to_string(),
        orientation: "straight".to_string(),
        services: vec!["dinner".to_string()],
        service_type,
        verified: false,
        premium: false,
        available_now: true,
        rating: 4.2,
        tags: vec![],
        created_at: 1_700_000_000,
    }
}

fn create_test_setup() -> (Vec<CandidateRecord>, HashMap<String, RankingSignal>) {
    let mut ana = listing("ana", "Berlin", 250, ServiceType::InPerson);
    ana.verified = true;
    ana.tags = vec!["gfe".to_string()];

    let mut bea = listing("bea", "Berlin", 180, ServiceType::Both);
    bea.tags = vec!["gfe".to_string(), "travel".to_string()];

    let mut cleo = listing("cleo", "Hamburg", 120, ServiceType::Virtual);
    cleo.premium = true;

    let mut dana = listing("dana", "Berlin", 900, ServiceType::InPerson);
    dana.rating = 3.1;

    let mut eve = listing("eve", "Munich", 200, ServiceType::InPerson);
    eve.gender = "trans".to_string();

    let mut signals = HashMap::new();
    signals.insert("ana".to_string(), RankingSignal { last_active_at: 1_700_010_000, view_count: 40 });
    signals.insert("bea".to_string(), RankingSignal { last_active_at: 1_700_020_000, view_count: 90 });
    signals.insert("cleo".to_string(), RankingSignal { last_active_at: 1_700_000_000, view_count: 5 });
    signals.insert("dana".to_string(), RankingSignal { last_active_at: 1_700_015_000, view_count: 12 });

    (vec![ana, bea, cleo, dana, eve], signals)
}

fn ids(candidates: &[CandidateRecord]) -> Vec<&str> {
    candidates.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let (candidates, _) = create_test_setup();

    let mut state = FilterState {
        price_range: (100, 500),
        rating_min: 4.0,
        service_type_filter: ServiceTypeFilter::InPerson,
        ..FilterState::default()
    };
    state.selected_genders.insert("female".to_string());

    let filtered = FilterPipeline::standard().apply(candidates, &state).unwrap();

    // cleo is virtual-only, dana is too expensive and low rated, eve is excluded by gender
    assert_eq!(ids(&filtered), vec!["ana", "bea"]);
}

#[test]
fn test_filter_then_rank() {
    let (candidates, signals) = create_test_setup();
    let state = FilterState {
        location: "berlin".to_string(),
        ..FilterState::default()
    };

    let filtered = FilterPipeline::standard().apply(candidates, &state).unwrap();
    let ranked = rank(&filtered, &signals, &RankOptions::new().with_region("Berlin").with_tags(["travel"]));

    // ana is verified; bea is the most recent and matches the tag; dana trails
    assert_eq!(ranked, vec!["ana", "bea", "dana"]);
}

#[test]
fn test_ranking_is_deterministic() {
    let (candidates, signals) = create_test_setup();
    let opts = RankOptions::new().with_region("Berlin").with_tags(["gfe"]);

    let first = rank(&candidates, &signals, &opts);
    let second = rank(&candidates, &signals, &opts);
    assert_eq!(first, second);
}

#[test]
fn test_truncation_keeps_prefix() {
    let (candidates, signals) = create_test_setup();
    let opts = RankOptions::new().with_region("Berlin");

    let full = rank(&candidates, &signals, &opts);
    for k in 0..=candidates.len() + 1 {
        let limited = rank(&candidates, &signals, &opts.clone().with_limit(k));
        assert_eq!(limited, full[..k.min(full.len())].to_vec());
    }
}

#[test]
fn test_region_tier_then_signal_tier() {
    let (candidates, signals) = create_test_setup();
    let ranked = rank(&candidates, &signals, &RankOptions::new().with_region("Berlin"));

    // Berlin listings first, then the rest with signals before eve (no signal)
    assert_eq!(&ranked[..3], &["ana", "bea", "dana"]);
    assert_eq!(ranked.last().map(String::as_str), Some("eve"));
}

#[test]
fn test_sort_by_price_after_filtering() {
    let (candidates, signals) = create_test_setup();
    let filtered = FilterPipeline::standard()
        .apply(candidates, &FilterState::default())
        .unwrap();

    let ids = sort_candidates(&filtered, &signals, SortBy::PriceAsc, &RankOptions::new());
    assert_eq!(ids, vec!["cleo", "bea", "eve", "ana", "dana"]);
}
