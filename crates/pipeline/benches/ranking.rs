//! Benchmarks for filtering and ranking
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic listing of 5,000 records so no fixture files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use directory_core::{CandidateRecord, FilterState, RankingSignal, ServiceType};
use pipeline::{rank, FilterPipeline, RankOptions};
use std::collections::HashMap;

const REGIONS: [&str; 4] = ["Berlin", "Paris", "London", "Madrid"];
const TAGS: [&str; 5] = ["gfe", "travel", "fitness", "cosplay", "dinner"];

fn synthetic_listing(n: usize) -> (Vec<CandidateRecord>, HashMap<String, RankingSignal>) {
    let mut listings = Vec::with_capacity(n);
    let mut signals = HashMap::new();
    for i in 0..n {
        let id = format!("listing-{:05}", i);
        listings.push(CandidateRecord {
            id: id.clone(),
            name: format!("Listing {}", i),
            region: REGIONS[i % REGIONS.len()].to_string(),
            price: (50 + (i * 37) % 900) as u32,
            age: (18 + i % 40) as u32,
            gender: (if i % 3 == 0 { "male" } else { "female" }).to_string(),
            orientation: "straight".to_string(),
            services: vec![TAGS[i % TAGS.len()].to_string()],
            service_type: match i % 3 {
                0 => ServiceType::InPerson,
                1 => ServiceType::Virtual,
                _ => ServiceType::Both,
            },
            verified: i % 7 == 0,
            premium: i % 11 == 0,
            available_now: i % 2 == 0,
            rating: (i % 50) as f32 / 10.0,
            tags: vec![TAGS[i % TAGS.len()].to_string(), TAGS[(i + 2) % TAGS.len()].to_string()],
            created_at: 1_700_000_000 + i as i64,
        });
        if i % 4 != 0 {
            signals.insert(
                id,
                RankingSignal {
                    last_active_at: 1_700_000_000 + (i as i64 * 613) % 86_400,
                    view_count: (i * 13 % 1000) as u64,
                },
            );
        }
    }
    (listings, signals)
}

fn bench_rank(c: &mut Criterion) {
    let (listings, signals) = synthetic_listing(5_000);
    let opts = RankOptions::new().with_region("Berlin").with_tags(["gfe", "travel"]);

    c.bench_function("rank_5000", |b| {
        b.iter(|| {
            let ranked = rank(black_box(&listings), black_box(&signals), black_box(&opts));
            black_box(ranked)
        })
    });
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let (listings, _) = synthetic_listing(5_000);
    let pipeline = FilterPipeline::standard();
    let mut state = FilterState {
        price_range: (100, 600),
        rating_min: 3.0,
        ..FilterState::default()
    };
    state.selected_genders.insert("female".to_string());

    c.bench_function("filter_pipeline_5000", |b| {
        b.iter(|| {
            let filtered = pipeline.apply(black_box(listings.clone()), black_box(&state)).unwrap();
            black_box(filtered)
        })
    });
}

criterion_group!(benches, bench_rank, bench_filter_pipeline);
criterion_main!(benches);
