//! Display orders selectable from the filter form.
//!
//! `SortBy::Featured` hands the listing to the ranking adapter; every other
//! order is a plain key sort. All orders break ties by id ascending.

use crate::ranking::{rank, RankOptions};
use directory_core::{CandidateRecord, ListingId, RankingSignal, SortBy};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Order listings by `sort_by` and return their ids.
///
/// `opts` supplies the region and tags for the featured order; its limit
/// applies to every order.
pub fn sort_candidates(
    candidates: &[CandidateRecord],
    signals: &HashMap<ListingId, RankingSignal>,
    sort_by: SortBy,
    opts: &RankOptions,
) -> Vec<ListingId> {
    if sort_by == SortBy::Featured {
        return rank(candidates, signals, opts);
    }

    let mut sorted: Vec<&CandidateRecord> = candidates.iter().collect();
    sorted.sort_by(|a, b| {
        let primary = match sort_by {
            SortBy::Newest => b.created_at.cmp(&a.created_at),
            SortBy::PriceAsc => a.price.cmp(&b.price),
            SortBy::PriceDesc => b.price.cmp(&a.price),
            SortBy::Rating => b.rating.total_cmp(&a.rating),
            // handled by `rank` above
            SortBy::Featured => Ordering::Equal,
        };
        primary.then_with(|| a.id.cmp(&b.id))
    });
    if let Some(limit) = opts.limit {
        sorted.truncate(limit);
    }
    sorted.into_iter().map(|c| c.id.clone()).collect()
}
