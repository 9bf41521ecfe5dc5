//! Visibility/ranking adapter.
//!
//! Decides the display order of a listing. This is a pure sort over the
//! records and signals it is handed: it knows nothing about payments,
//! auctions or bidding, reads no clock and uses no randomness.
//!
//! ## Ordering
//! 1. Region tier: listings in `opts.region` (case-insensitive) come first
//! 2. Signal tier: listings with a `RankingSignal` come before those without
//! 3. Weighted score, highest first:
//!    `boost * [verified || premium] + recency * r + tag * overlap`
//!    where `r = 1 / (1 + hours behind the most recent signal)` and
//!    `overlap` counts distinct `opts.tags` found in the listing's tags
//! 4. Listing id, ascending
//!
//! `opts.limit` truncates after sorting, so a limited result is always a
//! prefix of the unlimited one.

use directory_core::{CandidateRecord, ListingId, RankingSignal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Relative weights of the score components.
///
/// The defaults keep the boost above any recency or tag contribution a
/// realistic listing can reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub boost: f64,
    pub recency: f64,
    pub tag: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            boost: 100.0,
            recency: 10.0,
            tag: 1.0,
        }
    }
}

/// Options for a ranking call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankOptions {
    /// Preferred region; listings in it form the top tier
    pub region: Option<String>,
    /// Tags the viewer is interested in
    pub tags: Vec<String>,
    /// Maximum number of ids returned
    pub limit: Option<usize>,
    pub weights: RankingWeights,
}

impl RankOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_weights(mut self, weights: RankingWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Sort key computed once per listing.
struct RankKey<'a> {
    id: &'a str,
    in_region: bool,
    has_signal: bool,
    score: f64,
}

impl RankKey<'_> {
    fn display_order(&self, other: &Self) -> Ordering {
        other
            .in_region
            .cmp(&self.in_region)
            .then_with(|| other.has_signal.cmp(&self.has_signal))
            .then_with(|| other.score.total_cmp(&self.score))
            .then_with(|| self.id.cmp(other.id))
    }
}

/// Rank listings and return their ids in display order.
#[instrument(skip_all, fields(candidates = candidates.len(), region = ?opts.region))]
pub fn rank(
    candidates: &[CandidateRecord],
    signals: &HashMap<ListingId, RankingSignal>,
    opts: &RankOptions,
) -> Vec<ListingId> {
    let region = opts
        .region
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    let wanted_tags: HashSet<String> = opts.tags.iter().map(|t| t.to_lowercase()).collect();
    let newest = signals.values().map(|s| s.last_active_at).max();

    let mut keys: Vec<RankKey> = candidates
        .par_iter()
        .map(|candidate| {
            let signal = signals.get(&candidate.id);
            let recency = match (signal, newest) {
                (Some(s), Some(newest)) => recency_score(s.last_active_at, newest),
                _ => 0.0,
            };
            let overlap = tag_overlap(&candidate.tags, &wanted_tags) as f64;
            let boost = if candidate.is_boosted() { 1.0 } else { 0.0 };

            RankKey {
                id: &candidate.id,
                in_region: region.is_some_and(|r| candidate.region.eq_ignore_ascii_case(r)),
                has_signal: signal.is_some(),
                score: opts.weights.boost * boost
                    + opts.weights.recency * recency
                    + opts.weights.tag * overlap,
            }
        })
        .collect();

    keys.sort_by(|a, b| a.display_order(b));
    if let Some(limit) = opts.limit {
        keys.truncate(limit);
    }

    debug!("Ranked {} listings", keys.len());
    keys.into_iter().map(|k| k.id.to_string()).collect()
}

/// `1 / (1 + hours)` between `last_active_at` and the newest signal.
fn recency_score(last_active_at: i64, newest: i64) -> f64 {
    let hours = newest.saturating_sub(last_active_at).max(0) as f64 / 3600.0;
    1.0 / (1.0 + hours)
}

fn tag_overlap(tags: &[String], wanted: &HashSet<String>) -> usize {
    if wanted.is_empty() {
        return 0;
    }
    let own: HashSet<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    own.intersection(wanted).count()
}
