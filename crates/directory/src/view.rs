//! # Directory View
//!
//! Wires the pieces of one directory page together:
//! 1. Restore the filter state from the injected persistence
//! 2. Subscribe the persistence shim so every mutation is saved
//! 3. Expose the store for form controls and the chips for rendering
//! 4. Filter, order and paginate a listing handed in by the data layer
//!
//! The view owns exactly one `FilterStore`. Two views showing the same
//! directory share state only through storage (`sync_from_storage`), last
//! write wins.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use directory_core::{ActiveFilterChip, CandidateRecord, FilterState, ListingId, RankingSignal};
use filter_state::{FilterPersistence, FilterStore, MemoryStorage};
use pipeline::{sort_candidates, FilterPipeline};

use crate::config::DirectoryConfig;

/// One page of an ordered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Ids on this page, in display order
    pub ids: Vec<ListingId>,
    /// Listings passing the filters, across all pages
    pub total: usize,
    /// Page shown, clamped into `1..=total_pages`
    pub page: u32,
    /// Always at least 1, even for an empty listing
    pub total_pages: u32,
}

/// State and behavior of a single directory page.
pub struct DirectoryView {
    config: DirectoryConfig,
    store: FilterStore,
    persistence: FilterPersistence,
    pipeline: FilterPipeline,
}

impl DirectoryView {
    /// Create a view, restoring its filters from `persistence`.
    pub fn new(config: DirectoryConfig, persistence: FilterPersistence) -> Self {
        let mut store = FilterStore::with_state(persistence.load());
        let shim = persistence.clone();
        store.subscribe(move |state| shim.save(state));

        info!(
            directory = config.kind.as_str(),
            key = persistence.key(),
            active_filters = store.active_filter_count(),
            "Directory view ready"
        );

        Self {
            config,
            store,
            persistence,
            pipeline: FilterPipeline::standard(),
        }
    }

    /// A view whose filters live only in memory.
    pub fn ephemeral(config: DirectoryConfig) -> Self {
        let persistence = FilterPersistence::for_directory(Arc::new(MemoryStorage::new()), config.kind);
        Self::new(config, persistence)
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// The store form controls bind to (read side).
    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    /// The store form controls bind to (write side). Every mutation is
    /// persisted through the subscription installed in `new`.
    pub fn store_mut(&mut self) -> &mut FilterStore {
        &mut self.store
    }

    pub fn active_filters(&self) -> Vec<ActiveFilterChip> {
        self.store.active_filters()
    }

    pub fn active_filter_count(&self) -> usize {
        self.store.active_filter_count()
    }

    /// Re-read the persisted state, picking up writes from other views.
    ///
    /// A missing value means another view reset the directory, so the
    /// store is reset too. Unreadable storage leaves the in-memory state
    /// untouched.
    pub fn sync_from_storage(&mut self) {
        let state = match self.persistence.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => FilterState::default(),
            Err(e) => {
                warn!(
                    key = self.persistence.key(),
                    error = %e,
                    "Keeping in-memory filters, persisted state unreadable"
                );
                return;
            }
        };
        if &state != self.store.state() {
            debug!(key = self.persistence.key(), "Filter state changed in storage");
            self.store.replace(state);
        }
    }

    /// Reset every filter and drop the persisted copy.
    pub fn reset(&mut self) {
        self.store.clear_filters();
        self.persistence.clear();
    }

    /// Filter, order and paginate a listing.
    ///
    /// ## Algorithm
    /// 1. Apply the standard filter pipeline with the current state
    /// 2. Order by the selected `SortBy` (featured uses the ranking adapter
    ///    with the configured region, tags and weights)
    /// 3. Slice out the current page; an out-of-range page shows the last one
    pub fn listing(
        &self,
        candidates: &[CandidateRecord],
        signals: &HashMap<ListingId, RankingSignal>,
    ) -> Result<ListingPage> {
        let state = self.store.state();
        let filtered = self
            .pipeline
            .apply(candidates.to_vec(), state)
            .context("Failed to filter listing")?;
        let ordered = sort_candidates(&filtered, signals, state.sort_by, &self.config.rank_options());

        let total = ordered.len();
        let page_size = self.config.page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1) as u32;
        let page = state.current_page.clamp(1, total_pages);
        let start = (page as usize - 1) * page_size;
        let ids: Vec<ListingId> = ordered.into_iter().skip(start).take(page_size).collect();

        debug!(
            "Listing page {}/{}: {} of {} listings (input {})",
            page,
            total_pages,
            ids.len(),
            total,
            candidates.len()
        );

        Ok(ListingPage {
            ids,
            total,
            page,
            total_pages,
        })
    }
}
