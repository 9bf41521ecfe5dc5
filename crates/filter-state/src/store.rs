//! The filter state store.
//!
//! Holds one `FilterState` and exposes a getter and a setter (or toggle) per
//! dimension. Setters never fail: out-of-range input is clamped to the
//! nearest valid bound. Every mutation notifies subscribers synchronously,
//! in subscription order, with the post-mutation state.

use crate::chips;
use directory_core::{ActiveFilterChip, FilterState, Range, ServiceTypeFilter, SortBy};
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

/// Callback invoked after every mutation.
pub type Subscriber = Box<dyn FnMut(&FilterState) + Send>;

/// Handle returned by `FilterStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the filter state of a single directory view.
pub struct FilterStore {
    state: FilterState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl FilterStore {
    /// Create a store holding the default state.
    pub fn new() -> Self {
        Self::with_state(FilterState::default())
    }

    /// Create a store from an existing state (e.g. one loaded from storage).
    pub fn with_state(state: FilterState) -> Self {
        Self {
            state: state.normalized(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // Getters

    /// The whole state, for serialization or projection
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn location(&self) -> &str {
        &self.state.location
    }

    pub fn price_range(&self) -> Range {
        self.state.price_range
    }

    pub fn age_range(&self) -> Range {
        self.state.age_range
    }

    pub fn verified_only(&self) -> bool {
        self.state.verified_only
    }

    pub fn available_now(&self) -> bool {
        self.state.available_now
    }

    pub fn rating_min(&self) -> f32 {
        self.state.rating_min
    }

    pub fn selected_services(&self) -> &BTreeSet<String> {
        &self.state.selected_services
    }

    pub fn selected_genders(&self) -> &BTreeSet<String> {
        &self.state.selected_genders
    }

    pub fn selected_orientations(&self) -> &BTreeSet<String> {
        &self.state.selected_orientations
    }

    pub fn service_type_filter(&self) -> ServiceTypeFilter {
        self.state.service_type_filter
    }

    pub fn sort_by(&self) -> SortBy {
        self.state.sort_by
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    /// Chips for every non-default dimension.
    pub fn active_filters(&self) -> Vec<ActiveFilterChip> {
        chips::project(&self.state)
    }

    pub fn active_filter_count(&self) -> usize {
        chips::active_filter_count(&self.state)
    }

    // Setters
    //
    // Filter dimensions send the listing back to page 1; `sort_by` and
    // `current_page` keep the page as-is.

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update_filter(|s| s.search_query = query);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        self.update_filter(|s| s.location = location);
    }

    /// Set the price range. Bounds are clamped into the slider range and
    /// an inverted range becomes `(lo, lo)`.
    pub fn set_price_range(&mut self, (lo, hi): (i64, i64)) {
        let range = FilterState::clamp_price_range(lo, hi);
        self.update_filter(|s| s.price_range = range);
    }

    /// Set the age range with the same clamping policy as prices.
    pub fn set_age_range(&mut self, (lo, hi): (i64, i64)) {
        let range = FilterState::clamp_age_range(lo, hi);
        self.update_filter(|s| s.age_range = range);
    }

    pub fn set_verified_only(&mut self, verified_only: bool) {
        self.update_filter(|s| s.verified_only = verified_only);
    }

    pub fn set_available_now(&mut self, available_now: bool) {
        self.update_filter(|s| s.available_now = available_now);
    }

    pub fn set_rating_min(&mut self, rating: f32) {
        let rating = FilterState::clamp_rating(rating);
        self.update_filter(|s| s.rating_min = rating);
    }

    /// Select a service type. Selecting the active one again returns to `Any`.
    pub fn set_service_type_filter(&mut self, filter: ServiceTypeFilter) {
        self.update_filter(|s| {
            s.service_type_filter = if s.service_type_filter == filter {
                ServiceTypeFilter::Any
            } else {
                filter
            };
        });
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.mutate(|s| s.sort_by = sort_by);
    }

    pub fn set_current_page(&mut self, page: i64) {
        let page = FilterState::clamp_page(page);
        self.mutate(|s| s.current_page = page);
    }

    // Toggles: insert when absent, remove when present

    pub fn toggle_service(&mut self, service: impl Into<String>) {
        let service = service.into();
        self.update_filter(|s| toggle(&mut s.selected_services, service));
    }

    pub fn toggle_gender(&mut self, gender: impl Into<String>) {
        let gender = gender.into();
        self.update_filter(|s| toggle(&mut s.selected_genders, gender));
    }

    pub fn toggle_orientation(&mut self, orientation: impl Into<String>) {
        let orientation = orientation.into();
        self.update_filter(|s| toggle(&mut s.selected_orientations, orientation));
    }

    /// Reset every dimension to its default.
    pub fn clear_filters(&mut self) {
        self.mutate(|s| *s = FilterState::default());
    }

    /// Install a whole state, normalizing it first.
    pub fn replace(&mut self, state: FilterState) {
        let state = state.normalized();
        self.mutate(|s| *s = state);
    }

    // Subscriptions

    /// Register a callback run after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&FilterState) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn update_filter(&mut self, apply: impl FnOnce(&mut FilterState)) {
        self.mutate(|s| {
            apply(s);
            s.current_page = 1;
        });
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut FilterState)) {
        apply(&mut self.state);
        trace!(
            active_filters = chips::active_filter_count(&self.state),
            "filter state changed"
        );
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
