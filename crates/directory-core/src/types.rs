//! Core domain types for the directory listing pages.
//!
//! This module defines the data structures shared by every crate in the
//! workspace:
//! - `FilterState`: the filter dimensions a directory page binds its form to
//! - `ActiveFilterChip`: the display projection of a non-default dimension
//! - `CandidateRecord`: a listing (escort, creator, livecam) being filtered
//! - `RankingSignal`: per-call engagement inputs for the ranking adapter

use crate::error::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a listing. Ordering is byte-wise ascending.
pub type ListingId = String;

/// Inclusive `(lo, hi)` range.
pub type Range = (u32, u32);

// =============================================================================
// Bounds and Defaults
// =============================================================================

/// Lowest price the price slider can express.
pub const PRICE_FLOOR: u32 = 0;
/// Highest price the price slider can express.
pub const PRICE_CEILING: u32 = 1000;
/// Youngest age a listing may advertise.
pub const AGE_FLOOR: u32 = 18;
/// Oldest age the age slider can express.
pub const AGE_CEILING: u32 = 99;
/// Upper bound of the star rating scale.
pub const RATING_CEILING: f32 = 5.0;

pub const DEFAULT_PRICE_RANGE: Range = (PRICE_FLOOR, PRICE_CEILING);
pub const DEFAULT_AGE_RANGE: Range = (AGE_FLOOR, 60);

// =============================================================================
// Enums
// =============================================================================

/// Which directory page a filter state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryKind {
    Escorts,
    Creators,
    Livecams,
}

impl DirectoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryKind::Escorts => "escorts",
            DirectoryKind::Creators => "creators",
            DirectoryKind::Livecams => "livecams",
        }
    }
}

/// How a listing delivers its services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    InPerson,
    Virtual,
    Both,
}

/// The service-type dimension of the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceTypeFilter {
    #[default]
    Any,
    InPerson,
    Virtual,
    Both,
}

impl ServiceTypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTypeFilter::Any => "any",
            ServiceTypeFilter::InPerson => "in-person",
            ServiceTypeFilter::Virtual => "virtual",
            ServiceTypeFilter::Both => "both",
        }
    }

    /// Whether a listing delivering `service_type` passes this filter.
    ///
    /// `in-person` and `virtual` also accept listings that offer both.
    pub fn accepts(&self, service_type: ServiceType) -> bool {
        match self {
            ServiceTypeFilter::Any => true,
            ServiceTypeFilter::InPerson => {
                matches!(service_type, ServiceType::InPerson | ServiceType::Both)
            }
            ServiceTypeFilter::Virtual => {
                matches!(service_type, ServiceType::Virtual | ServiceType::Both)
            }
            ServiceTypeFilter::Both => service_type == ServiceType::Both,
        }
    }
}

/// Display order of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
    /// Ordered by the visibility/ranking adapter.
    Featured,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::Rating => "rating",
            SortBy::Featured => "featured",
        }
    }
}

impl FromStr for DirectoryKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "escorts" => Ok(DirectoryKind::Escorts),
            "creators" => Ok(DirectoryKind::Creators),
            "livecams" => Ok(DirectoryKind::Livecams),
            _ => Err(UnknownVariant {
                kind: "directory",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ServiceTypeFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(ServiceTypeFilter::Any),
            "in-person" | "in_person" | "inperson" => Ok(ServiceTypeFilter::InPerson),
            "virtual" => Ok(ServiceTypeFilter::Virtual),
            "both" => Ok(ServiceTypeFilter::Both),
            _ => Err(UnknownVariant {
                kind: "service type",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortBy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortBy::Newest),
            "price" | "price-asc" => Ok(SortBy::PriceAsc),
            "price-desc" => Ok(SortBy::PriceDesc),
            "rating" => Ok(SortBy::Rating),
            "featured" => Ok(SortBy::Featured),
            _ => Err(UnknownVariant {
                kind: "sort order",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// FilterState
// =============================================================================

/// The filter dimensions of one directory page.
///
/// Invariants (kept by `normalized` and by every store setter):
/// - `price_range.0 <= price_range.1`, both within `[PRICE_FLOOR, PRICE_CEILING]`
/// - `age_range.0 <= age_range.1`, both within `[AGE_FLOOR, AGE_CEILING]`
/// - `0 <= rating_min <= RATING_CEILING`
/// - `current_page >= 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_query: String,
    pub location: String,
    pub price_range: Range,
    pub age_range: Range,
    pub verified_only: bool,
    pub available_now: bool,
    pub rating_min: f32,
    pub selected_services: BTreeSet<String>,
    pub selected_genders: BTreeSet<String>,
    pub selected_orientations: BTreeSet<String>,
    pub service_type_filter: ServiceTypeFilter,
    pub sort_by: SortBy,
    pub current_page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            location: String::new(),
            price_range: DEFAULT_PRICE_RANGE,
            age_range: DEFAULT_AGE_RANGE,
            verified_only: false,
            available_now: false,
            rating_min: 0.0,
            selected_services: BTreeSet::new(),
            selected_genders: BTreeSet::new(),
            selected_orientations: BTreeSet::new(),
            service_type_filter: ServiceTypeFilter::Any,
            sort_by: SortBy::Newest,
            current_page: 1,
        }
    }
}

impl FilterState {
    /// Clamp a requested price range: each bound into the slider bounds,
    /// then `hi = max(hi, lo)`.
    pub fn clamp_price_range(lo: i64, hi: i64) -> Range {
        clamp_range(lo, hi, PRICE_FLOOR, PRICE_CEILING)
    }

    /// Clamp a requested age range the same way as prices.
    pub fn clamp_age_range(lo: i64, hi: i64) -> Range {
        clamp_range(lo, hi, AGE_FLOOR, AGE_CEILING)
    }

    /// Clamp a minimum rating into `[0, RATING_CEILING]`. NaN becomes 0.
    pub fn clamp_rating(rating: f32) -> f32 {
        if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, RATING_CEILING)
        }
    }

    /// Clamp a page number to at least 1.
    pub fn clamp_page(page: i64) -> u32 {
        page.clamp(1, u32::MAX as i64) as u32
    }

    /// Re-apply every clamping rule. Used on states that did not come
    /// through the store setters (e.g. deserialized from storage).
    pub fn normalized(mut self) -> Self {
        self.price_range =
            Self::clamp_price_range(self.price_range.0 as i64, self.price_range.1 as i64);
        self.age_range = Self::clamp_age_range(self.age_range.0 as i64, self.age_range.1 as i64);
        self.rating_min = Self::clamp_rating(self.rating_min);
        self.current_page = self.current_page.max(1);
        self
    }

    /// True when every dimension equals its default. Whitespace-only text
    /// counts as empty, as it does for the active-filter chips.
    pub fn is_default(&self) -> bool {
        let defaults = Self::default();
        self.search_query.trim().is_empty()
            && self.location.trim().is_empty()
            && FilterState {
                search_query: String::new(),
                location: String::new(),
                ..self.clone()
            } == defaults
    }
}

fn clamp_range(lo: i64, hi: i64, floor: u32, ceiling: u32) -> Range {
    let lo = lo.clamp(floor as i64, ceiling as i64) as u32;
    let hi = hi.clamp(floor as i64, ceiling as i64) as u32;
    (lo, hi.max(lo))
}

// =============================================================================
// ActiveFilterChip
// =============================================================================

/// Display-ready projection of one non-default filter dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilterChip {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ActiveFilterChip {
    pub fn new(key: &str, label: &str, value: Option<String>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value,
        }
    }
}

impl fmt::Display for ActiveFilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.label, value),
            None => write!(f, "{}", self.label),
        }
    }
}

// =============================================================================
// Listings
// =============================================================================

/// A listing shown on a directory page.
///
/// Owned by the data-fetch layer; this workspace only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: ListingId,
    pub name: String,
    pub region: String,
    pub price: u32,
    pub age: u32,
    pub gender: String,
    pub orientation: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub service_type: ServiceType,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub available_now: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unix timestamp when the listing was created
    pub created_at: i64,
}

impl CandidateRecord {
    /// Verified or premium listings get the boost in ranking.
    pub fn is_boosted(&self) -> bool {
        self.verified || self.premium
    }
}

/// Engagement inputs for one listing, supplied per ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingSignal {
    /// Unix timestamp of the listing's last activity
    pub last_active_at: i64,
    #[serde(default)]
    pub view_count: u64,
}
