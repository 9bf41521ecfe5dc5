//! Loading listing catalogs from JSON files.
//!
//! A catalog directory holds:
//! - `listings.json`: array of `CandidateRecord`
//! - `signals.json` (optional): object mapping listing id to `RankingSignal`
//!
//! In the browser these come from the hosted API; the CLI and tests read
//! them from disk instead.

use crate::error::{CatalogError, Result};
use crate::types::{CandidateRecord, ListingId, RankingSignal, RATING_CEILING};
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const LISTINGS_FILE: &str = "listings.json";
pub const SIGNALS_FILE: &str = "signals.json";

/// Listings plus their ranking signals.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub listings: Vec<CandidateRecord>,
    pub signals: HashMap<ListingId, RankingSignal>,
}

impl Catalog {
    /// Build a catalog in memory, validating listings and dropping
    /// signals that reference unknown ids.
    pub fn new(
        listings: Vec<CandidateRecord>,
        signals: HashMap<ListingId, RankingSignal>,
    ) -> Result<Self> {
        validate_listings(&listings)?;

        let known: HashSet<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        let signals = signals
            .into_iter()
            .filter(|(id, _)| {
                let keep = known.contains(id.as_str());
                if !keep {
                    warn!("Dropping ranking signal for unknown listing {}", id);
                }
                keep
            })
            .collect();

        Ok(Self { listings, signals })
    }

    /// Load `listings.json` and `signals.json` from a directory.
    ///
    /// Both files are parsed in parallel with `rayon::join`. A missing
    /// signals file means "no signals"; a missing listings file is an error.
    pub fn load_from_files(dir: &Path) -> Result<Self> {
        let listings_path = dir.join(LISTINGS_FILE);
        let signals_path = dir.join(SIGNALS_FILE);

        let (listings, signals) = rayon::join(
            || read_json::<Vec<CandidateRecord>>(&listings_path),
            || {
                if signals_path.exists() {
                    read_json::<HashMap<ListingId, RankingSignal>>(&signals_path)
                } else {
                    Ok(HashMap::new())
                }
            },
        );
        let listings = listings?;
        let signals = signals?;

        debug!(
            "Loaded {} listings and {} signals from {}",
            listings.len(),
            signals.len(),
            dir.display()
        );

        Self::new(listings, signals)
    }

    /// Look up a listing by id
    pub fn get(&self, id: &str) -> Option<&CandidateRecord> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CatalogError::ParseError {
        file: path.display().to_string(),
        source,
    })
}

fn validate_listings(listings: &[CandidateRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if listing.id.trim().is_empty() {
            return Err(CatalogError::InvalidValue {
                id: listing.id.clone(),
                field: "id".to_string(),
                value: "<empty>".to_string(),
            });
        }
        if !(0.0..=RATING_CEILING).contains(&listing.rating) {
            return Err(CatalogError::InvalidValue {
                id: listing.id.clone(),
                field: "rating".to_string(),
                value: listing.rating.to_string(),
            });
        }
        if !seen.insert(listing.id.as_str()) {
            return Err(CatalogError::DuplicateId(listing.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServiceType;
    use tempfile::tempdir;

    fn listing(id: &str) -> CandidateRecord {
        CandidateRecord {
            id: id.to_string(),
            name: format!("Listing {}", id),
            region: "Berlin".to_string(),
            price: 200,
            age: 27,
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

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![listing("a"), listing("a")], HashMap::new());
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut bad = listing("a");
        bad.rating = 6.0;
        let result = Catalog::new(vec![bad], HashMap::new());
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));
    }

    #[test]
    fn test_unknown_signals_dropped() {
        let mut signals = HashMap::new();
        signals.insert(
            "ghost".to_string(),
            RankingSignal { last_active_at: 10, view_count: 1 },
        );
        signals.insert(
            "a".to_string(),
            RankingSignal { last_active_at: 20, view_count: 2 },
        );

        let catalog = Catalog::new(vec![listing("a")], signals).unwrap();
        assert_eq!(catalog.signals.len(), 1);
        assert!(catalog.signals.contains_key("a"));
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(LISTINGS_FILE),
            serde_json::to_string(&vec![listing("a"), listing("b")]).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.path().join(SIGNALS_FILE),
            r#"{"b": {"lastActiveAt": 1700000500, "viewCount": 12}}"#,
        )
        .unwrap();

        let catalog = Catalog::load_from_files(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.signals["b"].view_count, 12);
        assert_eq!(catalog.get("a").unwrap().region, "Berlin");
    }

    #[test]
    fn test_missing_signals_file_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(LISTINGS_FILE),
            serde_json::to_string(&vec![listing("a")]).unwrap(),
        )
        .unwrap();

        let catalog = Catalog::load_from_files(dir.path()).unwrap();
        assert!(catalog.signals.is_empty());
    }

    #[test]
    fn test_missing_listings_file() {
        let dir = tempdir().unwrap();
        let result = Catalog::load_from_files(dir.path());
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_corrupt_listings_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(LISTINGS_FILE), "[{not json").unwrap();
        let result = Catalog::load_from_files(dir.path());
        assert!(matches!(result, Err(CatalogError::ParseError { .. })));
    }
}
