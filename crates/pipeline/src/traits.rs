//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a directory listing.

use anyhow::Result;
use directory_core::{CandidateRecord, FilterState};

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Each filter reads its parameters from the `FilterState` it is given, so
/// one pipeline can serve any number of filter forms.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<CandidateRecord> and return a filtered Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `candidates` - The listings to filter (takes ownership)
    /// * `state` - The filter form state
    ///
    /// # Returns
    /// * `Ok(Vec<CandidateRecord>)` - The listings that pass
    /// * `Err` - If filtering fails
    fn apply(
        &self,
        candidates: Vec<CandidateRecord>,
        state: &FilterState,
    ) -> Result<Vec<CandidateRecord>>;
}
