//! Configuration for a directory view.
//!
//! One struct carries every option a directory page accepts; callers build
//! it with the `with_*` methods instead of passing loose parameters.

use directory_core::DirectoryKind;
use pipeline::{RankOptions, RankingWeights};

/// Listings per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub kind: DirectoryKind,
    /// Listings per page (at least 1)
    pub page_size: usize,
    /// Viewer's region, preferred by the featured order
    pub region: Option<String>,
    /// Viewer's interests, matched against listing tags by the featured order
    pub tags: Vec<String>,
    pub ranking_weights: RankingWeights,
}

impl DirectoryConfig {
    pub fn new(kind: DirectoryKind) -> Self {
        Self {
            kind,
            page_size: DEFAULT_PAGE_SIZE,
            region: None,
            tags: Vec::new(),
            ranking_weights: RankingWeights::default(),
        }
    }

    /// Configure listings per page (default: 24). Zero is raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
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

    pub fn with_ranking_weights(mut self, weights: RankingWeights) -> Self {
        self.ranking_weights = weights;
        self
    }

    /// Ranking options for a full (unlimited) ordering.
    pub fn rank_options(&self) -> RankOptions {
        let opts = RankOptions::new()
            .with_tags(self.tags.iter().cloned())
            .with_weights(self.ranking_weights);
        match &self.region {
            Some(region) => opts.with_region(region.clone()),
            None => opts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DirectoryConfig::new(DirectoryKind::Escorts);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.region.is_none());
        assert_eq!(config.rank_options(), RankOptions::new());
    }

    #[test]
    fn test_zero_page_size_raised() {
        let config = DirectoryConfig::new(DirectoryKind::Creators).with_page_size(0);
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_rank_options_carry_region_and_tags() {
        let opts = DirectoryConfig::new(DirectoryKind::Livecams)
            .with_region("Lisbon")
            .with_tags(["cosplay"])
            .rank_options();
        assert_eq!(opts.region.as_deref(), Some("Lisbon"));
        assert_eq!(opts.tags, vec!["cosplay".to_string()]);
        assert!(opts.limit.is_none());
    }
}
