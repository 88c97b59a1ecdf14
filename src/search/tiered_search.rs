//! Tiered keyword search.
//!
//! Ranking is expressed as three ordered set operations rather than a score:
//!
//! - tier 1 = name matches
//! - tier 2 = alias matches − tier 1
//! - tier 3 = descriptive-field matches − tier 1 − tier 2
//!
//! The result is tier 1 ++ tier 2 ++ tier 3, each tier in store order.

use crate::error::{SearchError, SearchResult};
use crate::matching::MatchTier;
use crate::models::HerbRecord;
use crate::repositories::HerbRepository;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Records selected by a single tier.
#[derive(Debug, Clone)]
pub struct TierMatches {
    pub tier: MatchTier,
    pub records: Vec<HerbRecord>,
}

/// Per-tier breakdown of one search, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct TieredResults {
    pub tiers: Vec<TierMatches>,
}

impl TieredResults {
    /// Records selected by `tier`, empty if the tier selected nothing.
    pub fn records_for(&self, tier: MatchTier) -> &[HerbRecord] {
        self.tiers
            .iter()
            .find(|t| t.tier == tier)
            .map(|t| t.records.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of records across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(|t| t.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the tiers in priority order.
    pub fn into_records(self) -> Vec<HerbRecord> {
        self.tiers.into_iter().flat_map(|t| t.records).collect()
    }
}

/// Ranked keyword search over a [`HerbRepository`].
#[derive(Clone)]
pub struct TieredSearchEngine {
    repo: Arc<dyn HerbRepository>,
}

impl TieredSearchEngine {
    pub fn new(repo: Arc<dyn HerbRepository>) -> Self {
        Self { repo }
    }

    /// Search for `keyword`, returning records ordered by tier then store order.
    ///
    /// # Errors
    /// - `InvalidInput` if `keyword` is empty; the store is not queried
    /// - `NoMatch` if no tier selects anything
    /// - `StoreUnavailable` if any store query fails
    pub async fn search(&self, keyword: &str) -> SearchResult<Vec<HerbRecord>> {
        let results = self.search_by_tier(keyword).await?;

        if results.is_empty() {
            tracing::debug!(keyword = %keyword, "No herb record matches");
            return Err(SearchError::NoMatch {
                keyword: keyword.to_string(),
            });
        }

        Ok(results.into_records())
    }

    /// Run the three tier passes and return them separately.
    ///
    /// Issues exactly one store query per tier. Unlike [`search`](Self::search),
    /// an empty breakdown is not an error.
    pub async fn search_by_tier(&self, keyword: &str) -> SearchResult<TieredResults> {
        if keyword.is_empty() {
            return Err(SearchError::InvalidInput("empty search keyword".to_string()));
        }

        let start = Instant::now();
        let mut seen: HashSet<String> = HashSet::new();
        let mut tiers = Vec::with_capacity(MatchTier::ORDERED.len());

        for tier in MatchTier::ORDERED {
            let candidates = self.query_tier(tier, keyword).await?;

            // A name already selected by a higher tier (or earlier in this one) is skipped.
            let records: Vec<HerbRecord> = candidates
                .into_iter()
                .filter(|record| seen.insert(record.name.clone()))
                .collect();

            tracing::debug!(
                keyword = %keyword,
                tier = %tier,
                count = records.len(),
                "Tier pass complete"
            );

            tiers.push(TierMatches { tier, records });
        }

        let results = TieredResults { tiers };

        tracing::info!(
            keyword = %keyword,
            total = results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tiered search complete"
        );

        Ok(results)
    }

    async fn query_tier(&self, tier: MatchTier, keyword: &str) -> SearchResult<Vec<HerbRecord>> {
        let records = match tier.fields() {
            [field] => self.repo.filter_by(*field, keyword).await?,
            fields => self.repo.filter_by_any(fields, keyword).await?,
        };
        Ok(records)
    }
}
