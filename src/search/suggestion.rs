//! Autocomplete suggestions.

use crate::error::SearchResult;
use crate::models::{HerbField, HerbRecord};
use crate::projection::{ResultProjector, SuggestionItem};
use crate::repositories::HerbRepository;
use std::sync::Arc;

/// Fields checked by the single suggestion predicate.
pub const SUGGESTION_FIELDS: &[HerbField] =
    &[HerbField::Name, HerbField::Alias, HerbField::EffectClass];

/// Unranked, name-sorted suggestions for incremental typing.
#[derive(Clone)]
pub struct SuggestionEngine {
    repo: Arc<dyn HerbRepository>,
}

impl SuggestionEngine {
    pub fn new(repo: Arc<dyn HerbRepository>) -> Self {
        Self { repo }
    }

    /// Suggest herbs whose name, alias or effect class contains `keyword`.
    ///
    /// An empty keyword yields an empty list without querying the store. The
    /// only failure is `StoreUnavailable`.
    pub async fn suggest(&self, keyword: &str) -> SearchResult<Vec<SuggestionItem>> {
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let mut records: Vec<HerbRecord> =
            self.repo.filter_by_any(SUGGESTION_FIELDS, keyword).await?;
        records.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            keyword = %keyword,
            count = records.len(),
            "Suggestions selected"
        );

        Ok(records.iter().map(ResultProjector::suggestion).collect())
    }
}
