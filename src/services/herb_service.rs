//! Herb service layer.
//!
//! Business logic for keyword search, suggestions and category browsing.
//! Wraps the engines and shapes their output into response envelopes.

use crate::error::{ErrorKind, SearchError, SearchResult};
use crate::projection::{CategoryItem, HerbDetail, ResultProjector, SuggestionItem};
use crate::repositories::HerbRepository;
use crate::search::{CategorySearchEngine, SuggestionEngine, TieredSearchEngine};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Successful tiered search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<HerbDetail>,
    pub count: usize,
}

/// Suggestion list; may be empty.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub data: Vec<SuggestionItem>,
    pub total_count: usize,
}

/// Category browse result.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub data: Vec<CategoryItem>,
    pub category_type: String,
    pub sub_category: String,
    pub count: usize,
}

/// Failure envelope shared by every operation.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub kind: ErrorKind,
}

impl From<&SearchError> for ErrorResponse {
    fn from(err: &SearchError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// Herb service trait for business operations.
#[async_trait]
pub trait HerbService: Send + Sync {
    /// Ranked keyword search. Fails on an empty keyword or when nothing matches.
    async fn search(&self, keyword: &str) -> SearchResult<SearchResponse>;

    /// Autocomplete suggestions. Never fails on an empty keyword.
    async fn suggest(&self, keyword: &str) -> SearchResult<SuggestResponse>;

    /// Browse herbs by taste or meridian.
    async fn search_by_category(
        &self,
        category_type: &str,
        sub_category: &str,
    ) -> SearchResult<CategoryResponse>;
}

/// Default implementation of HerbService.
#[derive(Clone)]
pub struct HerbServiceImpl {
    search_engine: TieredSearchEngine,
    suggestion_engine: SuggestionEngine,
    category_engine: CategorySearchEngine,
}

impl HerbServiceImpl {
    /// Create a new herb service over `repo`.
    pub fn new(repo: Arc<dyn HerbRepository>) -> Self {
        Self {
            search_engine: TieredSearchEngine::new(repo.clone()),
            suggestion_engine: SuggestionEngine::new(repo.clone()),
            category_engine: CategorySearchEngine::new(repo),
        }
    }
}

#[async_trait]
impl HerbService for HerbServiceImpl {
    async fn search(&self, keyword: &str) -> SearchResult<SearchResponse> {
        tracing::info!(keyword = %keyword, "Herb search requested");

        let records = self.search_engine.search(keyword).await.map_err(|e| {
            if e.is_user_facing() {
                tracing::info!(keyword = %keyword, "Herb search rejected: {}", e);
            } else {
                tracing::error!(keyword = %keyword, "Herb search failed: {}", e);
            }
            e
        })?;

        let data: Vec<HerbDetail> = records.iter().map(ResultProjector::detail).collect();

        Ok(SearchResponse {
            success: true,
            count: data.len(),
            data,
        })
    }

    async fn suggest(&self, keyword: &str) -> SearchResult<SuggestResponse> {
        let data = self.suggestion_engine.suggest(keyword).await.map_err(|e| {
            tracing::error!(keyword = %keyword, "Suggestion failed: {}", e);
            e
        })?;

        Ok(SuggestResponse {
            success: true,
            total_count: data.len(),
            data,
        })
    }

    async fn search_by_category(
        &self,
        category_type: &str,
        sub_category: &str,
    ) -> SearchResult<CategoryResponse> {
        let data = self
            .category_engine
            .search(category_type, sub_category)
            .await?;

        Ok(CategoryResponse {
            success: true,
            count: data.len(),
            data,
            category_type: category_type.to_string(),
            sub_category: sub_category.to_string(),
        })
    }
}
