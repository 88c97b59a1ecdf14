//! Category browsing by taste or meridian.

use crate::error::{SearchError, SearchResult};
use crate::models::{HerbField, HerbRecord};
use crate::projection::{CategoryItem, ResultProjector};
use crate::repositories::HerbRepository;
use std::str::FromStr;
use std::sync::Arc;

/// Category dimensions that can be browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// 性味
    Taste,
    /// 归经
    Meridian,
}

impl CategoryKind {
    /// Record field holding this category.
    pub fn field(&self) -> HerbField {
        match self {
            Self::Taste => HerbField::Taste,
            Self::Meridian => HerbField::Meridian,
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "taste" => Ok(Self::Taste),
            "meridian" => Ok(Self::Meridian),
            other => Err(format!("unknown category type: {}", other)),
        }
    }
}

/// Browse herbs sharing a taste or meridian, sorted by name.
#[derive(Clone)]
pub struct CategorySearchEngine {
    repo: Arc<dyn HerbRepository>,
}

impl CategorySearchEngine {
    pub fn new(repo: Arc<dyn HerbRepository>) -> Self {
        Self { repo }
    }

    /// List herbs whose `category_type` field contains `sub_category`.
    ///
    /// Both arguments are required. An unrecognized `category_type` yields an
    /// empty list rather than an error.
    pub async fn search(
        &self,
        category_type: &str,
        sub_category: &str,
    ) -> SearchResult<Vec<CategoryItem>> {
        if category_type.is_empty() || sub_category.is_empty() {
            return Err(SearchError::InvalidInput(
                "category information not provided".to_string(),
            ));
        }

        let kind = match category_type.parse::<CategoryKind>() {
            Ok(kind) => kind,
            Err(reason) => {
                tracing::debug!("{}", reason);
                return Ok(Vec::new());
            }
        };

        let mut records: Vec<HerbRecord> = self.repo.filter_by(kind.field(), sub_category).await?;
        records.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            category_type = %category_type,
            sub_category = %sub_category,
            count = records.len(),
            "Category search complete"
        );

        Ok(records.iter().map(ResultProjector::category).collect())
    }
}
