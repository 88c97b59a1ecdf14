use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{StoreError, StoreResult};
use crate::matching::FieldMatcher;
use crate::models::{HerbField, HerbRecord};
use crate::repositories::traits::HerbRepository;

/// Herb repository backed by an immutable, insertion-ordered vector.
///
/// The catalog is validated once at construction and never mutated afterwards,
/// so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryHerbRepository {
    records: Vec<HerbRecord>,
}

impl InMemoryHerbRepository {
    /// Build a repository from records, rejecting empty or duplicate names.
    pub fn new(records: Vec<HerbRecord>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.name.is_empty() {
                return Err(StoreError::InvalidRecord(format!(
                    "record #{} has an empty name",
                    position
                )));
            }
            if !seen.insert(record.name.as_str()) {
                return Err(StoreError::InvalidRecord(format!(
                    "duplicate herb name '{}'",
                    record.name
                )));
            }
        }

        Ok(Self { records })
    }

    /// Load a catalog from a JSON array of herb records.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let records: Vec<HerbRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let repo = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            records = repo.len(),
            "Herb catalog loaded"
        );

        Ok(repo)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn select(&self, fields: &[HerbField], substring: &str) -> Vec<HerbRecord> {
        let matcher = FieldMatcher::new(substring);
        self.records
            .iter()
            .filter(|record| matcher.matches(record, fields))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl HerbRepository for InMemoryHerbRepository {
    async fn filter_by(&self, field: HerbField, substring: &str) -> StoreResult<Vec<HerbRecord>> {
        Ok(self.select(&[field], substring))
    }

    async fn filter_by_any(
        &self,
        fields: &[HerbField],
        substring: &str,
    ) -> StoreResult<Vec<HerbRecord>> {
        Ok(self.select(fields, substring))
    }
}
