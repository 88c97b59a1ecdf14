use crate::error::StoreResult;
use crate::models::{HerbField, HerbRecord};
use async_trait::async_trait;

/// Read-only query surface over the herb catalog.
///
/// Both predicates are case-insensitive "contains" filters that never match an
/// absent field. Results come back in store iteration order. Implementations
/// may be an in-memory catalog, a database, or a mock.
#[async_trait]
pub trait HerbRepository: Send + Sync {
    /// Records whose `field` contains `substring`.
    async fn filter_by(&self, field: HerbField, substring: &str) -> StoreResult<Vec<HerbRecord>>;

    /// Records where any of `fields` contains `substring`.
    async fn filter_by_any(
        &self,
        fields: &[HerbField],
        substring: &str,
    ) -> StoreResult<Vec<HerbRecord>>;
}
