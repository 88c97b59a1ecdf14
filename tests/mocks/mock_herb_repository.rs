use async_trait::async_trait;
use herb_search_server::error::{StoreError, StoreResult};
use herb_search_server::matching::FieldMatcher;
use herb_search_server::models::{HerbField, HerbRecord};
use herb_search_server::repositories::HerbRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock herb repository for testing.
///
/// Keeps records in insertion order, tracks method calls for verification,
/// and can be switched into a failing state to simulate an unreachable store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockHerbRepository {
    herbs: Arc<Mutex<Vec<HerbRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockHerbRepository {
    /// Create a new empty MockHerbRepository.
    pub fn new() -> Self {
        Self {
            herbs: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a repository pre-populated with `herbs`, in order.
    pub fn with_herbs(herbs: Vec<HerbRecord>) -> Self {
        let repo = Self::new();
        repo.add_herbs(herbs);
        repo
    }

    /// Append a herb to the mock repository.
    pub fn add_herb(&self, herb: HerbRecord) {
        self.herbs.lock().unwrap().push(herb);
    }

    /// Append multiple herbs to the mock repository.
    pub fn add_herbs(&self, herbs: Vec<HerbRecord>) {
        self.herbs.lock().unwrap().extend(herbs);
    }

    /// Make every subsequent query fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total number of store queries of any kind.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("mock store offline".to_string()));
        }
        Ok(())
    }

    fn select(&self, fields: &[HerbField], substring: &str) -> Vec<HerbRecord> {
        let matcher = FieldMatcher::new(substring);
        self.herbs
            .lock()
            .unwrap()
            .iter()
            .filter(|herb| matcher.matches(herb, fields))
            .cloned()
            .collect()
    }
}

impl Default for MockHerbRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HerbRepository for MockHerbRepository {
    async fn filter_by(&self, field: HerbField, substring: &str) -> StoreResult<Vec<HerbRecord>> {
        self.track_call("filter_by");
        self.check_available()?;
        Ok(self.select(&[field], substring))
    }

    async fn filter_by_any(
        &self,
        fields: &[HerbField],
        substring: &str,
    ) -> StoreResult<Vec<HerbRecord>> {
        self.track_call("filter_by_any");
        self.check_available()?;
        Ok(self.select(fields, substring))
    }
}
