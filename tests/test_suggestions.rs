//! Integration tests for autocomplete suggestions.

mod mocks;

use herb_search_server::error::ErrorKind;
use herb_search_server::models::HerbRecord;
use herb_search_server::projection::{SUGGESTION_EFFECT_MAX_CHARS, TRUNCATION_MARKER};
use herb_search_server::search::SuggestionEngine;
use mocks::{ginseng_catalog, MockHerbRepository};
use std::sync::Arc;

fn engine_over(repo: &MockHerbRepository) -> SuggestionEngine {
    SuggestionEngine::new(Arc::new(repo.clone()))
}

#[tokio::test]
async fn test_suggest_sorts_by_name() {
    let repo = MockHerbRepository::with_herbs(ginseng_catalog());
    let items = engine_over(&repo).suggest("参").await.unwrap();

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["人参", "党参"]);
    assert_eq!(items[0].alias, "棒棰");
    assert_eq!(items[0].effect.as_deref(), Some("大补元气"));
}

#[tokio::test]
async fn test_sort_ignores_store_order() {
    let repo = MockHerbRepository::with_herbs(vec![
        HerbRecord::new("黄芪"),
        HerbRecord::new("黄连"),
        HerbRecord::new("黄柏"),
    ]);
    let items = engine_over(&repo).suggest("黄").await.unwrap();

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_empty_keyword_returns_empty_without_query() {
    let repo = MockHerbRepository::with_herbs(ginseng_catalog());
    let items = engine_over(&repo).suggest("").await.unwrap();

    assert!(items.is_empty());
    assert_eq!(repo.total_calls(), 0);
}

#[tokio::test]
async fn test_single_store_query() {
    let repo = MockHerbRepository::with_herbs(ginseng_catalog());
    engine_over(&repo).suggest("参").await.unwrap();

    assert_eq!(repo.get_call_count("filter_by_any"), 1);
    assert_eq!(repo.total_calls(), 1);
}

#[tokio::test]
async fn test_no_match_is_empty_success() {
    let repo = MockHerbRepository::with_herbs(ginseng_catalog());
    let items = engine_over(&repo).suggest("黄连").await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_long_effect_is_truncated() {
    let long_effect = "补气".repeat(60);
    let repo = MockHerbRepository::with_herbs(vec![HerbRecord {
        name: "黄芪".to_string(),
        effect: Some(long_effect.clone()),
        ..Default::default()
    }]);

    let items = engine_over(&repo).suggest("黄芪").await.unwrap();
    let effect = items[0].effect.as_deref().unwrap();

    let expected: String = long_effect.chars().take(SUGGESTION_EFFECT_MAX_CHARS).collect();
    assert_eq!(effect, format!("{}{}", expected, TRUNCATION_MARKER));
}

#[tokio::test]
async fn test_absent_effect_stays_absent_while_others_become_empty() {
    // Intentional quirk: a missing effect is null, other missing fields are "".
    let repo = MockHerbRepository::with_herbs(vec![HerbRecord::new("党参")]);
    let items = engine_over(&repo).suggest("党").await.unwrap();

    let item = &items[0];
    assert_eq!(item.effect, None);
    assert_eq!(item.alias, "");
    assert_eq!(item.effect_class, "");
    assert_eq!(item.taste, "");
    assert_eq!(item.meridian, "");
}

#[tokio::test]
async fn test_store_failure() {
    let repo = MockHerbRepository::with_herbs(ginseng_catalog());
    repo.set_unavailable(true);

    let err = engine_over(&repo).suggest("参").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}
