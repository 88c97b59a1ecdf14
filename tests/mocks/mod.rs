//! Test doubles shared by the integration tests.

#![allow(dead_code)]

mod mock_herb_repository;

pub use mock_herb_repository::MockHerbRepository;

use herb_search_server::models::HerbRecord;

/// Build a herb with the fields the ranking tests care about.
pub fn herb(name: &str, alias: Option<&str>, effect: Option<&str>) -> HerbRecord {
    HerbRecord {
        name: name.to_string(),
        alias: alias.map(str::to_string),
        effect: effect.map(str::to_string),
        ..Default::default()
    }
}

/// The two-record catalog used in the documented examples.
pub fn ginseng_catalog() -> Vec<HerbRecord> {
    vec![
        herb("人参", Some("棒棰"), Some("大补元气")),
        herb("党参", None, Some("补气")),
    ]
}
