//! Keyword search, suggestion and category browsing over the herb catalog.
//!
//! - **tiered_search**: ranked search (name, then alias, then descriptive fields)
//! - **suggestion**: single-pass autocomplete
//! - **category**: browse by taste or meridian

pub mod category;
pub mod suggestion;
pub mod tiered_search;

pub use category::{CategoryKind, CategorySearchEngine};
pub use suggestion::{SuggestionEngine, SUGGESTION_FIELDS};
pub use tiered_search::{TierMatches, TieredResults, TieredSearchEngine};
