//! Field matching utilities for herb search.
//!
//! This module provides case-insensitive substring matching over record fields
//! and the static tier policy that orders search results.

pub mod field_matcher;
pub mod tiers;

pub use field_matcher::FieldMatcher;
pub use tiers::MatchTier;
