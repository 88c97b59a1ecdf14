//! Case-insensitive substring matching over herb record fields.

use crate::models::{HerbField, HerbRecord};

/// Matches one keyword against a declared set of record fields.
///
/// The keyword is case-folded once at construction; every field is folded
/// on comparison. Absent fields never match, and an empty keyword matches
/// nothing.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    needle: String,
}

impl FieldMatcher {
    /// Create a matcher for `keyword`.
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: fold_case(keyword),
        }
    }

    /// The lowercased keyword this matcher looks for.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Returns true if at least one of `fields` contains the keyword.
    pub fn matches(&self, record: &HerbRecord, fields: &[HerbField]) -> bool {
        fields.iter().any(|&field| self.field_matches(record, field))
    }

    /// Fields from `fields` that contain the keyword, in the order given.
    pub fn matched_fields(&self, record: &HerbRecord, fields: &[HerbField]) -> Vec<HerbField> {
        fields
            .iter()
            .copied()
            .filter(|&field| self.field_matches(record, field))
            .collect()
    }

    fn field_matches(&self, record: &HerbRecord, field: HerbField) -> bool {
        if self.needle.is_empty() {
            return false;
        }

        record
            .field(field)
            .map(|value| fold_case(value).contains(&self.needle))
            .unwrap_or(false)
    }
}

/// Lowercase each character independently.
///
/// `str::to_lowercase` maps a capital sigma differently at the end of a word,
/// which would make a folded substring differ from the folded whole.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns true if `keyword` is a non-empty, case-insensitive substring of any of `fields`.
pub fn matches(record: &HerbRecord, keyword: &str, fields: &[HerbField]) -> bool {
    FieldMatcher::new(keyword).matches(record, fields)
}
