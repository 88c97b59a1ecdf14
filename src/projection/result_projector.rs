//! Response shapes for herb records.
//!
//! Each operation exposes its own view of a record: search returns every field,
//! suggestions return a compact and truncated summary, and category browsing
//! returns the clinical essentials.

use crate::models::HerbRecord;
use serde::Serialize;

/// Maximum number of characters of `effect` kept in a suggestion.
pub const SUGGESTION_EFFECT_MAX_CHARS: usize = 100;

/// Appended to a truncated suggestion `effect`.
pub const TRUNCATION_MARKER: &str = "...";

/// Full-detail projection used by tiered search. Absent fields serialize as `null`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HerbDetail {
    pub name: String,
    pub alias: Option<String>,
    pub taste: Option<String>,
    pub meridian: Option<String>,
    pub effect: Option<String>,
    pub indication: Option<String>,
    pub usage: Option<String>,
    pub contraindication: Option<String>,
    pub source: Option<String>,
    pub collection: Option<String>,
    pub effect_class: Option<String>,
    pub pharmacology: Option<String>,
    pub chemistry: Option<String>,
    pub prescription: Option<String>,
    pub theory: Option<String>,
    pub research: Option<String>,
    pub taxonomy: Option<String>,
    pub distribution: Option<String>,
    pub morphology: Option<String>,
    pub identification: Option<String>,
    pub cultivation: Option<String>,
    pub environment: Option<String>,
}

/// Compact projection used by autocomplete.
///
/// `alias`, `effect_class`, `taste` and `meridian` become `""` when absent,
/// while an absent `effect` stays `null`. Clients depend on that asymmetry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuggestionItem {
    pub name: String,
    pub alias: String,
    pub effect_class: String,
    pub effect: Option<String>,
    pub taste: String,
    pub meridian: String,
}

/// Projection used by category browsing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryItem {
    pub name: String,
    pub alias: Option<String>,
    pub taste: Option<String>,
    pub meridian: Option<String>,
    pub effect: Option<String>,
    pub indication: Option<String>,
    pub usage: Option<String>,
    pub contraindication: Option<String>,
}

/// Pure mappings from [`HerbRecord`] to the public response shapes.
pub struct ResultProjector;

impl ResultProjector {
    /// Every field verbatim.
    pub fn detail(record: &HerbRecord) -> HerbDetail {
        HerbDetail {
            name: record.name.clone(),
            alias: record.alias.clone(),
            taste: record.taste.clone(),
            meridian: record.meridian.clone(),
            effect: record.effect.clone(),
            indication: record.indication.clone(),
            usage: record.usage.clone(),
            contraindication: record.contraindication.clone(),
            source: record.source.clone(),
            collection: record.collection.clone(),
            effect_class: record.effect_class.clone(),
            pharmacology: record.pharmacology.clone(),
            chemistry: record.chemistry.clone(),
            prescription: record.prescription.clone(),
            theory: record.theory.clone(),
            research: record.research.clone(),
            taxonomy: record.taxonomy.clone(),
            distribution: record.distribution.clone(),
            morphology: record.morphology.clone(),
            identification: record.identification.clone(),
            cultivation: record.cultivation.clone(),
            environment: record.environment.clone(),
        }
    }

    pub fn suggestion(record: &HerbRecord) -> SuggestionItem {
        SuggestionItem {
            name: record.name.clone(),
            alias: record.alias.clone().unwrap_or_default(),
            effect_class: record.effect_class.clone().unwrap_or_default(),
            effect: record.effect.as_deref().map(truncate_effect),
            taste: record.taste.clone().unwrap_or_default(),
            meridian: record.meridian.clone().unwrap_or_default(),
        }
    }

    pub fn category(record: &HerbRecord) -> CategoryItem {
        CategoryItem {
            name: record.name.clone(),
            alias: record.alias.clone(),
            taste: record.taste.clone(),
            meridian: record.meridian.clone(),
            effect: record.effect.clone(),
            indication: record.indication.clone(),
            usage: record.usage.clone(),
            contraindication: record.contraindication.clone(),
        }
    }
}

/// Cut `effect` to [`SUGGESTION_EFFECT_MAX_CHARS`] characters plus the marker.
///
/// Counts characters, not bytes; text at or under the limit is returned as is.
pub fn truncate_effect(effect: &str) -> String {
    match effect.char_indices().nth(SUGGESTION_EFFECT_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &effect[..cut], TRUNCATION_MARKER),
        None => effect.to_string(),
    }
}
