//! Public response projections of herb records.

pub mod result_projector;

pub use result_projector::{
    truncate_effect, CategoryItem, HerbDetail, ResultProjector, SuggestionItem,
    SUGGESTION_EFFECT_MAX_CHARS, TRUNCATION_MARKER,
};
