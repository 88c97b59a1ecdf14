//! Data models for the herbal-medicine catalog.
//!
//! This module contains the herb record and the enumeration of fields that
//! take part in matching.

pub mod herb;

pub use herb::{HerbField, HerbRecord};
