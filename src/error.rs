//! Error types for the herb search server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Serialize;
use thiserror::Error;

/// Errors raised by a record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be queried
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// Failed to read the catalog file
    #[error("Failed to read herb catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the catalog file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates the store invariants (empty or duplicate name)
    #[error("Invalid herb record: {0}")]
    InvalidRecord(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Coarse classification of a [`SearchError`].
///
/// The boundary layer uses this to pick a status: `InvalidInput` and `NoMatch`
/// are user-facing outcomes, `StoreUnavailable` is a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    NoMatch,
    StoreUnavailable,
}

/// Errors that can occur during search, suggestion and category operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Missing or empty query input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Well-formed query with zero results
    #[error("No herb record matches the keyword: {keyword}")]
    NoMatch { keyword: String },

    /// The record store failed
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

impl SearchError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NoMatch { .. } => ErrorKind::NoMatch,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
        }
    }

    /// Whether the error is an expected, user-facing outcome.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self.kind(), ErrorKind::StoreUnavailable)
    }
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;
