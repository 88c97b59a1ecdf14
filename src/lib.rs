//! Herb Search Server - keyword search over a herbal-medicine catalog, served over MCP.
//!
//! # Architecture
//!
//! - **models**: The herb record and its searchable fields
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **matching**: Case-insensitive field matching and the tier policy
//! - **repositories**: Read-only record store abstraction and in-memory catalog
//! - **search**: Tiered search, suggestions and category browsing
//! - **projection**: Public response shapes for herb records
//! - **services**: Business operations and response envelopes
//! - **server**: MCP protocol server

pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod projection;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, ErrorKind, SearchError, StoreError};
pub use matching::{FieldMatcher, MatchTier};
pub use models::{HerbField, HerbRecord};
pub use projection::{CategoryItem, HerbDetail, ResultProjector, SuggestionItem};
pub use repositories::{HerbRepository, InMemoryHerbRepository};
pub use search::{CategorySearchEngine, SuggestionEngine, TieredResults, TieredSearchEngine};
pub use server::HerbMcpServer;
pub use services::{HerbService, HerbServiceImpl};
