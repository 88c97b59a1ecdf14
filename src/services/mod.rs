//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the search engines and the repository. They provide a clean boundary
//! between the MCP handlers and the data access layer.

mod herb_service;

pub use herb_service::{
    CategoryResponse, ErrorResponse, HerbService, HerbServiceImpl, SearchResponse,
    SuggestResponse,
};
