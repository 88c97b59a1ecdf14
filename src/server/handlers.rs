//! MCP tool handlers for the herb search server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::SearchError;
use crate::repositories::HerbRepository;
use crate::services::{ErrorResponse, HerbService, HerbServiceImpl};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes herb search tools.
#[derive(Clone)]
pub struct HerbMcpServer {
    herb_service: Arc<dyn HerbService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for HerbMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "herb-search-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a herbal-medicine catalog - provides ranked keyword search, autocomplete suggestions, and browsing by taste or meridian.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct KeywordParams {
    /// Free-text keyword; missing is treated as empty
    #[serde(default)]
    keyword: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CategoryParams {
    /// "taste" or "meridian"
    #[serde(rename = "type", default)]
    category_type: Option<String>,
    #[serde(alias = "subCategory", default)]
    sub_category: Option<String>,
}

fn to_json_text<T: Serialize>(value: &T) -> Result<Content, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(Content::text(text))
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Report user-facing outcomes as tool errors and store failures as protocol errors.
fn search_error_result(e: SearchError) -> Result<CallToolResult, McpError> {
    if e.is_user_facing() {
        Ok(CallToolResult::error(vec![to_json_text(&ErrorResponse::from(&e))?]))
    } else {
        tracing::error!("Store failure: {}", e);
        Err(to_mcp_error(e))
    }
}

// Tool router implementation
#[tool_router]
impl HerbMcpServer {
    /// Create a new herb MCP server over `repo`.
    pub fn new(repo: Arc<dyn HerbRepository>) -> Self {
        let herb_service = Arc::new(HerbServiceImpl::new(repo)) as Arc<dyn HerbService>;
        Self::with_service(herb_service)
    }

    /// Create a server around an existing service.
    pub fn with_service(herb_service: Arc<dyn HerbService>) -> Self {
        Self {
            herb_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Ranked keyword search.
    #[tool(
        description = "Search herbs by keyword. Name matches rank first, then alias matches, then matches in effect, indication, effect class, taste or meridian. Each herb appears once with all its fields."
    )]
    async fn search_herbs(
        &self,
        params: Parameters<KeywordParams>,
    ) -> Result<CallToolResult, McpError> {
        let keyword = params.0.keyword.unwrap_or_default();

        match self.herb_service.search(&keyword).await {
            Ok(response) => Ok(CallToolResult::success(vec![to_json_text(&response)?])),
            Err(e) => search_error_result(e),
        }
    }

    /// Autocomplete suggestions.
    #[tool(
        description = "Suggest herbs whose name, alias or effect class contains the keyword, sorted by name. Returns an empty list for an empty keyword."
    )]
    async fn suggest_herbs(
        &self,
        params: Parameters<KeywordParams>,
    ) -> Result<CallToolResult, McpError> {
        let keyword = params.0.keyword.unwrap_or_default();

        match self.herb_service.suggest(&keyword).await {
            Ok(response) => Ok(CallToolResult::success(vec![to_json_text(&response)?])),
            Err(e) => search_error_result(e),
        }
    }

    /// Browse by taste or meridian.
    #[tool(
        description = "List herbs whose taste or meridian contains the given sub category, sorted by name. type must be \"taste\" or \"meridian\"."
    )]
    async fn search_herbs_by_category(
        &self,
        params: Parameters<CategoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let category_type = params.category_type.unwrap_or_default();
        let sub_category = params.sub_category.unwrap_or_default();

        match self
            .herb_service
            .search_by_category(&category_type, &sub_category)
            .await
        {
            Ok(response) => Ok(CallToolResult::success(vec![to_json_text(&response)?])),
            Err(e) => search_error_result(e),
        }
    }
}
