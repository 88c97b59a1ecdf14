//! MCP server implementation for the herb search catalog.
//!
//! This module provides the MCP protocol server that exposes herb search
//! to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::HerbMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the herb MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
pub async fn run_server(server: HerbMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
