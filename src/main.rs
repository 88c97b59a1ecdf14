//! Herb Search Server - Main entry point
//!
//! Loads the herb catalog and serves tiered keyword search over the Model
//! Context Protocol (MCP) on stdio.

use anyhow::Result;
use herb_search_server::repositories::{HerbRepository, InMemoryHerbRepository};
use herb_search_server::{Config, HerbMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting herb search server with catalog: {}",
        config.data_path.display()
    );

    let repo = match InMemoryHerbRepository::from_json_file(&config.data_path) {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to load herb catalog: {}", e);
            return Err(e.into());
        }
    };
    let repo = Arc::new(repo) as Arc<dyn HerbRepository>;

    let server = HerbMcpServer::new(repo);

    info!("Starting MCP server with stdio transport");
    herb_search_server::server::run_server(server).await?;

    info!("Herb search server shutdown complete");
    Ok(())
}
