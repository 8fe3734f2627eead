use doxygen_mcp::logging;
use doxygen_mcp::server::DoxygenServer;
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to stderr; stdout carries the MCP protocol.
    logging::init();

    tracing::info!("Starting doxygen-mcp server");

    let server = DoxygenServer::new();
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
