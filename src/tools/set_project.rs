//! Project directory configuration.

use crate::query::QueryEngine;
use crate::server::expand_tilde;
use crate::state::ServerState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetProjectRequest {
    /// Path to the project directory containing the sources to document
    pub path: String,
}

/// Configure the active project directory.
///
/// If the project already has generated XML, the query engine is built
/// eagerly so query tools work immediately.
pub async fn handle_set_project(
    state: &ServerState,
    request: SetProjectRequest,
) -> Result<String, String> {
    let expanded = expand_tilde(&request.path);
    let canonical = tokio::fs::canonicalize(expanded.as_ref())
        .await
        .map_err(|e| format!("Failed to resolve path '{}': {}", request.path, e))?;
    if !canonical.is_dir() {
        return Err(format!("Path is not a directory: {}", canonical.display()));
    }

    state.set_project(canonical.clone()).await;
    tracing::info!(project = %canonical.display(), "Project configured");

    let mut response = format!("Project configured: {}\n\n", canonical.display());

    if canonical.join("Doxyfile").exists() {
        response.push_str("Found an existing Doxyfile.\n");
    } else {
        response.push_str("No Doxyfile yet. Use create_project to generate one.\n");
    }

    let xml_dir = ServerState::xml_dir(&canonical);
    if xml_dir.join("index.xml").exists() {
        let engine = Arc::new(QueryEngine::new(&xml_dir));
        let _ = writeln!(
            response,
            "Loaded documentation index: {} compounds.",
            engine.compound_count()
        );
        state.set_engine(engine).await;
    } else {
        response.push_str("No generated documentation found. Use generate_docs to build it.\n");
    }

    Ok(response)
}
