//! Documentation generation via the doxygen binary.

use super::resolve_project_dir;
use crate::doxygen::{doxygen_version, run_doxygen};
use crate::query::QueryEngine;
use crate::state::ServerState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateDocsRequest {
    /// Project directory containing a Doxyfile (defaults to the configured project)
    pub path: Option<String>,
}

/// Run doxygen for the project, then rebuild the query engine from the
/// freshly generated XML.
pub async fn handle_generate_docs(
    state: &ServerState,
    request: GenerateDocsRequest,
) -> Result<String, String> {
    let dir = resolve_project_dir(state, request.path.as_deref()).await?;

    // run_doxygen validates the Doxyfile before touching the binary; only
    // ask for the version once a run actually succeeded.
    let report = run_doxygen(&dir).await.map_err(|e| e.to_string())?;
    let version = doxygen_version().await.map_err(|e| e.to_string())?;

    // Generating docs for a directory makes it the active project; the old
    // engine (if any) described stale output either way.
    let xml_dir = ServerState::xml_dir(&dir);
    let engine = Arc::new(QueryEngine::new(&xml_dir));
    let compound_count = engine.compound_count();
    state.set_project(dir.clone()).await;
    state.set_engine(engine).await;

    let mut response = format!(
        "Documentation generated with Doxygen {}.\n\n\
         Project: {}\n\
         Warnings: {}\n\
         HTML output: {}\n",
        version,
        dir.display(),
        report.warning_count,
        dir.join("docs").join("html").display(),
    );

    if compound_count == 0 {
        response.push_str(
            "\nNo compounds were indexed. Check that FILE_PATTERNS matches your sources.\n",
        );
    } else {
        response.push_str(&format!(
            "Indexed {} compounds; query_symbol and list_symbols are ready.\n",
            compound_count
        ));
    }

    Ok(response)
}
