//! Tool handler logic, one module per MCP tool.
//!
//! Handlers take the shared [`ServerState`] plus a request struct and return
//! `Result<String, String>`: human-readable output or a human-readable
//! error. Nothing here panics on bad input.

pub mod check_install;
pub mod create_project;
pub mod generate_docs;
pub mod list_symbols;
pub mod query_symbol;
pub mod scan_project;
pub mod set_project;

pub use check_install::*;
pub use create_project::*;
pub use generate_docs::*;
pub use list_symbols::*;
pub use query_symbol::*;
pub use scan_project::*;
pub use set_project::*;

use crate::query::QueryEngine;
use crate::server::expand_tilde;
use crate::state::ServerState;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolves the project directory for a tool call: an explicit `path`
/// argument wins, otherwise the configured project.
pub(crate) async fn resolve_project_dir(
    state: &ServerState,
    path: Option<&str>,
) -> Result<PathBuf, String> {
    match path {
        Some(p) => {
            let expanded = expand_tilde(p);
            let canonical = tokio::fs::canonicalize(expanded.as_ref())
                .await
                .map_err(|e| format!("Failed to resolve path '{}': {}", p, e))?;
            if !canonical.is_dir() {
                return Err(format!("Path is not a directory: {}", canonical.display()));
            }
            Ok(canonical)
        }
        None => state.project_dir().await.ok_or_else(|| {
            "No project configured. Use set_project first, or pass a path.".to_string()
        }),
    }
}

/// Returns the active query engine, building one lazily from the configured
/// project. Errors when no project is configured at all.
pub(crate) async fn require_engine(state: &ServerState) -> Result<Arc<QueryEngine>, String> {
    state.engine_or_build().await.ok_or_else(|| {
        "No project configured. Use set_project to point at a project, \
         then generate_docs to build its documentation."
            .to_string()
    })
}
