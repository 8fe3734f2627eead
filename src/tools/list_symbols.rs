//! Listing of documented compounds.

use super::require_engine;
use crate::state::ServerState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSymbolsRequest {
    /// Restrict to a compound kind as Doxygen records it
    /// (class, struct, namespace, file, ...)
    pub kind: Option<String>,
}

/// List all documented compound names, in index order.
pub async fn handle_list_symbols(
    state: &ServerState,
    request: ListSymbolsRequest,
) -> Result<String, String> {
    let engine = require_engine(state).await?;
    let names = engine.list_symbols(request.kind.as_deref());

    if names.is_empty() {
        return Ok(match request.kind.as_deref() {
            Some(kind) if !engine.is_empty() => {
                format!("No documented symbols of kind '{}' found.", kind)
            }
            _ => "No documented symbols found. Run generate_docs to build the documentation."
                .to_string(),
        });
    }

    let mut response = match request.kind.as_deref() {
        Some(kind) => format!("Documented {} symbols ({}):\n", kind, names.len()),
        None => format!("Documented symbols ({}):\n", names.len()),
    };
    for name in &names {
        let _ = writeln!(response, "  - {}", name);
    }

    Ok(response)
}
