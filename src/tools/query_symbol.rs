//! Symbol lookup against the documentation index.

use super::require_engine;
use crate::query::{CompoundDetail, QueryEngine};
use crate::state::ServerState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// How many known names to suggest when a lookup finds nothing.
const SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QuerySymbolRequest {
    /// Class, struct, namespace, or file name to look up. Exact names win;
    /// otherwise the first case-insensitive substring match is returned.
    pub name: String,
}

/// Look up a documented compound and format its details.
pub async fn handle_query_symbol(
    state: &ServerState,
    request: QuerySymbolRequest,
) -> Result<String, String> {
    let engine = require_engine(state).await?;

    match engine.query_symbol(&request.name) {
        Ok(Some(detail)) => Ok(format_detail(&detail)),
        Ok(None) => Ok(format_not_found(&engine, &request.name)),
        // The symbol exists but its data is missing or corrupt; this is a
        // tool error, distinct from "not found" above.
        Err(e) => Err(e.to_string()),
    }
}

fn format_detail(detail: &CompoundDetail) -> String {
    let mut out = format!("{} {}\n", detail.kind, detail.name);

    if !detail.brief.is_empty() {
        let _ = writeln!(out, "\n{}", detail.brief);
    }
    if !detail.detailed.is_empty() {
        let _ = writeln!(out, "\n{}", detail.detailed);
    }

    if detail.members.is_empty() {
        out.push_str("\nNo documented members.\n");
        return out;
    }

    let _ = writeln!(out, "\nMembers ({}):", detail.members.len());
    for member in &detail.members {
        let mut line = format!("  [{}]", member.kind);
        if !member.type_text.is_empty() {
            line.push(' ');
            line.push_str(&member.type_text);
        }
        line.push(' ');
        line.push_str(&member.name);
        line.push_str(&member.args);
        out.push_str(&line);
        out.push('\n');

        if !member.brief.is_empty() {
            let _ = writeln!(out, "      {}", member.brief);
        }
    }

    out
}

fn format_not_found(engine: &QueryEngine, name: &str) -> String {
    if engine.is_empty() {
        return format!(
            "No symbol matching '{}' found: the documentation index is empty.\n\
             Run generate_docs to build the documentation first.",
            name
        );
    }

    let mut out = format!("No symbol matching '{}' found.\n\nKnown symbols:\n", name);
    for symbol in engine.list_symbols(None).into_iter().take(SUGGESTION_LIMIT) {
        let _ = writeln!(out, "  - {}", symbol);
    }
    let total = engine.compound_count();
    if total > SUGGESTION_LIMIT {
        let _ = writeln!(out, "  ... and {} more (see list_symbols)", total - SUGGESTION_LIMIT);
    }
    out
}
