//! Project file census.

use super::resolve_project_dir;
use crate::scan::scan_project;
use crate::state::ServerState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Cap on per-extension lines in the report; small projects show everything.
const MAX_EXTENSION_LINES: usize = 20;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScanProjectRequest {
    /// Directory to scan (defaults to the configured project)
    pub path: Option<String>,
}

/// Count project files per extension.
pub async fn handle_scan_project(
    state: &ServerState,
    request: ScanProjectRequest,
) -> Result<String, String> {
    let dir = resolve_project_dir(state, request.path.as_deref()).await?;

    let scan_dir = dir.clone();
    let report = tokio::task::spawn_blocking(move || scan_project(&scan_dir))
        .await
        .map_err(|e| format!("Scan task failed: {}", e))?;

    let mut response = format!(
        "Project scan: {}\n\nTotal files: {}\n",
        dir.display(),
        report.total
    );

    if !report.by_extension.is_empty() {
        response.push_str("\nBy extension:\n");
        for (ext, count) in report.by_extension.iter().take(MAX_EXTENSION_LINES) {
            let _ = writeln!(response, "  {}: {} files", ext, count);
        }
        if report.by_extension.len() > MAX_EXTENSION_LINES {
            let _ = writeln!(
                response,
                "  ... and {} more extensions",
                report.by_extension.len() - MAX_EXTENSION_LINES
            );
        }
    }

    Ok(response)
}
