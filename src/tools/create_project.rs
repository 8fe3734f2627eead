//! Doxyfile creation with language presets.

use crate::doxyfile::{DoxyfileConfig, Language};
use crate::scan::scan_project;
use crate::server::expand_tilde;
use crate::state::ServerState;
use regex::Regex;
use rmcp::schemars;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Project names are written into the Doxyfile inside double quotes; reject
/// anything that could break out of the quoted value.
static PROJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^[^"\r\n]+$"#).unwrap());

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateProjectRequest {
    /// Name of the documentation project
    pub project_name: String,
    /// Project directory, created if missing (defaults to the configured project)
    pub path: Option<String>,
    /// Source language preset selecting FILE_PATTERNS (default: cpp)
    pub language: Option<Language>,
    /// Recurse into subdirectories (default: true)
    pub recursive: Option<bool>,
    /// Document private members as well (default: false)
    pub extract_private: Option<bool>,
}

/// Write a Doxyfile for the project, derived from a language preset.
pub async fn handle_create_project(
    state: &ServerState,
    request: CreateProjectRequest,
) -> Result<String, String> {
    if !PROJECT_NAME_RE.is_match(&request.project_name) {
        return Err(format!(
            "Invalid project name '{}': must not be empty or contain quotes or line breaks",
            request.project_name
        ));
    }

    let dir = match request.path.as_deref() {
        Some(p) => {
            let expanded = expand_tilde(p);
            let path = PathBuf::from(expanded.as_ref());
            tokio::fs::create_dir_all(&path)
                .await
                .map_err(|e| format!("Failed to create project directory '{}': {}", p, e))?;
            tokio::fs::canonicalize(&path)
                .await
                .map_err(|e| format!("Failed to resolve path '{}': {}", p, e))?
        }
        None => state.project_dir().await.ok_or_else(|| {
            "No project configured. Use set_project first, or pass a path.".to_string()
        })?,
    };

    let language = request.language.unwrap_or(Language::Cpp);
    let mut config = DoxyfileConfig::for_language(language);
    config.project_name.clone_from(&request.project_name);
    if let Some(recursive) = request.recursive {
        config.recursive = recursive;
    }
    if let Some(extract_private) = request.extract_private {
        config.extract_private = extract_private;
    }

    let doxyfile_path = dir.join("Doxyfile");
    tokio::fs::write(&doxyfile_path, config.to_doxyfile())
        .await
        .map_err(|e| format!("Failed to write {}: {}", doxyfile_path.display(), e))?;

    tracing::info!(path = %doxyfile_path.display(), "Doxyfile created");

    // Census of files the chosen preset will actually pick up.
    let scan_dir = dir.clone();
    let report = tokio::task::spawn_blocking(move || scan_project(&scan_dir))
        .await
        .map_err(|e| format!("Scan task failed: {}", e))?;
    let matching = report.matching(language.file_patterns());

    Ok(format!(
        "Doxygen project '{}' created.\n\n\
         Doxyfile: {}\n\
         Language preset: {} ({})\n\
         Matching source files: {}\n\
         Output directory: {}\n\n\
         Run generate_docs to build the documentation.",
        request.project_name,
        doxyfile_path.display(),
        language.as_str(),
        config.file_patterns.join(" "),
        matching,
        config.output_directory,
    ))
}
