//! Doxygen and Graphviz subprocess invocation.

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::process::Command;

/// Summary of one documentation generation run.
#[derive(Debug)]
pub struct RunReport {
    /// Number of `warning:` lines Doxygen emitted on stderr.
    pub warning_count: usize,
}

/// Name of the doxygen binary, overridable via the `DOXYGEN_PATH` env var.
pub fn doxygen_binary() -> String {
    std::env::var("DOXYGEN_PATH").unwrap_or_else(|_| "doxygen".to_string())
}

/// Runs `doxygen --version` and returns the trimmed version string.
pub async fn doxygen_version() -> Result<String> {
    let binary = doxygen_binary();
    let output = Command::new(&binary)
        .arg("--version")
        .output()
        .await
        .with_context(|| {
            format!(
                "Failed to execute '{binary} --version'. \
                 Install Doxygen (https://www.doxygen.nl/) or set DOXYGEN_PATH."
            )
        })?;

    anyhow::ensure!(
        output.status.success(),
        "'{} --version' exited with {}",
        binary,
        output.status
    );

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Runs `doxygen Doxyfile` inside the project directory.
///
/// Requires an existing Doxyfile; errors before touching the binary when it
/// is missing so the caller can point the user at create_project.
pub async fn run_doxygen(project_dir: &Path) -> Result<RunReport> {
    let doxyfile = project_dir.join("Doxyfile");
    anyhow::ensure!(
        doxyfile.exists(),
        "No Doxyfile found in {}. Use create_project to generate one.",
        project_dir.display()
    );

    let binary = doxygen_binary();
    tracing::info!(project = %project_dir.display(), "Running doxygen");

    let output = Command::new(&binary)
        .current_dir(project_dir)
        .arg("Doxyfile")
        .output()
        .await
        .with_context(|| format!("Failed to execute '{binary}'"))?;

    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        tracing::error!(
            project = %project_dir.display(),
            stderr = %stderr,
            "Documentation generation failed"
        );
        anyhow::bail!(
            "doxygen exited with {} for {}: {}",
            output.status,
            project_dir.display(),
            stderr.trim()
        );
    }

    let warning_count = stderr.lines().filter(|l| l.contains("warning:")).count();
    if warning_count > 0 {
        tracing::warn!(warnings = warning_count, "Doxygen reported warnings");
    }

    Ok(RunReport { warning_count })
}

/// Probes for Graphviz. Absence is not an error, diagrams are optional.
pub async fn graphviz_version() -> Option<String> {
    let output = Command::new("dot").arg("-V").output().await.ok()?;
    if !output.status.success() {
        return None;
    }
    // dot prints its version banner on stderr.
    let banner = String::from_utf8_lossy(&output.stderr);
    let banner = banner.trim();
    if banner.is_empty() {
        None
    } else {
        Some(banner.to_string())
    }
}
