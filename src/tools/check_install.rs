//! Doxygen and Graphviz installation checks.

use crate::doxygen::{doxygen_version, graphviz_version};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CheckInstallRequest {}

/// Verify the external binaries this server depends on.
///
/// Doxygen is required; Graphviz is optional and only affects diagram
/// generation.
pub async fn handle_check_install() -> Result<String, String> {
    let mut response = String::new();

    match doxygen_version().await {
        Ok(version) => {
            let _ = writeln!(response, "Doxygen {} is installed and working.", version);
        }
        Err(e) => return Err(format!("Doxygen is not available: {e}")),
    }

    match graphviz_version().await {
        Some(banner) => {
            let _ = writeln!(response, "Graphviz found: {}", banner);
        }
        None => {
            response.push_str(
                "Graphviz (dot) not found. Diagrams will not be generated; \
                 install it from https://graphviz.org/download/ if you want them.\n",
            );
        }
    }

    Ok(response)
}
