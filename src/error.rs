//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for doxygen-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when fetching a compound's detail document fails.
///
/// All variants are recoverable and reportable: a refid that cannot name a
/// file is rejected before any filesystem access, a missing file means the
/// index references documentation that was never generated (or was cleaned
/// up), a parse failure means the file exists but is corrupt. None of these
/// is the same as "symbol not found", which the query engine signals with
/// `None`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Refid contains characters that could escape the XML directory.
    #[error("refid '{refid}' contains invalid characters")]
    InvalidRefid { refid: String },

    /// Detail file not found at the expected path.
    #[error("Details file {} not found", path.display())]
    MissingDetail { path: PathBuf },

    /// Detail file exists but could not be read or parsed.
    #[error("Error parsing {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
