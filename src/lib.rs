//! doxygen-mcp: an MCP server exposing Doxygen-driven documentation
//! generation and source navigation.
//!
//! The core is the [`query`] module, a small engine over Doxygen's generated
//! XML: it loads the compound index once, resolves symbol names (exact match
//! first, then case-insensitive substring in insertion order), and reads
//! per-compound detail files on demand. Everything else is the surrounding
//! glue: Doxyfile templating, subprocess invocation of the `doxygen` binary,
//! project scanning, and the rmcp tool transport.

pub mod doxyfile;
pub mod doxygen;
pub mod error;
pub mod logging;
pub mod query;
pub mod scan;
pub mod server;
pub mod state;
pub mod tools;

pub use error::FetchError;
pub use query::{CompoundDetail, CompoundRef, MemberInfo, QueryEngine};
pub use state::ServerState;
