//! MCP server implementation and tool routing.

use crate::state::ServerState;
use crate::tools::check_install::{CheckInstallRequest, handle_check_install};
use crate::tools::create_project::{CreateProjectRequest, handle_create_project};
use crate::tools::generate_docs::{GenerateDocsRequest, handle_generate_docs};
use crate::tools::list_symbols::{ListSymbolsRequest, handle_list_symbols};
use crate::tools::query_symbol::{QuerySymbolRequest, handle_query_symbol};
use crate::tools::scan_project::{ScanProjectRequest, handle_scan_project};
use crate::tools::set_project::{SetProjectRequest, handle_set_project};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::borrow::Cow;
use std::sync::Arc;

/// MCP server for Doxygen documentation generation and queries.
#[derive(Clone)]
pub struct DoxygenServer {
    /// Shared state (project directory, query engine)
    state: Arc<ServerState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DoxygenServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoxygenServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl DoxygenServer {
    /// Create a new server with empty state.
    pub fn new() -> Self {
        Self {
            state: Arc::new(ServerState::new()),
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }

    #[tool(
        description = "Configure the active project directory. If the project already has generated Doxygen XML, the documentation index is loaded immediately."
    )]
    async fn set_project(
        &self,
        Parameters(request): Parameters<SetProjectRequest>,
    ) -> Result<String, String> {
        handle_set_project(&self.state, request).await
    }

    #[tool(
        description = "Create a Doxyfile for a project. Language presets (cpp, c, python, java) select sensible FILE_PATTERNS and output optimization. XML generation is always enabled so symbol queries work.",
        input_schema = inline_schema_for_type::<CreateProjectRequest>()
    )]
    async fn create_project(
        &self,
        Parameters(request): Parameters<CreateProjectRequest>,
    ) -> Result<String, String> {
        handle_create_project(&self.state, request).await
    }

    #[tool(
        description = "Run doxygen on the project's Doxyfile and reload the documentation index from the generated XML. Reports the Doxygen version and warning count."
    )]
    async fn generate_docs(
        &self,
        Parameters(request): Parameters<GenerateDocsRequest>,
    ) -> Result<String, String> {
        handle_generate_docs(&self.state, request).await
    }

    #[tool(
        description = "Scan a project tree and report file counts per extension. Respects .gitignore and skips hidden files."
    )]
    async fn scan_project(
        &self,
        Parameters(request): Parameters<ScanProjectRequest>,
    ) -> Result<String, String> {
        handle_scan_project(&self.state, request).await
    }

    #[tool(
        description = "Check that Doxygen (required) and Graphviz (optional, for diagrams) are installed, reporting their versions."
    )]
    async fn check_install(
        &self,
        Parameters(_request): Parameters<CheckInstallRequest>,
    ) -> Result<String, String> {
        handle_check_install().await
    }

    #[tool(
        description = "Look up a documented class, struct, namespace, or file by name. Exact matches win; otherwise the first case-insensitive substring match is returned with its brief/detailed descriptions and member declarations."
    )]
    async fn query_symbol(
        &self,
        Parameters(request): Parameters<QuerySymbolRequest>,
    ) -> Result<String, String> {
        handle_query_symbol(&self.state, request).await
    }

    #[tool(
        description = "List all documented symbol names in index order, optionally filtered by compound kind (class, struct, namespace, file, ...)."
    )]
    async fn list_symbols(
        &self,
        Parameters(request): Parameters<ListSymbolsRequest>,
    ) -> Result<String, String> {
        handle_list_symbols(&self.state, request).await
    }
}

impl Default for DoxygenServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for DoxygenServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "doxygen-mcp: Doxygen documentation generation and source navigation. \
                 Start with set_project to point at a source tree, create_project to \
                 write a Doxyfile, and generate_docs to build the documentation. \
                 query_symbol and list_symbols answer lookups against the generated index.",
            )
    }
}

/// Expands a leading `~` or `~/` to the home directory.
///
/// Tool arguments arrive as raw strings from the MCP client, and clients
/// routinely pass `~/project`-style paths that `canonicalize` would reject.
/// Paths without a tilde prefix are borrowed back unchanged.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

/// Builds a tool input schema with subschemas inlined.
///
/// rmcp's default schema generation emits `$ref` entries for nested types,
/// and several MCP clients refuse to render those as enum dropdowns. With
/// `inline_subschemas` set, the `Language` preset shows up as a proper
/// choice list in create_project.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
