//! Shared server state across tool invocations.

use crate::query::QueryEngine;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory state shared by all tool handlers.
///
/// Holds the configured project directory and the query engine built from
/// that project's generated XML. Intentionally simple: no sessions, no
/// persistence. Read-mostly: the engine is replaced only when the project
/// changes or documentation is regenerated, and is itself immutable after
/// construction, so concurrent queries need no further locking.
#[derive(Debug, Default)]
pub struct ServerState {
    project_dir: RwLock<Option<PathBuf>>,
    engine: RwLock<Option<Arc<QueryEngine>>>,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently configured project directory, if any.
    pub async fn project_dir(&self) -> Option<PathBuf> {
        self.project_dir.read().await.clone()
    }

    /// Sets the active project and drops any engine built for the old one.
    pub async fn set_project(&self, dir: PathBuf) {
        *self.project_dir.write().await = Some(dir);
        *self.engine.write().await = None;
    }

    pub async fn engine(&self) -> Option<Arc<QueryEngine>> {
        self.engine.read().await.clone()
    }

    pub async fn set_engine(&self, engine: Arc<QueryEngine>) {
        *self.engine.write().await = Some(engine);
    }

    /// Returns the current engine, building one from the configured
    /// project's XML directory if none exists yet. `None` when no project
    /// has been configured.
    pub async fn engine_or_build(&self) -> Option<Arc<QueryEngine>> {
        if let Some(engine) = self.engine().await {
            return Some(engine);
        }
        let dir = self.project_dir().await?;
        let engine = Arc::new(QueryEngine::new(Self::xml_dir(&dir)));
        self.set_engine(engine.clone()).await;
        Some(engine)
    }

    /// Where Doxygen writes its XML for a project created by this server
    /// (OUTPUT_DIRECTORY `./docs`, default XML_OUTPUT `xml`).
    pub fn xml_dir(project_dir: &Path) -> PathBuf {
        project_dir.join("docs").join("xml")
    }
}
