//! JSON snapshot save/load for the dependency graph.

use std::fs;
use std::path::Path;
use tracing::info;

use super::types::DependencyGraph;
use crate::error::{DepGraphError, Result};

impl DependencyGraph {
    /// Write the graph as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DepGraphError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| DepGraphError::io(path, e))?;
        info!(path = %path.display(), nodes = self.nodes.len(), "graph saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| DepGraphError::io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}
