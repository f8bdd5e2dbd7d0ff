//! Per-project configuration, read from `.depgraph.toml` at the traversal root.
//!
//! Every field has a default, so an empty or missing file yields the
//! conventional JavaScript/TypeScript setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{DepGraphError, Result};

/// Name of the config file looked up under the traversal root.
pub const CONFIG_FILE_NAME: &str = ".depgraph.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Entry names skipped during traversal, contents included.
    pub ignored_dirs: Vec<String>,
    /// File extensions (without dot) that become graph nodes.
    pub source_extensions: Vec<String>,
    /// Extensions tried, in order, when resolving an import specifier.
    pub resolve_extensions: Vec<String>,
    /// Stem of the file looked up inside a directory specifier.
    pub index_file: String,
    /// Path segment marking the parent of top-level modules.
    pub root_module_segment: String,
    /// Snapshot file name, written under the traversal root.
    pub output_file: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ignored_dirs: vec!["node_modules".to_string()],
            source_extensions: ["js", "jsx", "ts", "tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            resolve_extensions: [".js", ".jsx", ".ts", ".tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            index_file: "index".to_string(),
            root_module_segment: "modules".to_string(),
            output_file: "dependencyGraph.json".to_string(),
        }
    }
}

impl GraphConfig {
    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file is silent; a malformed one is logged and ignored.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_strict(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load config from `path`, reporting read and parse errors.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DepGraphError::io(path, e))?;
        toml::from_str(&content).map_err(|source| DepGraphError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config location for a traversal root.
    pub fn path_for_root(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|d| d == name)
    }

    /// True if `name` ends in one of the source extensions.
    pub fn is_source_file(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((_, ext)) => self.source_extensions.iter().any(|e| e == ext),
            None => false,
        }
    }
}
