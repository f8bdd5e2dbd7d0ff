//! Error types for depgraph.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a graph construction run.
///
/// Unresolved import specifiers are deliberately absent: they are
/// expected (package imports, typos, deleted files) and only drop an edge.
#[derive(Debug, Error)]
pub enum DepGraphError {
    #[error("traversal root not found or not a directory: {0}")]
    RootNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("invalid graph snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("render failed: {0}")]
    Render(String),
}

impl DepGraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DepGraphError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DepGraphError>;
