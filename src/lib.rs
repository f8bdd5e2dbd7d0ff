//! # depgraph
//!
//! Static module dependency graphs for JavaScript/TypeScript source trees.
//!
//! depgraph walks a directory, gives every file and directory a stable
//! integer id, scans source files for `import ... from '...'` statements,
//! resolves relative specifiers the way module loaders do (exact file,
//! inferred extension, directory index) and records, per file, its direct
//! dependencies and the dependencies one hop further.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use depgraph::build_graph;
//! use std::path::Path;
//!
//! let graph = build_graph(Path::new(".")).unwrap();
//! for node in graph.nodes.values() {
//!     println!("{} -> {:?}", node.name, node.dependencies);
//! }
//! graph.save(Path::new("dependencyGraph.json")).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod parser;
pub mod render;

// Re-exports for convenience
pub use config::GraphConfig;
pub use error::{DepGraphError, Result};

pub use graph::{
    build_graph, build_graph_with_config, DependencyGraph, Discovery, GraphBuilder, GraphStats,
    IdentityAssigner, Node,
};
pub use parser::{extract_imports, root_module, SpecifierResolver};
