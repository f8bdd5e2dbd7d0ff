//! Dependency graph module — the structural backbone of depgraph.
//!
//! Provides the identity space, the graph data model, the two-phase
//! builder and JSON persistence.

pub mod builder;
pub mod identity;
pub mod persistence;
pub mod types;

pub use builder::{build_graph, build_graph_with_config, Discovery, GraphBuilder};
pub use identity::{normalize_relative, IdentityAssigner};
pub use types::{DependencyGraph, GraphStats, Node};
