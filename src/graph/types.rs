//! Core types for the dependency graph.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: u32,
    /// Always true; directories never get a node.
    pub is_file: bool,
    /// Path relative to the traversal root, `/`-separated.
    pub name: String,
    /// Ids of directly imported files, in source order, duplicates kept.
    pub dependencies: Vec<u32>,
    /// Id of the enclosing directory, empty at the traversal root.
    pub level_wise_parents: Vec<u32>,
    /// Reserved for consumers; never populated.
    pub children: Vec<u32>,
    pub level: usize,
    /// `.../modules/<name>` prefix, or `None` outside any module.
    pub nearest_root_module: Option<String>,
    /// Dependencies of the direct dependencies (one hop further), deduplicated.
    pub all_dependencies: IndexSet<u32>,
}

impl Node {
    pub fn new(
        id: u32,
        name: String,
        level: usize,
        parent: Option<u32>,
        nearest_root_module: Option<String>,
    ) -> Self {
        Self {
            id,
            is_file: true,
            name,
            dependencies: Vec::new(),
            level_wise_parents: parent.into_iter().collect(),
            children: Vec::new(),
            level,
            nearest_root_module,
            all_dependencies: IndexSet::new(),
        }
    }

    /// File name without directories, used as the render label.
    pub fn base_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// The finished graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyGraph {
    /// Every visited path (files and directories) to its id, in encounter order.
    pub node_to_id_map: IndexMap<String, u32>,
    /// Id to depth below the traversal root.
    pub node_to_level_map: BTreeMap<u32, usize>,
    /// Source-file nodes keyed by id.
    pub nodes: BTreeMap<u32, Node>,
}

impl DependencyGraph {
    pub fn id_of(&self, path: &str) -> Option<u32> {
        self.node_to_id_map.get(path).copied()
    }

    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Node for a relative path, if that path is a source file.
    pub fn node_by_path(&self, path: &str) -> Option<&Node> {
        self.id_of(path).and_then(|id| self.node(id))
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_entries: self.node_to_id_map.len(),
            file_count: self.nodes.len(),
            other_count: self.node_to_id_map.len().saturating_sub(self.nodes.len()),
            edge_count: self.nodes.values().map(|n| n.dependencies.len()).sum(),
            max_level: self.node_to_level_map.values().copied().max().unwrap_or(0),
        }
    }
}

/// Summary counts for a graph.
///
/// `other_count` covers every id without a node: directories and
/// non-source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_entries: usize,
    pub file_count: usize,
    pub other_count: usize,
    pub edge_count: usize,
    pub max_level: usize,
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} entries ({} source files, {} other), {} edges, max depth {}",
            self.total_entries, self.file_count, self.other_count, self.edge_count, self.max_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_defaults() {
        let node = Node::new(3, "src/a.js".to_string(), 1, Some(1), None);
        assert!(node.is_file);
        assert_eq!(node.level_wise_parents, vec![1]);
        assert!(node.dependencies.is_empty());
        assert!(node.all_dependencies.is_empty());
        assert_eq!(node.base_name(), "a.js");

        let top = Node::new(1, "index.ts".to_string(), 0, None, None);
        assert!(top.level_wise_parents.is_empty());
        assert_eq!(top.base_name(), "index.ts");
    }

    #[test]
    fn test_stats() {
        let mut graph = DependencyGraph::default();
        graph.node_to_id_map.insert("src".to_string(), 1);
        graph.node_to_id_map.insert("src/a.js".to_string(), 2);
        graph.node_to_id_map.insert("src/b.js".to_string(), 3);
        graph.node_to_level_map.insert(1, 0);
        graph.node_to_level_map.insert(2, 1);
        graph.node_to_level_map.insert(3, 1);
        let mut a = Node::new(2, "src/a.js".to_string(), 1, Some(1), None);
        a.dependencies = vec![3, 3];
        graph.nodes.insert(2, a);
        graph
            .nodes
            .insert(3, Node::new(3, "src/b.js".to_string(), 1, Some(1), None));

        let stats = graph.stats();
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.other_count, 1);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.max_level, 1);
        assert_eq!(graph.node_by_path("src/b.js").map(|n| n.id), Some(3));
        assert!(graph.node_by_path("src").is_none());
    }

    #[test]
    fn test_json_field_names() {
        let node = Node::new(1, "a.js".to_string(), 0, None, None);
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("levelWiseParents").is_some());
        assert!(json.get("allDependencies").is_some());
        assert!(json.get("nearestRootModule").unwrap().is_null());
        assert_eq!(json["isFile"], true);
    }
}
