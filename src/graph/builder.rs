//! Graph builder — scans a directory tree and assembles the dependency graph.
//!
//! Construction runs in two phases. [`GraphBuilder::discover`] walks the
//! whole tree and assigns every entry an id; it returns a [`Discovery`]
//! whose id space is frozen. [`Discovery::wire`] then reads each source
//! file, resolves its relative imports against that id space and computes
//! the second-hop `allDependencies` sets.

use ignore::WalkBuilder;
use indexmap::IndexSet;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::identity::{normalize_relative, IdentityAssigner};
use super::types::{DependencyGraph, Node};
use crate::config::GraphConfig;
use crate::error::{DepGraphError, Result};
use crate::parser::{extract_imports, is_relative, root_module, SpecifierResolver};

/// Build the dependency graph for `root`, reading `.depgraph.toml` there if present.
pub fn build_graph(root: &Path) -> Result<DependencyGraph> {
    let config = GraphConfig::load(&GraphConfig::path_for_root(root));
    build_graph_with_config(root, config)
}

pub fn build_graph_with_config(root: &Path, config: GraphConfig) -> Result<DependencyGraph> {
    GraphBuilder::new(root, config)?.discover()?.wire()
}

/// Per-run construction context.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    root: PathBuf,
    config: GraphConfig,
}

impl GraphBuilder {
    /// Fails with [`DepGraphError::RootNotFound`] unless `root` is an existing directory.
    pub fn new(root: &Path, config: GraphConfig) -> Result<Self> {
        let root = root
            .canonicalize()
            .map_err(|_| DepGraphError::RootNotFound(root.to_path_buf()))?;
        if !root.is_dir() {
            return Err(DepGraphError::RootNotFound(root));
        }
        Ok(Self { root, config })
    }

    /// Phase 1: assign ids and levels to every entry and create a node per
    /// source file. Entries named in `ignored_dirs` are pruned with their
    /// contents.
    pub fn discover(self) -> Result<Discovery> {
        let filter_config = self.config.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !filter_config.is_ignored(&entry.file_name().to_string_lossy())
            })
            .build();

        let mut ids = IdentityAssigner::new();
        let mut nodes = BTreeMap::new();
        let mut paths = BTreeMap::new();

        for entry in walker {
            let entry = entry?;
            if entry.depth() == 0 {
                continue;
            }
            let Some(rel) = normalize_relative(&self.root, entry.path()) else {
                continue;
            };
            let level = entry.depth() - 1;
            let id = ids.assign(&rel, level);
            debug!(id, level, path = %rel, "assigned id");

            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if is_dir || !self.config.is_source_file(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let parent = rel.rsplit_once('/').and_then(|(dir, _)| ids.get(dir));
            let module = root_module(&rel, &self.config.root_module_segment);
            nodes.insert(id, Node::new(id, rel, level, parent, module));
            paths.insert(id, entry.into_path());
        }

        info!(
            root = %self.root.display(),
            entries = ids.len(),
            files = nodes.len(),
            "discovery complete"
        );

        Ok(Discovery {
            root: self.root,
            config: self.config,
            ids,
            nodes,
            paths,
        })
    }
}

/// Result of phase 1. Its id space can no longer grow.
#[derive(Debug, Clone)]
pub struct Discovery {
    root: PathBuf,
    config: GraphConfig,
    ids: IdentityAssigner,
    nodes: BTreeMap<u32, Node>,
    paths: BTreeMap<u32, PathBuf>,
}

impl Discovery {
    pub fn ids(&self) -> &IdentityAssigner {
        &self.ids
    }

    pub fn nodes(&self) -> &BTreeMap<u32, Node> {
        &self.nodes
    }

    /// Phase 2: fill `dependencies` and `allDependencies` for every node.
    ///
    /// Files are scanned in parallel; results are applied in id order so the
    /// graph matches a sequential run. Any unreadable file aborts the build.
    pub fn wire(self) -> Result<DependencyGraph> {
        let resolver = SpecifierResolver::from_config(&self.config);
        let scanned: Vec<(u32, FileScan)> = {
            let files: Vec<(u32, &PathBuf)> =
                self.paths.iter().map(|(&id, p)| (id, p)).collect();
            files
                .par_iter()
                .map(|&(id, path)| self.scan_file(path, &resolver).map(|scan| (id, scan)))
                .collect::<Result<Vec<_>>>()?
        };

        let Discovery { ids, mut nodes, .. } = self;

        let mut unresolved = 0;
        for (id, scan) in scanned {
            unresolved += scan.unresolved;
            if let Some(node) = nodes.get_mut(&id) {
                debug!(file = %node.name, dependencies = ?scan.dependencies, "wired");
                node.dependencies = scan.dependencies;
            }
        }

        let direct: BTreeMap<u32, Vec<u32>> = nodes
            .iter()
            .map(|(&id, node)| (id, node.dependencies.clone()))
            .collect();
        for node in nodes.values_mut() {
            node.all_dependencies = second_hop(&node.dependencies, &direct);
        }

        let edges: usize = nodes.values().map(|n| n.dependencies.len()).sum();
        debug!(unresolved, "relative specifiers left unresolved");
        info!(files = nodes.len(), edges, "wiring complete");

        let (node_to_id_map, node_to_level_map) = ids.into_maps();
        Ok(DependencyGraph {
            node_to_id_map,
            node_to_level_map,
            nodes,
        })
    }

    fn scan_file(&self, path: &Path, resolver: &SpecifierResolver) -> Result<FileScan> {
        let bytes = fs::read(path).map_err(|e| DepGraphError::io(path, e))?;
        let source = String::from_utf8_lossy(&bytes);
        let dir = path.parent().unwrap_or(&self.root);

        let mut scan = FileScan::default();
        for specifier in extract_imports(&source) {
            if !is_relative(&specifier) {
                continue;
            }
            match self.known_file(resolver.resolve(&specifier, dir)) {
                Some(id) => scan.dependencies.push(id),
                None => scan.unresolved += 1,
            }
        }
        Ok(scan)
    }

    /// Id of a resolved path, only if it is a node inside the root.
    fn known_file(&self, resolved: Option<PathBuf>) -> Option<u32> {
        let rel = normalize_relative(&self.root, &resolved?)?;
        self.ids.get(&rel).filter(|id| self.nodes.contains_key(id))
    }
}

#[derive(Debug, Default)]
struct FileScan {
    dependencies: Vec<u32>,
    unresolved: usize,
}

/// Deduplicated union of the direct dependencies of each id in `deps`.
fn second_hop(deps: &[u32], direct: &BTreeMap<u32, Vec<u32>>) -> IndexSet<u32> {
    deps.iter()
        .filter_map(|dep| direct.get(dep))
        .flatten()
        .copied()
        .collect()
}
