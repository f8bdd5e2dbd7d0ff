//! Graphviz output for a finished dependency graph.
//!
//! One vertex per file node, labeled by base name, and one edge per entry in
//! `dependencies`. Second-hop sets are not drawn.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::warn;

use crate::error::{DepGraphError, Result};
use crate::graph::DependencyGraph;

/// Convert the graph to DOT text.
///
/// Edges pointing at an id without a node (hand-edited snapshots) are
/// skipped with a warning.
pub fn to_dot(graph: &DependencyGraph) -> String {
    let mut lines = vec![
        "digraph DependencyGraph {".to_string(),
        "    rankdir=LR;".to_string(),
        "    node [shape=box, fontname=\"Helvetica\", fontsize=11];".to_string(),
        String::new(),
    ];

    for node in graph.nodes.values() {
        lines.push(format!(
            "    \"{}\" [label=\"{}\", tooltip=\"{}\"];",
            node.id,
            escape_label(node.base_name()),
            escape_label(&node.name)
        ));
    }

    lines.push(String::new());

    let mut dangling = 0;
    for node in graph.nodes.values() {
        for dep in &node.dependencies {
            if !graph.nodes.contains_key(dep) {
                dangling += 1;
                continue;
            }
            lines.push(format!("    \"{}\" -> \"{}\";", node.id, dep));
        }
    }
    if dangling > 0 {
        warn!(dangling, "skipped edges to unknown node ids");
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Render DOT text to a PNG with the external `dot` tool.
pub fn write_png(dot: &str, path: &Path) -> Result<()> {
    let mut child = Command::new("dot")
        .arg("-Tpng")
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| DepGraphError::Render(format!("failed to run 'dot' (is Graphviz installed?): {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(dot.as_bytes())
            .map_err(|e| DepGraphError::Render(format!("failed to feed 'dot': {}", e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| DepGraphError::Render(format!("'dot' did not finish: {}", e)))?;
    if !output.status.success() {
        return Err(DepGraphError::Render(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
