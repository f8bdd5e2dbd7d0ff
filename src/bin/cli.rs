//! depgraph CLI - module dependency graphs for JS/TS source trees.
//!
//! Usage:
//!   depgraph build [root]            # Write <root>/dependencyGraph.json
//!   depgraph render [snapshot]       # Write dependencyGraph.dot next to it
//!   depgraph render --png            # ...and dependencyGraph.png via Graphviz
//!   depgraph stats [root]            # Print counts as JSON

use anyhow::{Context, Result};
use clap::Parser;
use depgraph::cli::{Cli, Commands};
use depgraph::{build_graph_with_config, render, DependencyGraph, GraphConfig};
use std::path::{Path, PathBuf};
use tracing::info;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for `stats`.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            root,
            output,
            config,
        } => {
            let root = resolve_root(root)?;
            let config = load_config(&root, config.as_deref())?;
            let output = output.unwrap_or_else(|| root.join(&config.output_file));

            let graph = build_graph_with_config(&root, config)?;
            graph.save(&output)?;

            let stats = graph.stats();
            println!("✓ Dependency graph generated at {}", output.display());
            println!("  Files:       {}", stats.file_count);
            println!("  Other:       {}", stats.other_count);
            println!("  Edges:       {}", stats.edge_count);
        }

        Commands::Render {
            snapshot,
            output,
            png,
        } => {
            let graph = DependencyGraph::load(&snapshot)
                .with_context(|| format!("cannot load snapshot {}", snapshot.display()))?;
            let dot_path = output.unwrap_or_else(|| snapshot.with_file_name("dependencyGraph.dot"));

            let dot = render::to_dot(&graph);
            std::fs::write(&dot_path, &dot)
                .with_context(|| format!("cannot write {}", dot_path.display()))?;
            info!(path = %dot_path.display(), "DOT written");
            println!("✓ Graph written to {}", dot_path.display());

            if png {
                let png_path = dot_path.with_extension("png");
                render::write_png(&dot, &png_path)?;
                println!("✓ Graph generated at {}", png_path.display());
            }
        }

        Commands::Stats { root, config } => {
            let root = resolve_root(root)?;
            let config = load_config(&root, config.as_deref())?;
            let graph = build_graph_with_config(&root, config)?;
            let json = serde_json::to_string_pretty(&graph.stats())?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("cannot determine current directory"),
    }
}

/// An explicit `--config` must exist and parse; the implicit one may not.
fn load_config(root: &Path, explicit: Option<&Path>) -> Result<GraphConfig> {
    match explicit {
        Some(path) => Ok(GraphConfig::load_strict(path)?),
        None => Ok(GraphConfig::load(&GraphConfig::path_for_root(root))),
    }
}
