//! CLI definitions for depgraph.
//!
//! Commands:
//! - build: scan a tree and write the JSON snapshot
//! - render: turn a snapshot into DOT (and optionally PNG)
//! - stats: scan a tree and print summary counts

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depgraph")]
#[command(about = "Static module dependency graph for JS/TS source trees")]
#[command(version)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and write the dependency graph as JSON
    Build {
        /// Traversal root (default: current directory)
        root: Option<PathBuf>,

        /// Output file (default: <root>/dependencyGraph.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (default: <root>/.depgraph.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render a JSON snapshot as a Graphviz graph
    Render {
        /// Snapshot file
        #[arg(default_value = "dependencyGraph.json")]
        snapshot: PathBuf,

        /// DOT output file (default: next to the snapshot)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also produce a PNG with the `dot` tool
        #[arg(long)]
        png: bool,
    },

    /// Print graph statistics without writing a snapshot
    Stats {
        /// Traversal root (default: current directory)
        root: Option<PathBuf>,

        /// Config file (default: <root>/.depgraph.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
