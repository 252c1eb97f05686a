mod error;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wg_graph::{Graph, GraphBuilder};

use crate::error::{CliError, CliResult};

/// Graph type loaded from YAML files.
type TextGraph = Graph<String, i64>;

#[derive(Parser)]
#[command(name = "wg-cli")]
#[command(about = "Build, transform and print directed weighted graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the built-in word graph, print it, its copy, and every edge
    Demo,
    /// Print the built-in integer graph in canonical text form
    Sample,
    /// Print a graph loaded from a YAML file
    Show {
        /// Path to the graph YAML file
        graph_path: PathBuf,
    },
    /// List every edge of a graph as `from -> to (weight w)`
    Edges {
        /// Path to the graph YAML file
        graph_path: PathBuf,
        /// List edges from last to first
        #[arg(long)]
        reverse: bool,
    },
    /// Rename a node, keeping its edges
    Replace {
        /// Path to the graph YAML file
        graph_path: PathBuf,
        /// Node to rename
        old: String,
        /// New node value
        new: String,
    },
    /// Merge one node into another and print the result
    Merge {
        /// Path to the graph YAML file
        graph_path: PathBuf,
        /// Node folded away
        old: String,
        /// Node receiving the edges
        new: String,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Sample => cmd_sample(),
        Commands::Show { graph_path } => cmd_show(&graph_path),
        Commands::Edges {
            graph_path,
            reverse,
        } => cmd_edges(&graph_path, reverse),
        Commands::Replace {
            graph_path,
            old,
            new,
        } => cmd_replace(&graph_path, &old, new),
        Commands::Merge {
            graph_path,
            old,
            new,
        } => cmd_merge(&graph_path, &old, &new),
    }
}

fn cmd_demo() -> CliResult<()> {
    let mut g: Graph<String, i32> = Graph::new();
    for word in ["hello", "how", "are", "you?"] {
        g.insert_node(word.to_string());
    }

    let edges = [
        ("hello", "how", 5),
        ("hello", "are", 8),
        ("hello", "are", 2),
        ("how", "you?", 1),
        ("how", "hello", 4),
        ("are", "you?", 3),
    ];
    for (from, to, weight) in edges {
        g.insert_edge(&from.to_string(), &to.to_string(), weight)?;
    }

    println!("{g}");

    let copy = g.clone();
    println!("{copy}");

    for edge in &g {
        println!("{} -> {} (weight {})", edge.from, edge.to, edge.weight);
    }
    Ok(())
}

fn cmd_sample() -> CliResult<()> {
    let mut builder = GraphBuilder::new();
    builder.add_nodes([1, 2, 3, 4, 5, 6, 64]);
    let edges = [
        (4, 1, -4),
        (3, 2, 2),
        (2, 4, 2),
        (2, 1, 1),
        (6, 2, 5),
        (6, 3, 10),
        (1, 5, -1),
        (3, 6, -8),
        (4, 5, 3),
        (5, 2, 7),
    ];
    for (from, to, weight) in edges {
        builder.add_edge(from, to, weight);
    }
    let g: Graph<i32, i32> = builder.build()?;

    print!("{g}");
    Ok(())
}

fn cmd_show(graph_path: &Path) -> CliResult<()> {
    let g = load_graph(graph_path)?;
    if g.is_empty() {
        println!("Graph is empty");
    } else {
        print!("{g}");
    }
    Ok(())
}

fn cmd_edges(graph_path: &Path, reverse: bool) -> CliResult<()> {
    let g = load_graph(graph_path)?;
    let print = |edge: wg_graph::EdgeRef<'_, String, i64>| {
        println!("{} -> {} (weight {})", edge.from, edge.to, edge.weight);
    };
    if reverse {
        g.iter().rev().for_each(print);
    } else {
        g.iter().for_each(print);
    }
    Ok(())
}

fn cmd_replace(graph_path: &Path, old: &str, new: String) -> CliResult<()> {
    let mut g = load_graph(graph_path)?;
    if g.replace_node(&old.to_string(), new.clone())? {
        println!("✓ Renamed {old} to {new}");
    } else {
        println!("Node {new} already exists; graph unchanged");
    }
    print!("{g}");
    Ok(())
}

fn cmd_merge(graph_path: &Path, old: &str, new: &str) -> CliResult<()> {
    let mut g = load_graph(graph_path)?;
    let before = g.edge_count();
    g.merge_replace_node(&old.to_string(), &new.to_string())?;
    println!(
        "✓ Merged {old} into {new} ({} edges, was {before})",
        g.edge_count()
    );
    print!("{g}");
    Ok(())
}

fn load_graph(graph_path: &Path) -> CliResult<TextGraph> {
    let text = fs::read_to_string(graph_path).map_err(|source| CliError::GraphFileRead {
        path: graph_path.to_path_buf(),
        source,
    })?;
    let graph: TextGraph =
        serde_yaml::from_str(&text).map_err(|source| CliError::GraphFileParse {
            path: graph_path.to_path_buf(),
            source,
        })?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph from {}",
        graph_path.display()
    );
    Ok(graph)
}
