//! CLI argument parsing for graf
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use graf_core::format::OutputFormat;
use graf_core::graph::GraphKind;

/// graf - path finding and analytics on small weighted graphs
#[derive(Parser, Debug)]
#[command(name = "graf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Sample graph to load (undirected or directed)
    #[arg(long, global = true, value_parser = parse_graph_kind)]
    pub graph: Option<GraphKind>,

    /// Configuration file (defaults to ./graf.toml when present)
    #[arg(long, global = true, env = "GRAF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search: path with the fewest hops
    Bfs(SearchArgs),

    /// Depth-first search: first path found
    Dfs(SearchArgs),

    /// Dijkstra: path with the lowest total weight
    Dijkstra {
        #[command(flatten)]
        nodes: NodePair,

        /// Print the step-by-step distance table
        #[arg(long)]
        table: bool,
    },

    /// Fewest-hop paths from a node to every reachable node
    Reach {
        /// Start node
        #[arg(value_parser = parse_node)]
        start: String,
    },

    /// Degree of every node
    Degree,

    /// Node and edge counts, connectivity, density and cycles
    Properties {
        /// Maximum number of cycles to list
        #[arg(long)]
        max_cycles: Option<usize>,
    },

    /// Neighbors of one node with edge weights
    Neighbors {
        /// Node to inspect
        #[arg(value_parser = parse_node)]
        node: String,
    },

    /// List the nodes and edges of the loaded graph
    Show,

    /// Interactive numbered menu
    Menu,
}

#[derive(Args, Debug, Clone)]
pub struct NodePair {
    /// Start node
    #[arg(value_parser = parse_node)]
    pub start: String,

    /// End node
    #[arg(value_parser = parse_node)]
    pub end: String,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub nodes: NodePair,

    /// Print each traversal step
    #[arg(long)]
    pub steps: bool,
}

/// Node identifiers are matched case-sensitively, so normalize to upper case
pub fn parse_node(s: &str) -> Result<String, String> {
    let node = s.trim();
    if node.is_empty() {
        return Err("node identifier must not be empty".to_string());
    }
    Ok(node.to_uppercase())
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_graph_kind(s: &str) -> Result<GraphKind, String> {
    s.parse::<GraphKind>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_node_arguments_are_uppercased() {
        let cli = Cli::try_parse_from(["graf", "bfs", "a", " e "]).unwrap();
        match cli.command {
            Some(Commands::Bfs(args)) => {
                assert_eq!(args.nodes.start, "A");
                assert_eq!(args.nodes.end, "E");
                assert!(!args.steps);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["graf", "dijkstra", "A", "E", "--table", "--format", "json", "--graph", "directed"])
                .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.graph, Some(GraphKind::Directed));
        assert!(matches!(cli.command, Some(Commands::Dijkstra { table: true, .. })));
    }

    #[test]
    fn test_rejects_unknown_format_and_empty_node() {
        assert!(Cli::try_parse_from(["graf", "--format", "records", "show"]).is_err());
        assert!(Cli::try_parse_from(["graf", "neighbors", " "]).is_err());
    }
}
