//! Built-in sample graphs
//!
//! Both samples share nodes A..E and the same weights. The directed one
//! closes a cycle with `E -> A`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GrafError, Result};
use crate::graph::store::Graph;

/// Which sample graph to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        self == GraphKind::Directed
    }
}

impl FromStr for GraphKind {
    type Err = GrafError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "undirected" => Ok(GraphKind::Undirected),
            "directed" => Ok(GraphKind::Directed),
            other => crate::bail_invalid!("graph kind (expected undirected or directed)", other),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Directed => write!(f, "directed"),
        }
    }
}

const SAMPLE_NODES: [&str; 5] = ["A", "B", "C", "D", "E"];

const UNDIRECTED_EDGES: [(&str, &str, f64); 7] = [
    ("A", "B", 1.0),
    ("A", "C", 4.0),
    ("B", "C", 2.0),
    ("B", "E", 5.0),
    ("B", "D", 3.0),
    ("C", "D", 1.0),
    ("D", "E", 2.0),
];

const DIRECTED_EDGES: [(&str, &str, f64); 7] = [
    ("A", "B", 1.0),
    ("A", "C", 4.0),
    ("B", "C", 2.0),
    ("C", "D", 1.0),
    ("B", "D", 3.0),
    ("D", "E", 2.0),
    ("E", "A", 6.0),
];

/// Build the sample graph of the given kind
pub fn sample_graph(kind: GraphKind) -> Result<Graph> {
    let mut graph = Graph::new(kind.is_directed());
    for node in SAMPLE_NODES {
        graph.add_node(node);
    }

    match kind {
        GraphKind::Undirected => {
            for (from, to, weight) in UNDIRECTED_EDGES {
                graph.add_edge(from, to, Some(weight))?;
            }
        }
        GraphKind::Directed => {
            for (from, to, weight) in DIRECTED_EDGES {
                graph.add_directed_edge(from, to, Some(weight))?;
            }
        }
    }

    tracing::debug!(%kind, nodes = graph.node_count(), edges = graph.edge_count(), "sample_graph");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_sample() {
        let g = sample_graph(GraphKind::Undirected).unwrap();
        assert!(!g.is_directed());
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 7);
        assert_eq!(g.neighbors("B").collect::<Vec<_>>(), vec!["A", "C", "E", "D"]);
    }

    #[test]
    fn test_directed_sample() {
        let g = sample_graph(GraphKind::Directed).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.edge_count(), 7);
        assert!(g.has_edge("E", "A"));
        assert!(!g.has_edge("A", "E"));
    }

    #[test]
    fn test_graph_kind_parse() {
        assert_eq!("Directed".parse::<GraphKind>().unwrap(), GraphKind::Directed);
        assert!("both".parse::<GraphKind>().is_err());
        assert_eq!(GraphKind::Undirected.to_string(), "undirected");
    }
}
