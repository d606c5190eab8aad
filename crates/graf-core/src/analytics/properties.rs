use petgraph::algo::{connected_components, tarjan_scc};
use serde::Serialize;

use crate::analytics::cycles::{cycle_basis, simple_cycles};
use crate::analytics::to_petgraph;
use crate::graph::{Graph, NodeId};

/// Default cap on cycles listed by [`properties_report`]
pub const DEFAULT_MAX_CYCLES: usize = 64;

/// Connectivity summary; which fields apply depends on directedness
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Connectivity {
    Undirected {
        connected: bool,
        components: usize,
    },
    Directed {
        weakly_connected: bool,
        strongly_connected: bool,
        weak_components: usize,
        strong_components: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertiesReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub connectivity: Connectivity,
    /// Edges over the maximum possible edge count; 0 below two nodes
    pub density: f64,
    pub has_cycle: bool,
    /// Nodes with no incident edges
    pub isolated_nodes: usize,
    /// Example cycles: a cycle basis when undirected, simple cycles when
    /// directed. At most the configured limit.
    pub cycles: Vec<Vec<NodeId>>,
    /// More cycles exist than were listed
    pub cycles_truncated: bool,
}

fn density(nodes: usize, edges: usize, directed: bool) -> f64 {
    if nodes < 2 {
        return 0.0;
    }
    let possible = (nodes * (nodes - 1)) as f64;
    if directed {
        edges as f64 / possible
    } else {
        2.0 * edges as f64 / possible
    }
}

/// Global properties of `graph`, listing at most [`DEFAULT_MAX_CYCLES`] cycles.
pub fn properties_report(graph: &Graph) -> PropertiesReport {
    properties_report_with_limit(graph, DEFAULT_MAX_CYCLES)
}

/// Global properties of `graph`, listing at most `max_cycles` cycles.
///
/// An empty graph is reported as not connected. Directed cycle listing is
/// best effort: the search itself can be slow on dense graphs.
#[tracing::instrument(skip(graph), fields(directed = graph.is_directed(), nodes = graph.node_count()))]
pub fn properties_report_with_limit(graph: &Graph, max_cycles: usize) -> PropertiesReport {
    let directed = graph.is_directed();
    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    let pg = to_petgraph(graph);

    // connected_components ignores direction, so this is the weak count
    let weak = connected_components(&pg);
    let sccs = tarjan_scc(&pg);

    let connectivity = if directed {
        Connectivity::Directed {
            weakly_connected: node_count > 0 && weak == 1,
            strongly_connected: node_count > 0 && sccs.len() == 1,
            weak_components: weak,
            strong_components: sccs.len(),
        }
    } else {
        Connectivity::Undirected {
            connected: node_count > 0 && weak == 1,
            components: weak,
        }
    };

    // Ask for one extra cycle to learn whether the list was cut short
    let probe = max_cycles.saturating_add(1);
    let mut cycles = if directed {
        simple_cycles(graph, probe)
    } else {
        cycle_basis(graph, probe)
    };
    let cycles_truncated = cycles.len() > max_cycles;
    cycles.truncate(max_cycles);

    let has_cycle = if directed {
        sccs.iter().any(|c| c.len() > 1) || graph.edges().iter().any(|e| e.from == e.to)
    } else {
        // A cycle basis has edges - nodes + components members
        edge_count + weak > node_count
    };

    let isolated_nodes = graph
        .nodes()
        .filter(|n| graph.degree(n) == Some(0))
        .count();

    tracing::debug!(components = weak, sccs = sccs.len(), has_cycle, "properties computed");

    PropertiesReport {
        node_count,
        edge_count,
        directed,
        connectivity,
        density: density(node_count, edge_count, directed),
        has_cycle,
        isolated_nodes,
        cycles: cycles
            .into_iter()
            .map(|c| c.into_iter().map(str::to_string).collect())
            .collect(),
        cycles_truncated,
    }
}
