//! Read-only analytics over a [`Graph`]
//!
//! - `degree`: per-node degree rows and aggregate statistics
//! - `properties`: counts, connectivity, density and cycles
//! - `neighbors`: single-node neighbor listing with edge weights
//!
//! Nothing here mutates the graph.

mod cycles;
mod degree;
mod neighbors;
mod properties;

pub use cycles::{cycle_basis, simple_cycles};
pub use degree::{degree_report, DegreeLeader, DegreeReport, DegreeRow};
pub use neighbors::{neighbors_of, NeighborEntry, NeighborReport};
pub use properties::{
    properties_report, properties_report_with_limit, Connectivity, PropertiesReport,
    DEFAULT_MAX_CYCLES,
};

use crate::graph::Graph;
use petgraph::graph::{DiGraph, NodeIndex};

/// Copy `graph` into a petgraph `DiGraph`. Node indices follow the store's
/// node order; undirected edges are added once.
pub(crate) fn to_petgraph(graph: &Graph) -> DiGraph<&str, f64> {
    let mut pg = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    let indices: std::collections::HashMap<&str, NodeIndex> =
        graph.nodes().map(|node| (node, pg.add_node(node))).collect();

    for edge in graph.edges() {
        if let (Some(&from), Some(&to)) = (indices.get(edge.from), indices.get(edge.to)) {
            pg.add_edge(from, to, edge.cost().value());
        }
    }
    pg
}
