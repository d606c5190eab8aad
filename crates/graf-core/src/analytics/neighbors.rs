use serde::Serialize;

use crate::error::{GrafError, Result};
use crate::graph::{Distance, Graph, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborEntry {
    pub node: NodeId,
    /// Explicit edge weight; `None` for edges added without one
    pub weight: Option<f64>,
}

impl NeighborEntry {
    /// Weight for display, `N/A` when the edge has none
    pub fn weight_label(&self) -> String {
        self.weight
            .map_or_else(|| "N/A".to_string(), |w| Distance::new(w).to_string())
    }
}

/// Neighbors of one node in store order (successors when directed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborReport {
    pub node: NodeId,
    pub neighbors: Vec<NeighborEntry>,
}

pub fn neighbors_of(graph: &Graph, node: &str) -> Result<NeighborReport> {
    let node = graph
        .node(node)
        .ok_or_else(|| GrafError::node_not_found(node))?;

    let neighbors = graph
        .edges_from(node)
        .map(|edge| NeighborEntry {
            node: edge.to.to_string(),
            weight: edge.weight,
        })
        .collect();

    Ok(NeighborReport {
        node: node.to_string(),
        neighbors,
    })
}
