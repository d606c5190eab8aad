use serde::Serialize;

use crate::graph::{Graph, NodeId};

/// Degree of one node.
///
/// `in_degree` and `out_degree` are only set for directed graphs, where
/// `degree` is their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeRow {
    pub node: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_degree: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_degree: Option<usize>,
    pub degree: usize,
}

/// Node attaining a maximum degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeLeader {
    pub node: NodeId,
    pub degree: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeReport {
    pub directed: bool,
    /// One row per node, sorted by identifier
    pub rows: Vec<DegreeRow>,
    pub max_degree: Option<DegreeLeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_in: Option<DegreeLeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_out: Option<DegreeLeader>,
    pub average_degree: f64,
}

/// First node in store order with the largest `degree_of`
fn leader<'a>(
    nodes: impl Iterator<Item = &'a str>,
    degree_of: impl Fn(&str) -> usize,
) -> Option<DegreeLeader> {
    let mut best: Option<DegreeLeader> = None;
    for node in nodes {
        let degree = degree_of(node);
        if best.as_ref().map_or(true, |b| degree > b.degree) {
            best = Some(DegreeLeader {
                node: node.to_string(),
                degree,
            });
        }
    }
    best
}

/// Degree table and statistics for every node.
///
/// Ties for a maximum go to the node inserted first.
pub fn degree_report(graph: &Graph) -> DegreeReport {
    let directed = graph.is_directed();
    let total = |node: &str| graph.degree(node).unwrap_or(0);

    let mut rows: Vec<DegreeRow> = graph
        .nodes()
        .map(|node| DegreeRow {
            node: node.to_string(),
            in_degree: directed.then(|| graph.in_degree(node).unwrap_or(0)),
            out_degree: directed.then(|| graph.out_degree(node).unwrap_or(0)),
            degree: total(node),
        })
        .collect();
    rows.sort_by(|a, b| a.node.cmp(&b.node));

    let (highest_in, highest_out) = if directed {
        (
            leader(graph.nodes(), |n| graph.in_degree(n).unwrap_or(0)),
            leader(graph.nodes(), |n| graph.out_degree(n).unwrap_or(0)),
        )
    } else {
        (None, None)
    };

    let average_degree = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|r| r.degree).sum::<usize>() as f64 / rows.len() as f64
    };

    DegreeReport {
        directed,
        max_degree: leader(graph.nodes(), total),
        highest_in,
        highest_out,
        average_degree,
        rows,
    }
}
