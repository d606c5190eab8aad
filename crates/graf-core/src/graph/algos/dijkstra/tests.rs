use super::*;
use crate::error::GrafError;
use crate::graph::algos::bfs::bfs;
use crate::graph::samples::{sample_graph, GraphKind};
use crate::graph::traversal::CancelToken;

fn undirected() -> Graph {
    sample_graph(GraphKind::Undirected).unwrap()
}

fn directed() -> Graph {
    sample_graph(GraphKind::Directed).unwrap()
}

fn path_of(result: &ShortestPath) -> Vec<&str> {
    result
        .path
        .as_ref()
        .map(|p| p.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

fn path_cost(graph: &Graph, path: &[&str]) -> f64 {
    path.windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]).unwrap().value())
        .sum()
}

fn row(step: usize, current: &str, settled: &[&str], distances: &[f64]) -> TableRow {
    TableRow {
        step,
        current: current.to_string(),
        settled: settled.iter().map(|s| s.to_string()).collect(),
        distances: distances.iter().map(|d| Distance::new(*d)).collect(),
    }
}

const INF: f64 = f64::INFINITY;

/// A-B-E and A-B-D-E both cost 6. B relaxes E to 6 before D is settled,
/// and D's later offer of 6 is not strictly better, so the direct edge wins.
#[test]
fn test_dijkstra_undirected_tie_resolved_by_relaxation_order() {
    let graph = undirected();
    let result = dijkstra(&graph, "A", "E").unwrap();

    assert_eq!(result.distance, Some(Distance::from(6)));
    assert_eq!(path_of(&result), vec!["A", "B", "E"]);

    // Both tie candidates really are equal cost; the longer one loses
    assert_eq!(path_cost(&graph, &["A", "B", "E"]), 6.0);
    assert_eq!(path_cost(&graph, &["A", "B", "D", "E"]), 6.0);
    assert_ne!(path_of(&result), vec!["A", "B", "D", "E"]);
    // The all-A-C route is strictly worse
    assert_eq!(path_cost(&graph, &["A", "C", "D", "E"]), 7.0);
}

#[test]
fn test_dijkstra_prefers_cheaper_longer_route() {
    let graph = undirected();

    let to_c = dijkstra(&graph, "A", "C").unwrap();
    assert_eq!(path_of(&to_c), vec!["A", "B", "C"]);
    assert_eq!(to_c.distance, Some(Distance::from(3)));

    let to_d = dijkstra(&graph, "A", "D").unwrap();
    assert_eq!(path_of(&to_d), vec!["A", "B", "D"]);
    assert_eq!(to_d.distance, Some(Distance::from(4)));
}

#[test]
fn test_dijkstra_directed() {
    let graph = directed();

    let result = dijkstra(&graph, "A", "E").unwrap();
    assert_eq!(path_of(&result), vec!["A", "B", "D", "E"]);
    assert_eq!(result.distance, Some(Distance::from(6)));

    // Only way back to A is the E -> A edge
    let result = dijkstra(&graph, "B", "A").unwrap();
    assert_eq!(path_of(&result), vec!["B", "D", "E", "A"]);
    assert_eq!(result.distance, Some(Distance::from(11)));
}

#[test]
fn test_dijkstra_start_equals_end() {
    let result = dijkstra(&undirected(), "C", "C").unwrap();

    assert_eq!(path_of(&result), vec!["C"]);
    assert_eq!(result.distance, Some(Distance::ZERO));
}

#[test]
fn test_dijkstra_unreachable() {
    let mut graph = directed();
    graph.add_node("F");

    let result = dijkstra(&graph, "A", "F").unwrap();
    assert!(!result.found());
    assert_eq!(result.distance, None);

    let tabulated = dijkstra_with_table(&graph, "A", "F").unwrap();
    assert!(!tabulated.result.found());
    let f = tabulated.table.columns.iter().position(|c| c == "F").unwrap();
    assert!(tabulated
        .table
        .rows
        .iter()
        .all(|r| !r.distances[f].is_finite()));
}

#[test]
fn test_dijkstra_missing_node() {
    let err = dijkstra(&undirected(), "Z", "A").unwrap_err();
    assert!(matches!(err, GrafError::NodeNotFound { ref id } if id == "Z"));

    let err = dijkstra_with_table(&undirected(), "A", "Z").unwrap_err();
    assert!(matches!(err, GrafError::NodeNotFound { ref id } if id == "Z"));
}

#[test]
fn test_dijkstra_table_undirected() {
    let tabulated = dijkstra_with_table(&undirected(), "A", "E").unwrap();
    let table = &tabulated.table;

    assert_eq!(table.columns, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(
        table.rows,
        vec![
            row(1, "A", &["A"], &[0.0, INF, INF, INF, INF]),
            row(2, "A", &["A"], &[0.0, 1.0, 4.0, INF, INF]),
            row(3, "B", &["A", "B"], &[0.0, 1.0, 3.0, 4.0, 6.0]),
        ]
    );
}

/// C settles without improving anything, so it gets no row
#[test]
fn test_dijkstra_table_skips_steps_without_improvement() {
    let tabulated = dijkstra_with_table(&directed(), "A", "E").unwrap();
    let rows = &tabulated.table.rows;

    assert_eq!(rows.len(), 4);
    let currents: Vec<&str> = rows.iter().map(|r| r.current.as_str()).collect();
    assert_eq!(currents, vec!["A", "A", "B", "D"]);
    assert_eq!(rows[3].settled, vec!["A", "B", "C", "D"]);
    assert_eq!(rows[3].distances.last(), Some(&Distance::from(6)));
}

#[test]
fn test_dijkstra_table_matches_plain_result() {
    for graph in [undirected(), directed()] {
        for start in ["A", "B", "C", "D", "E"] {
            for end in ["A", "B", "C", "D", "E"] {
                let plain = dijkstra(&graph, start, end).unwrap();
                let tabulated = dijkstra_with_table(&graph, start, end).unwrap();
                assert_eq!(plain, tabulated.result, "{start} -> {end}");
                assert!(!tabulated.table.rows.is_empty());
                assert!(tabulated
                    .table
                    .rows
                    .iter()
                    .all(|r| r.distances.len() == graph.node_count()));
            }
        }
    }
}

#[test]
fn test_dijkstra_start_equals_end_table_has_initial_row_only() {
    let tabulated = dijkstra_with_table(&undirected(), "B", "B").unwrap();

    assert_eq!(tabulated.table.rows.len(), 1);
    assert_eq!(tabulated.table.rows[0].current, "B");
    assert_eq!(tabulated.result.distance, Some(Distance::ZERO));
}

#[test]
fn test_dijkstra_unit_weights_match_bfs_hops() {
    let weighted = undirected();
    let mut unit = Graph::undirected();
    for edge in weighted.edges() {
        unit.add_edge(edge.from, edge.to, None).unwrap();
    }

    for start in ["A", "B", "C", "D", "E"] {
        for end in ["A", "B", "C", "D", "E"] {
            let shortest = dijkstra(&unit, start, end).unwrap();
            let hops = bfs(&unit, start, end, false).unwrap().hops.unwrap();
            assert_eq!(shortest.distance, Some(Distance::from(hops as u32)));
        }
    }
}

#[test]
fn test_dijkstra_equal_cost_entries_pop_by_node_id() {
    let mut graph = Graph::directed();
    graph.add_edge("S", "Y", Some(1.0)).unwrap();
    graph.add_edge("S", "X", Some(1.0)).unwrap();
    graph.add_edge("Y", "T", Some(1.0)).unwrap();
    graph.add_edge("X", "T", Some(1.0)).unwrap();

    // X pops before Y and claims T first
    let result = dijkstra(&graph, "S", "T").unwrap();
    assert_eq!(path_of(&result), vec!["S", "X", "T"]);
    assert_eq!(result.distance, Some(Distance::from(2)));
}

#[test]
fn test_dijkstra_cancelled() {
    let token = CancelToken::new();
    token.cancel();
    let opts = SearchOptions::default().with_cancel(token);

    let err = dijkstra_search(&undirected(), "A", "E", &opts).unwrap_err();
    assert!(matches!(err, GrafError::Interrupted));

    let err = dijkstra_table_search(&undirected(), "A", "E", &opts).unwrap_err();
    assert!(matches!(err, GrafError::Interrupted));
}

#[test]
fn test_heap_entry_orders_by_cost_then_node() {
    let a = HeapEntry {
        cost: Distance::from(2),
        node: "B",
    };
    let b = HeapEntry {
        cost: Distance::from(2),
        node: "A",
    };
    let c = HeapEntry {
        cost: Distance::from(1),
        node: "Z",
    };

    let mut heap = BinaryHeap::from([Reverse(a), Reverse(b), Reverse(c)]);
    let order: Vec<&str> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
    assert_eq!(order, vec!["Z", "A", "B"]);
}

/// A -> C stops once C is popped; D and E were reached but never settled
#[test]
fn test_relax_counts_settled_separately_from_discovered() {
    let graph = undirected();
    let relaxation = relax(&graph, "A", "C", &SearchOptions::default(), None).unwrap();

    assert_eq!(relaxation.settled, 3);
    assert_eq!(relaxation.distances.len(), 5);
    assert_eq!(relaxation.distances.get("C"), Some(&Distance::from(3)));
}
