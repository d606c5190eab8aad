//! Property tests: engine results checked against brute-force path
//! enumeration on small random graphs.

use graf_core::analytics::properties_report_with_limit;
use graf_core::error::GrafError;
use graf_core::graph::{bfs, dfs, dijkstra, dijkstra_with_table, Graph};
use proptest::prelude::*;

const MAX_NODES: usize = 6;

fn label(i: usize) -> String {
    format!("N{i}")
}

#[derive(Debug, Clone)]
struct Fixture {
    directed: bool,
    nodes: usize,
    edges: Vec<(usize, usize, u8)>,
}

impl Fixture {
    fn build(&self, unit: bool) -> Graph {
        let mut graph = Graph::new(self.directed);
        for i in 0..self.nodes {
            graph.add_node(label(i));
        }
        for &(u, v, w) in &self.edges {
            let weight = (!unit).then_some(f64::from(w));
            graph.add_edge(&label(u), &label(v), weight).unwrap();
        }
        graph
    }
}

fn arb_fixture() -> impl Strategy<Value = Fixture> {
    (1..=MAX_NODES, any::<bool>()).prop_flat_map(|(nodes, directed)| {
        prop::collection::vec((0..nodes, 0..nodes, 1u8..10), 0..12).prop_map(move |edges| {
            Fixture {
                directed,
                nodes,
                edges,
            }
        })
    })
}

/// Every simple path from `start` to `end` as (hops, cost)
fn all_paths(graph: &Graph, start: &str, end: &str) -> Vec<(usize, f64)> {
    fn walk(graph: &Graph, path: &mut Vec<String>, end: &str, cost: f64, out: &mut Vec<(usize, f64)>) {
        let current = path.last().unwrap().clone();
        if current == end {
            out.push((path.len() - 1, cost));
            return;
        }
        for edge in graph.edges_from(&current) {
            if path.iter().any(|p| p == edge.to) {
                continue;
            }
            path.push(edge.to.to_string());
            walk(graph, path, end, cost + edge.cost().value(), out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    walk(graph, &mut vec![start.to_string()], end, 0.0, &mut out);
    out
}

fn is_valid_path(graph: &Graph, path: &[String], start: &str, end: &str) -> bool {
    path.first().map(String::as_str) == Some(start)
        && path.last().map(String::as_str) == Some(end)
        && path.windows(2).all(|pair| graph.has_edge(&pair[0], &pair[1]))
}

fn path_cost(graph: &Graph, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap().value())
        .sum()
}

fn endpoints(nodes: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..nodes, 0..nodes)
}

fn fixture_with_pair() -> impl Strategy<Value = (Fixture, usize, usize)> {
    arb_fixture().prop_flat_map(|f| {
        let n = f.nodes;
        (Just(f), endpoints(n)).prop_map(|(f, (s, t))| (f, s, t))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bfs_hops_are_minimal((fixture, s, t) in fixture_with_pair()) {
        let graph = fixture.build(false);
        let (start, end) = (label(s), label(t));
        let best = all_paths(&graph, &start, &end).into_iter().map(|(h, _)| h).min();

        let result = bfs(&graph, &start, &end, false).unwrap();
        prop_assert_eq!(result.hops, best);
        if let Some(path) = &result.path {
            prop_assert!(is_valid_path(&graph, path, &start, &end));
        }
        prop_assert!(!result.visited_order.is_empty());
        prop_assert_eq!(result.visited_order.first(), Some(&start));
    }

    #[test]
    fn dijkstra_distance_is_minimal((fixture, s, t) in fixture_with_pair()) {
        let graph = fixture.build(false);
        let (start, end) = (label(s), label(t));
        let best = all_paths(&graph, &start, &end)
            .into_iter()
            .map(|(_, c)| c)
            .min_by(f64::total_cmp);

        let result = dijkstra(&graph, &start, &end).unwrap();
        prop_assert_eq!(result.distance.map(|d| d.value()), best);
        if let Some(path) = &result.path {
            prop_assert!(is_valid_path(&graph, path, &start, &end));
            prop_assert_eq!(Some(path_cost(&graph, path)), best);
        }
    }

    #[test]
    fn dijkstra_with_unit_weights_matches_bfs((fixture, s, t) in fixture_with_pair()) {
        let graph = fixture.build(true);
        let (start, end) = (label(s), label(t));

        let weighted = dijkstra(&graph, &start, &end).unwrap();
        let hops = bfs(&graph, &start, &end, false).unwrap().hops;
        prop_assert_eq!(weighted.distance.map(|d| d.value()), hops.map(|h| h as f64));
    }

    #[test]
    fn dijkstra_table_agrees_with_plain((fixture, s, t) in fixture_with_pair()) {
        let graph = fixture.build(false);
        let (start, end) = (label(s), label(t));

        let plain = dijkstra(&graph, &start, &end).unwrap();
        let tabulated = dijkstra_with_table(&graph, &start, &end).unwrap();
        prop_assert_eq!(&plain, &tabulated.result);

        let table = &tabulated.table;
        prop_assert_eq!(table.columns.len(), graph.node_count());
        prop_assert!(!table.rows.is_empty());
        for (i, row) in table.rows.iter().enumerate() {
            prop_assert_eq!(row.step, i + 1);
            prop_assert_eq!(row.distances.len(), graph.node_count());
        }
    }

    #[test]
    fn dfs_path_is_valid_and_not_shorter((fixture, s, t) in fixture_with_pair()) {
        let graph = fixture.build(false);
        let (start, end) = (label(s), label(t));

        let deep = dfs(&graph, &start, &end, true).unwrap();
        let wide = bfs(&graph, &start, &end, false).unwrap();
        prop_assert_eq!(deep.found(), wide.found());
        if let Some(path) = &deep.path {
            prop_assert!(is_valid_path(&graph, path, &start, &end));
            prop_assert!(deep.hops >= wide.hops);
        }
    }

    #[test]
    fn missing_node_is_not_found((fixture, s, _t) in fixture_with_pair()) {
        let graph = fixture.build(false);
        let start = label(s);

        let bfs_err = bfs(&graph, &start, "MISSING", false).unwrap_err();
        let dfs_err = dfs(&graph, "MISSING", &start, false).unwrap_err();
        let dijkstra_err = dijkstra(&graph, &start, "MISSING").unwrap_err();
        prop_assert!(
            matches!(bfs_err, GrafError::NodeNotFound { .. }),
            "expected NodeNotFound, got {:?}",
            bfs_err
        );
        prop_assert!(
            matches!(dfs_err, GrafError::NodeNotFound { .. }),
            "expected NodeNotFound, got {:?}",
            dfs_err
        );
        prop_assert!(
            matches!(dijkstra_err, GrafError::NodeNotFound { .. }),
            "expected NodeNotFound, got {:?}",
            dijkstra_err
        );
    }

    #[test]
    fn reported_cycles_are_closed_walks(fixture in arb_fixture()) {
        let graph = fixture.build(false);
        let report = properties_report_with_limit(&graph, 16);

        prop_assert_eq!(report.has_cycle, !report.cycles.is_empty());
        for cycle in &report.cycles {
            let n = cycle.len();
            for i in 0..n {
                prop_assert!(graph.has_edge(&cycle[i], &cycle[(i + 1) % n]));
            }
        }
    }
}
