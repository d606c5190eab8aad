use crate::error::Result;
use crate::graph::algos::shared::{reconstruct_path, resolve_endpoints, to_owned_path};
use crate::graph::store::Graph;
use crate::graph::traversal::SearchOptions;
use crate::graph::types::{Distance, DistanceTable, ShortestPath, TableRow, TabulatedPath};
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap, HashSet};

/// Min-heap entry ordered by accumulated cost, then node id.
///
/// The node id tiebreak makes equal-cost entries pop in ascending
/// identifier order, so results do not depend on heap internals.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<'a> {
    cost: Distance,
    node: &'a str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .value()
            .total_cmp(&other.cost.value())
            .then_with(|| self.node.cmp(other.node))
    }
}

/// Snapshot recorder for the table variant
struct TableRecorder<'a> {
    columns: Vec<&'a str>,
    rows: Vec<TableRow>,
}

impl<'a> TableRecorder<'a> {
    fn new(graph: &'a Graph) -> Self {
        let mut columns: Vec<&str> = graph.nodes().collect();
        columns.sort_unstable();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    fn record<'s>(
        &mut self,
        current: &str,
        settled: impl IntoIterator<Item = &'s str>,
        distances: &HashMap<&'a str, Distance>,
    ) {
        let settled: BTreeSet<&str> = settled.into_iter().collect();
        let row = TableRow {
            step: self.rows.len() + 1,
            current: current.to_string(),
            settled: settled.into_iter().map(str::to_string).collect(),
            distances: self
                .columns
                .iter()
                .map(|node| distances.get(node).copied().unwrap_or(Distance::INFINITY))
                .collect(),
        };
        self.rows.push(row);
    }

    fn finish(self) -> DistanceTable {
        DistanceTable {
            columns: to_owned_path(&self.columns),
            rows: self.rows,
        }
    }
}

/// Tentative distances and predecessors left behind by one run
struct Relaxation<'a> {
    distances: HashMap<&'a str, Distance>,
    previous: HashMap<&'a str, &'a str>,
    /// Nodes popped with a final distance, the target included
    settled: usize,
}

/// Shared algorithm core.
///
/// Stale heap entries are skipped on pop instead of being decreased in
/// place. The loop stops as soon as `end` is settled.
fn relax<'a>(
    graph: &'a Graph,
    start: &'a str,
    end: &'a str,
    opts: &SearchOptions,
    mut table: Option<&mut TableRecorder<'a>>,
) -> Result<Relaxation<'a>> {
    let mut distances: HashMap<&str, Distance> = HashMap::from([(start, Distance::ZERO)]);
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut heap = BinaryHeap::from([Reverse(HeapEntry {
        cost: Distance::ZERO,
        node: start,
    })]);

    // The initial row shows the start as if already settled
    if let Some(t) = table.as_deref_mut() {
        t.record(start, [start], &distances);
    }

    while let Some(Reverse(HeapEntry { cost, node: current })) = heap.pop() {
        opts.check_cancelled()?;

        if !settled.insert(current) {
            continue;
        }
        if current == end {
            break;
        }

        let mut updated = false;
        for edge in graph.edges_from(current) {
            if settled.contains(edge.to) {
                continue;
            }
            let candidate = cost + edge.cost();
            let best = distances.get(edge.to).copied().unwrap_or(Distance::INFINITY);
            if candidate < best {
                tracing::trace!(node = edge.to, via = current, distance = candidate.value(), "relaxed");
                distances.insert(edge.to, candidate);
                previous.insert(edge.to, current);
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    node: edge.to,
                }));
                updated = true;
            }
        }

        if updated {
            if let Some(t) = table.as_deref_mut() {
                t.record(current, settled.iter().copied(), &distances);
            }
        }
    }

    Ok(Relaxation {
        distances,
        previous,
        settled: settled.len(),
    })
}

fn to_shortest_path(start: &str, end: &str, relaxation: &Relaxation<'_>) -> ShortestPath {
    match reconstruct_path(start, end, &relaxation.previous) {
        Some(path) => ShortestPath {
            start: start.to_string(),
            end: end.to_string(),
            path: Some(to_owned_path(&path)),
            distance: relaxation.distances.get(end).copied(),
        },
        None => ShortestPath::unreachable(start, end),
    }
}

/// Weighted shortest path from `start` to `end`.
///
/// Unweighted edges cost 1. An unreachable target is reported as a result
/// with no path, not as an error.
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Result<ShortestPath> {
    dijkstra_search(graph, start, end, &SearchOptions::default())
}

#[tracing::instrument(skip(graph, opts), fields(directed = graph.is_directed()))]
pub fn dijkstra_search(
    graph: &Graph,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<ShortestPath> {
    let (start, end) = resolve_endpoints(graph, start, end)?;
    let relaxation = relax(graph, start, end, opts, None)?;
    let result = to_shortest_path(start, end, &relaxation);
    tracing::debug!(
        found = result.found(),
        settled = relaxation.settled,
        discovered = relaxation.distances.len(),
        "dijkstra finished"
    );
    Ok(result)
}

/// Dijkstra that also returns a step-by-step distance table.
///
/// The table starts with one row for the start node and gains a row for
/// every settled node that improved at least one tentative distance.
pub fn dijkstra_with_table(graph: &Graph, start: &str, end: &str) -> Result<TabulatedPath> {
    dijkstra_table_search(graph, start, end, &SearchOptions::default())
}

#[tracing::instrument(skip(graph, opts), fields(directed = graph.is_directed()))]
pub fn dijkstra_table_search(
    graph: &Graph,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<TabulatedPath> {
    let (start, end) = resolve_endpoints(graph, start, end)?;
    let mut recorder = TableRecorder::new(graph);
    let relaxation = relax(graph, start, end, opts, Some(&mut recorder))?;
    let result = to_shortest_path(start, end, &relaxation);
    let table = recorder.finish();
    tracing::debug!(found = result.found(), rows = table.rows.len(), "dijkstra table finished");
    Ok(TabulatedPath { result, table })
}

#[cfg(test)]
mod tests;
