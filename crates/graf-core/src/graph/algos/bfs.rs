use crate::error::{GrafError, Result};
use crate::graph::algos::shared::{build_search_result, resolve_endpoints, to_owned_path, StepLog};
use crate::graph::store::Graph;
use crate::graph::traversal::SearchOptions;
use crate::graph::types::{NodeId, Reach, SearchResult, TraversalStep};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Breadth-first search for the fewest-hops path from `start` to `end`.
///
/// Edge weights are ignored. See [`bfs_search`] for cancellation support.
pub fn bfs(graph: &Graph, start: &str, end: &str, verbose: bool) -> Result<SearchResult> {
    bfs_search(graph, start, end, &SearchOptions::verbose(verbose))
}

/// Breadth-first search with explicit options.
///
/// Neighbors are expanded in store order, and the search stops the moment
/// the target is discovered as a neighbor. Among equal-length paths the
/// one found first in that order wins.
#[tracing::instrument(skip(graph, opts), fields(directed = graph.is_directed(), verbose = opts.verbose))]
pub fn bfs_search(
    graph: &Graph,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchResult> {
    let (start, end) = resolve_endpoints(graph, start, end)?;

    if start == end {
        tracing::debug!(node = start, "start equals end");
        return Ok(build_search_result(
            start,
            end,
            Some(vec![start]),
            &[start],
            Vec::new(),
        ));
    }

    let mut log = StepLog::new(opts.verbose);
    let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::from([(start, vec![start])]);
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut visited_order = vec![start];
    let mut step = 1;

    log.record(|| TraversalStep::Start {
        node: start.to_string(),
        target: end.to_string(),
    });
    log.record(|| TraversalStep::Visit {
        step,
        node: start.to_string(),
        parent: None,
    });

    while let Some((current, path)) = queue.pop_front() {
        opts.check_cancelled()?;

        let neighbors = graph.neighbors(current);
        log.record(|| TraversalStep::Explore {
            node: current.to_string(),
            neighbors: neighbors.clone().map(str::to_string).collect(),
        });

        for neighbor in neighbors {
            if !visited.insert(neighbor) {
                continue;
            }

            let mut new_path = path.clone();
            new_path.push(neighbor);
            visited_order.push(neighbor);
            step += 1;

            log.record(|| TraversalStep::Visit {
                step,
                node: neighbor.to_string(),
                parent: Some(current.to_string()),
            });

            if neighbor == end {
                log.record(|| TraversalStep::Found {
                    target: end.to_string(),
                    visited: visited_order.len(),
                });
                tracing::debug!(hops = new_path.len() - 1, visited = visited_order.len(), "bfs found target");
                return Ok(build_search_result(
                    start,
                    end,
                    Some(new_path),
                    &visited_order,
                    log.into_steps(),
                ));
            }

            queue.push_back((neighbor, new_path));
        }
    }

    log.record(|| TraversalStep::Exhausted {
        visited: visited_order.len(),
    });
    tracing::debug!(visited = visited_order.len(), "bfs exhausted without reaching target");
    Ok(build_search_result(
        start,
        end,
        None,
        &visited_order,
        log.into_steps(),
    ))
}

/// Shortest hop-count paths from `start` to every reachable node.
///
/// Unreachable nodes are absent from the map; `start` maps to itself at
/// distance 0.
#[tracing::instrument(skip(graph), fields(directed = graph.is_directed()))]
pub fn bfs_all_paths(graph: &Graph, start: &str) -> Result<BTreeMap<NodeId, Reach>> {
    let start = graph
        .node(start)
        .ok_or_else(|| GrafError::node_not_found(start))?;

    let mut queue: VecDeque<(&str, Vec<&str>)> = VecDeque::from([(start, vec![start])]);
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut paths = BTreeMap::new();
    paths.insert(
        start.to_string(),
        Reach {
            path: vec![start.to_string()],
            distance: 0,
        },
    );

    while let Some((current, path)) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if !visited.insert(neighbor) {
                continue;
            }
            let mut new_path = path.clone();
            new_path.push(neighbor);
            paths.insert(
                neighbor.to_string(),
                Reach {
                    path: to_owned_path(&new_path),
                    distance: new_path.len() - 1,
                },
            );
            queue.push_back((neighbor, new_path));
        }
    }

    tracing::debug!(reachable = paths.len(), "bfs_all_paths");
    Ok(paths)
}
