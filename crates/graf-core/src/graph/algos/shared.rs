use crate::error::{GrafError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{NodeId, SearchResult, TraversalStep};
use std::collections::HashMap;

/// Look up both endpoints, failing with `NodeNotFound` for the first
/// one missing. Returns the graph-owned identifiers.
pub fn resolve_endpoints<'a>(graph: &'a Graph, start: &str, end: &str) -> Result<(&'a str, &'a str)> {
    let from = graph
        .node(start)
        .ok_or_else(|| GrafError::node_not_found(start))?;
    let to = graph.node(end).ok_or_else(|| GrafError::node_not_found(end))?;
    Ok((from, to))
}

pub fn to_owned_path(path: &[&str]) -> Vec<NodeId> {
    path.iter().map(|s| (*s).to_string()).collect()
}

/// Walk `previous` back from `end` to `start` and return the path in
/// forward order. `None` when `end` was never reached.
pub fn reconstruct_path<'a>(
    start: &'a str,
    end: &'a str,
    previous: &HashMap<&'a str, &'a str>,
) -> Option<Vec<&'a str>> {
    if start != end && !previous.contains_key(end) {
        return None;
    }

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = *previous.get(current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

/// Build a BFS/DFS result record
pub fn build_search_result(
    start: &str,
    end: &str,
    path: Option<Vec<&str>>,
    visited_order: &[&str],
    steps: Vec<TraversalStep>,
) -> SearchResult {
    let hops = path.as_ref().map(|p| p.len() - 1);
    SearchResult {
        start: start.to_string(),
        end: end.to_string(),
        path: path.as_deref().map(to_owned_path),
        hops,
        visited_order: to_owned_path(visited_order),
        steps,
    }
}

/// Step log that only records when verbose output was requested
#[derive(Debug, Default)]
pub struct StepLog {
    enabled: bool,
    steps: Vec<TraversalStep>,
}

impl StepLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            steps: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a step; the closure only runs when the log is enabled
    pub fn record(&mut self, step: impl FnOnce() -> TraversalStep) {
        if self.enabled {
            let step = step();
            tracing::trace!(?step, "traversal_step");
            self.steps.push(step);
        }
    }

    pub fn into_steps(self) -> Vec<TraversalStep> {
        self.steps
    }
}
