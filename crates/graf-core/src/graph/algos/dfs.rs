use crate::error::Result;
use crate::graph::algos::shared::{build_search_result, resolve_endpoints, StepLog};
use crate::graph::store::Graph;
use crate::graph::traversal::SearchOptions;
use crate::graph::types::{SearchResult, TraversalStep};
use std::collections::HashSet;

/// Depth-first search for the first path from `start` to `end`.
///
/// The path returned is whichever one the neighbor order reaches first,
/// not necessarily the shortest.
pub fn dfs(graph: &Graph, start: &str, end: &str, verbose: bool) -> Result<SearchResult> {
    dfs_search(graph, start, end, &SearchOptions::verbose(verbose))
}

/// Bookkeeping shared by every recursive call of one search
struct DfsContext<'a, 'o> {
    graph: &'a Graph,
    end: &'a str,
    opts: &'o SearchOptions,
    visited: HashSet<&'a str>,
    visited_order: Vec<&'a str>,
    step: usize,
    log: StepLog,
}

impl<'a> DfsContext<'a, '_> {
    /// Visit `node` with `path` leading up to it. Each branch gets its own
    /// copy of the path; the visited set and step counter are shared.
    ///
    /// Recursion depth is bounded by the node count.
    fn visit(
        &mut self,
        node: &'a str,
        parent: Option<&'a str>,
        mut path: Vec<&'a str>,
    ) -> Result<Option<Vec<&'a str>>> {
        self.opts.check_cancelled()?;

        path.push(node);
        self.visited.insert(node);
        self.visited_order.push(node);
        self.step += 1;

        let step = self.step;
        self.log.record(|| TraversalStep::Visit {
            step,
            node: node.to_string(),
            parent: parent.map(str::to_string),
        });

        if node == self.end {
            let visited = self.visited_order.len();
            self.log.record(|| TraversalStep::Found {
                target: node.to_string(),
                visited,
            });
            return Ok(Some(path));
        }

        if self.log.is_enabled() {
            let unvisited: Vec<String> = self
                .graph
                .neighbors(node)
                .filter(|n| !self.visited.contains(n))
                .map(str::to_string)
                .collect();
            if unvisited.is_empty() {
                self.log.record(|| TraversalStep::Backtrack {
                    node: node.to_string(),
                });
            } else {
                self.log.record(|| TraversalStep::Explore {
                    node: node.to_string(),
                    neighbors: unvisited,
                });
            }
        }

        let graph = self.graph;
        for neighbor in graph.neighbors(node) {
            if self.visited.contains(neighbor) {
                continue;
            }
            if let Some(found) = self.visit(neighbor, Some(node), path.clone())? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

/// Depth-first search with explicit options.
#[tracing::instrument(skip(graph, opts), fields(directed = graph.is_directed(), verbose = opts.verbose))]
pub fn dfs_search(
    graph: &Graph,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> Result<SearchResult> {
    let (start, end) = resolve_endpoints(graph, start, end)?;

    let mut ctx = DfsContext {
        graph,
        end,
        opts,
        visited: HashSet::new(),
        visited_order: Vec::new(),
        step: 0,
        log: StepLog::new(opts.verbose),
    };
    ctx.log.record(|| TraversalStep::Start {
        node: start.to_string(),
        target: end.to_string(),
    });

    let path = ctx.visit(start, None, Vec::new())?;

    match &path {
        Some(p) => tracing::debug!(hops = p.len() - 1, visited = ctx.step, "dfs found target"),
        None => {
            let visited = ctx.visited_order.len();
            ctx.log.record(|| TraversalStep::Exhausted { visited });
            tracing::debug!(visited, "dfs exhausted without reaching target");
        }
    }

    Ok(build_search_result(
        start,
        end,
        path,
        &ctx.visited_order,
        ctx.log.into_steps(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrafError;
    use crate::graph::algos::bfs::bfs;
    use crate::graph::samples::{sample_graph, GraphKind};

    fn path_of(result: &SearchResult) -> Vec<&str> {
        result
            .path
            .as_ref()
            .map(|p| p.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// A -> B -> C -> D -> E along the first neighbor each time
    #[test]
    fn test_dfs_undirected_first_found_path() {
        let graph = sample_graph(GraphKind::Undirected).unwrap();
        let result = dfs(&graph, "A", "E", false).unwrap();

        assert_eq!(path_of(&result), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(result.hops, Some(4));
        assert_eq!(result.visited_order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_dfs_path_not_shorter_than_bfs() {
        let graph = sample_graph(GraphKind::Undirected).unwrap();
        let deep = dfs(&graph, "A", "E", false).unwrap();
        let wide = bfs(&graph, "A", "E", false).unwrap();
        assert!(deep.hops >= wide.hops);
    }

    #[test]
    fn test_dfs_directed() {
        let graph = sample_graph(GraphKind::Directed).unwrap();
        let result = dfs(&graph, "A", "E", false).unwrap();
        assert_eq!(path_of(&result), vec!["A", "B", "C", "D", "E"]);

        let result = dfs(&graph, "D", "C", false).unwrap();
        assert_eq!(path_of(&result), vec!["D", "E", "A", "B", "C"]);
    }

    /// Failed branches must not leak into the returned path
    #[test]
    fn test_dfs_backtracking_uses_path_copies() {
        let mut graph = Graph::directed();
        graph.add_edge("S", "X", None).unwrap();
        graph.add_edge("X", "Y", None).unwrap();
        graph.add_edge("S", "T", None).unwrap();

        let result = dfs(&graph, "S", "T", true).unwrap();

        assert_eq!(path_of(&result), vec!["S", "T"]);
        assert_eq!(result.hops, Some(1));
        assert_eq!(result.visited_order, vec!["S", "X", "Y", "T"]);
        assert!(result.steps.contains(&TraversalStep::Backtrack { node: "Y".into() }));
        assert!(result.steps.contains(&TraversalStep::Visit {
            step: 4,
            node: "T".into(),
            parent: Some("S".into())
        }));
    }

    #[test]
    fn test_dfs_start_equals_end() {
        let graph = sample_graph(GraphKind::Undirected).unwrap();
        let result = dfs(&graph, "B", "B", false).unwrap();

        assert_eq!(path_of(&result), vec!["B"]);
        assert_eq!(result.hops, Some(0));
        assert_eq!(result.visited_order, vec!["B"]);
    }

    #[test]
    fn test_dfs_no_path_reports_component() {
        let mut graph = sample_graph(GraphKind::Undirected).unwrap();
        graph.add_node("F");

        let result = dfs(&graph, "A", "F", true).unwrap();

        assert!(!result.found());
        assert_eq!(result.hops, None);
        assert_eq!(result.visited_order.len(), 5);
        assert_eq!(
            result.steps.last(),
            Some(&TraversalStep::Exhausted { visited: 5 })
        );
    }

    #[test]
    fn test_dfs_missing_node() {
        let graph = sample_graph(GraphKind::Directed).unwrap();
        let err = dfs(&graph, "A", "Q", false).unwrap_err();
        assert!(matches!(err, GrafError::NodeNotFound { ref id } if id == "Q"));
    }
}
