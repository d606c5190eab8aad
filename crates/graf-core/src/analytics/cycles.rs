//! Cycle enumeration for the properties report.
//!
//! Undirected graphs get a cycle basis: one cycle per edge left out of a
//! BFS spanning forest. Directed graphs get their simple cycles, found by a
//! DFS from each node over later nodes only, so every cycle is reported
//! once, rooted at its earliest node.
//!
//! Simple-cycle enumeration is exponential on dense graphs. Both functions
//! stop after `limit` cycles, which bounds the output but not the search.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Graph;

/// Up to `limit` cycles forming a cycle basis of an undirected graph.
///
/// Each cycle is listed as a node sequence without repeating the first
/// node; a self-loop is a one-node cycle.
pub fn cycle_basis(graph: &Graph, limit: usize) -> Vec<Vec<&str>> {
    let parent = spanning_forest(graph);
    let is_tree_edge =
        |u: &str, v: &str| parent.get(v) == Some(&Some(u)) || parent.get(u) == Some(&Some(v));

    let mut cycles = Vec::new();
    for edge in graph.edges() {
        if cycles.len() >= limit {
            break;
        }
        if edge.from == edge.to {
            cycles.push(vec![edge.from]);
        } else if !is_tree_edge(edge.from, edge.to) {
            cycles.push(close_cycle(&parent, edge.from, edge.to));
        }
    }
    cycles
}

/// BFS parent links covering every component, in store order
fn spanning_forest(graph: &Graph) -> HashMap<&str, Option<&str>> {
    let mut parent: HashMap<&str, Option<&str>> = HashMap::new();
    for root in graph.nodes() {
        if parent.contains_key(root) {
            continue;
        }
        parent.insert(root, None);
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for neighbor in graph.neighbors(current) {
                if !parent.contains_key(neighbor) {
                    parent.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }
    }
    parent
}

fn ancestors<'a>(parent: &HashMap<&'a str, Option<&'a str>>, node: &'a str) -> Vec<&'a str> {
    let mut chain = vec![node];
    let mut current = node;
    while let Some(&Some(up)) = parent.get(current) {
        chain.push(up);
        current = up;
    }
    chain
}

/// Tree path `u .. lca .. v`; the non-tree edge `v - u` closes it
fn close_cycle<'a>(parent: &HashMap<&'a str, Option<&'a str>>, u: &'a str, v: &'a str) -> Vec<&'a str> {
    let from_u = ancestors(parent, u);
    let on_u: HashSet<&str> = from_u.iter().copied().collect();

    let mut from_v = Vec::new();
    let mut lca = v;
    for node in ancestors(parent, v) {
        if on_u.contains(node) {
            lca = node;
            break;
        }
        from_v.push(node);
    }

    let mut cycle: Vec<&str> = from_u.into_iter().take_while(|n| *n != lca).collect();
    cycle.push(lca);
    cycle.extend(from_v.into_iter().rev());
    cycle
}

struct CycleSearch<'a> {
    graph: &'a Graph,
    order: HashMap<&'a str, usize>,
    limit: usize,
    cycles: Vec<Vec<&'a str>>,
}

impl<'a> CycleSearch<'a> {
    fn full(&self) -> bool {
        self.cycles.len() >= self.limit
    }

    fn extend(&mut self, root: &'a str, path: &mut Vec<&'a str>, on_path: &mut HashSet<&'a str>) {
        let root_rank = self.order[root];
        let Some(&current) = path.last() else {
            return;
        };
        let graph = self.graph;
        for next in graph.neighbors(current) {
            if self.full() {
                return;
            }
            if next == root {
                self.cycles.push(path.clone());
            } else if self.order[next] > root_rank && on_path.insert(next) {
                path.push(next);
                self.extend(root, path, on_path);
                path.pop();
                on_path.remove(next);
            }
        }
    }
}

/// Up to `limit` simple cycles of a directed graph
pub fn simple_cycles(graph: &Graph, limit: usize) -> Vec<Vec<&str>> {
    let mut search = CycleSearch {
        graph,
        order: graph.nodes().enumerate().map(|(i, n)| (n, i)).collect(),
        limit,
        cycles: Vec::new(),
    };

    for root in graph.nodes() {
        if search.full() {
            break;
        }
        let mut path = vec![root];
        let mut on_path = HashSet::from([root]);
        search.extend(root, &mut path, &mut on_path);
    }

    tracing::trace!(found = search.cycles.len(), limit, "simple cycle search");
    search.cycles
}
