//! In-memory graph store
//!
//! Nodes keep their insertion order, and each adjacency list keeps the
//! order edges were first added. Traversals iterate neighbors in exactly
//! this order, which decides tie-breaking between equal-length paths.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{GrafError, Result};
use crate::graph::types::{Distance, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Adjacent {
    target: usize,
    weight: Option<f64>,
}

/// Borrowed view of one stored edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRef<'a> {
    pub from: &'a str,
    pub to: &'a str,
    /// Explicit weight, `None` when the edge was added without one
    pub weight: Option<f64>,
}

impl EdgeRef<'_> {
    /// Weight used for path costs (unweighted edges cost 1)
    pub fn cost(&self) -> Distance {
        self.weight.map_or(Distance::DEFAULT, Distance::new)
    }
}

/// Directed or undirected graph with optional edge weights.
///
/// Directedness is fixed at construction. In an undirected graph every
/// edge is traversable from both endpoints.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    labels: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    outgoing: Vec<Vec<Adjacent>>,
    incoming: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The graph's own copy of identifier `id`, if present
    pub fn node(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.labels[i].as_str())
    }

    /// Insert a node. Returns `false` if it already existed.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        if self.index.contains_key(&id) {
            return false;
        }
        self.intern(id);
        true
    }

    /// Insert an edge honoring the graph's directedness.
    ///
    /// Missing endpoints are added as nodes. Re-adding an existing edge
    /// overwrites its weight and keeps its position in neighbor order.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<f64>) -> Result<()> {
        if let Some(w) = weight {
            if !w.is_finite() || w < 0.0 {
                return Err(GrafError::InvalidWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight: w,
                });
            }
        }

        let u = self.intern(from.to_string());
        let v = self.intern(to.to_string());

        let inserted = self.link(u, v, weight);
        if self.directed {
            if inserted {
                self.incoming[v].push(u);
            }
        } else if u != v {
            self.link(v, u, weight);
        }

        if inserted {
            self.edge_count += 1;
        }
        tracing::trace!(from, to, ?weight, inserted, "add_edge");
        Ok(())
    }

    /// Insert a directed edge `from -> to`.
    ///
    /// Only valid on a directed graph; on an undirected graph the call is
    /// logged as a warning, the graph is left unchanged and
    /// [`GrafError::InvalidOperation`] is returned.
    pub fn add_directed_edge(&mut self, from: &str, to: &str, weight: Option<f64>) -> Result<()> {
        if !self.directed {
            tracing::warn!(from, to, "undirected graph: use add_edge instead");
            return Err(GrafError::InvalidOperation(format!(
                "cannot add directed edge {} -> {} to an undirected graph",
                from, to
            )));
        }
        self.add_edge(from, to, weight)
    }

    /// Node identifiers in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Directly reachable nodes from `id`, in insertion order.
    ///
    /// Unknown nodes yield an empty sequence. The iterator is `Clone`, so
    /// it can be restarted.
    pub fn neighbors<'a>(&'a self, id: &str) -> Neighbors<'a> {
        let slots = self
            .index
            .get(id)
            .map(|&i| self.outgoing[i].as_slice())
            .unwrap_or(&[]);
        Neighbors {
            labels: &self.labels,
            inner: slots.iter(),
        }
    }

    /// Outgoing edges of `id` with their stored weights
    pub fn edges_from<'a>(&'a self, id: &str) -> impl Iterator<Item = EdgeRef<'a>> + 'a {
        let from = self.index.get(id).copied();
        from.into_iter().flat_map(move |u| {
            self.outgoing[u].iter().map(move |adj| EdgeRef {
                from: &self.labels[u],
                to: &self.labels[adj.target],
                weight: adj.weight,
            })
        })
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.find(from, to).is_some()
    }

    /// Cost of the edge `from -> to`: its stored weight, 1 when it has
    /// none, or `None` when there is no such edge.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Distance> {
        self.find(from, to)
            .map(|adj| adj.weight.map_or(Distance::DEFAULT, Distance::new))
    }

    /// Every edge once, grouped by source in node order
    pub fn edges(&self) -> Vec<EdgeRef<'_>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, adjacent) in self.outgoing.iter().enumerate() {
            for adj in adjacent {
                // Undirected edges are stored twice; keep the copy seen first
                if !self.directed && adj.target < u {
                    continue;
                }
                edges.push(EdgeRef {
                    from: &self.labels[u],
                    to: &self.labels[adj.target],
                    weight: adj.weight,
                });
            }
        }
        edges
    }

    pub fn out_degree(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|&i| self.outgoing[i].len())
    }

    pub fn in_degree(&self, id: &str) -> Option<usize> {
        if !self.directed {
            return self.degree(id);
        }
        self.index.get(id).map(|&i| self.incoming[i].len())
    }

    /// Incident edge count; a self-loop counts twice when undirected
    pub fn degree(&self, id: &str) -> Option<usize> {
        let i = *self.index.get(id)?;
        if self.directed {
            return Some(self.outgoing[i].len() + self.incoming[i].len());
        }
        let self_loops = self.outgoing[i].iter().filter(|a| a.target == i).count();
        Some(self.outgoing[i].len() + self_loops)
    }

    fn intern(&mut self, id: NodeId) -> usize {
        if let Some(&i) = self.index.get(&id) {
            return i;
        }
        let i = self.labels.len();
        self.index.insert(id.clone(), i);
        self.labels.push(id);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        i
    }

    /// Add or update `u -> v`; returns whether the edge is new
    fn link(&mut self, u: usize, v: usize, weight: Option<f64>) -> bool {
        if let Some(adj) = self.outgoing[u].iter_mut().find(|a| a.target == v) {
            adj.weight = weight;
            return false;
        }
        self.outgoing[u].push(Adjacent { target: v, weight });
        true
    }

    fn find(&self, from: &str, to: &str) -> Option<&Adjacent> {
        let u = *self.index.get(from)?;
        let v = *self.index.get(to)?;
        self.outgoing[u].iter().find(|a| a.target == v)
    }
}

/// Lazy, restartable sequence of neighbor identifiers
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    labels: &'a [NodeId],
    inner: std::slice::Iter<'a, Adjacent>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|adj| self.labels[adj.target].as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
