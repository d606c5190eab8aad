use serde::{Serialize, Serializer};
use std::fmt;

/// Node identifier (a short label such as `"A"`). Matching is exact and
/// case-sensitive; callers normalize user input before lookup.
pub type NodeId = String;

/// Accumulated path cost or a single edge weight.
///
/// Unweighted edges cost [`Distance::DEFAULT`]. Unreached nodes carry
/// [`Distance::INFINITY`], which serializes as `null` and displays as `∞`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const DEFAULT: Distance = Distance(1.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl From<u32> for Distance {
    fn from(hops: u32) -> Self {
        Distance(f64::from(hops))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            f.pad("∞")
        } else if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            f.pad(&format!("{}", self.0 as i64))
        } else {
            f.pad(&self.0.to_string())
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// One event in a verbose BFS/DFS run, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalStep {
    /// Search begins at `node` looking for `target`
    Start { node: NodeId, target: NodeId },
    /// `node` was discovered; `step` counts every node touched so far
    Visit {
        step: usize,
        node: NodeId,
        parent: Option<NodeId>,
    },
    /// Neighbors considered from `node` (DFS lists only unvisited ones)
    Explore { node: NodeId, neighbors: Vec<NodeId> },
    /// DFS found nothing left to explore below `node`
    Backtrack { node: NodeId },
    /// Target reached after `visited` nodes were discovered
    Found { target: NodeId, visited: usize },
    /// Search space exhausted without reaching the target
    Exhausted { visited: usize },
}

/// Result of a BFS or DFS search between two nodes.
///
/// `path` is `None` when the target is unreachable; `visited_order` still
/// covers the component explored from the start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub start: NodeId,
    pub end: NodeId,
    pub path: Option<Vec<NodeId>>,
    pub hops: Option<usize>,
    pub visited_order: Vec<NodeId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<TraversalStep>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Shortest hop-count route to one node, as produced by `bfs_all_paths`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reach {
    pub path: Vec<NodeId>,
    pub distance: usize,
}

/// Result of a Dijkstra search between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub start: NodeId,
    pub end: NodeId,
    pub path: Option<Vec<NodeId>>,
    pub distance: Option<Distance>,
}

impl ShortestPath {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    pub(crate) fn unreachable(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            path: None,
            distance: None,
        }
    }
}

/// One row of the Dijkstra distance table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Row number, starting at 1 for the initial row
    pub step: usize,
    /// Node finalized in this step
    pub current: NodeId,
    /// Settled nodes so far, sorted
    pub settled: Vec<NodeId>,
    /// Tentative distances aligned with [`DistanceTable::columns`]
    pub distances: Vec<Distance>,
}

/// Step-by-step Dijkstra state: every row lists every graph node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable {
    /// All graph nodes, sorted
    pub columns: Vec<NodeId>,
    pub rows: Vec<TableRow>,
}

/// Dijkstra result paired with its distance table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabulatedPath {
    #[serde(flatten)]
    pub result: ShortestPath,
    pub table: DistanceTable,
}
