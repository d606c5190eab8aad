//! Graph store, path-finding engines and sample data
//!
//! - `store`: adjacency store, directed or undirected
//! - `algos`: BFS, DFS and Dijkstra engines
//! - `traversal`: per-call options and cooperative cancellation
//! - `samples`: the built-in A..E sample graphs

pub mod algos;
pub mod samples;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs, bfs_all_paths, bfs_search, dfs, dfs_search, dijkstra, dijkstra_search,
    dijkstra_table_search, dijkstra_with_table,
};
pub use samples::{sample_graph, GraphKind};
pub use store::{EdgeRef, Graph, Neighbors};
pub use traversal::{CancelToken, SearchOptions};
pub use types::{
    Distance, DistanceTable, NodeId, Reach, SearchResult, ShortestPath, TableRow, TabulatedPath,
    TraversalStep,
};
