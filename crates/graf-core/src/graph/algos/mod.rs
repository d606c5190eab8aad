//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first search (hop-count shortest path, full reachability)
//! - `dfs`: Recursive depth-first search with backtracking
//! - `dijkstra`: Weighted shortest path, optionally with a distance table
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::{bfs, bfs_all_paths, bfs_search};
pub use dfs::{dfs, dfs_search};
pub use dijkstra::{dijkstra, dijkstra_search, dijkstra_table_search, dijkstra_with_table};
