//! Graf Core Library
//!
//! Graph store, path-finding engines (BFS, DFS, Dijkstra) and read-only
//! analytics for the graf console tool.

pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
