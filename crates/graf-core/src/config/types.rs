//! Configuration type definitions

use crate::format::OutputFormat;
use crate::graph::samples::GraphKind;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "graf.toml";

/// Top-level graf configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrafConfig {
    /// Which sample graph is loaded on startup
    #[serde(default)]
    pub graph: GraphConfig,

    /// Output presentation defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Analytics limits
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Configuration for the loaded graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Sample graph kind (undirected or directed)
    #[serde(default)]
    pub kind: GraphKind,
}

/// Configuration for command output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (human or json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Record BFS/DFS step logs without passing `--steps`
    #[serde(default)]
    pub steps: bool,

    /// Print the Dijkstra distance table without passing `--table`
    #[serde(default)]
    pub table: bool,
}

/// Configuration for analytics reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Maximum number of example cycles listed in the properties report
    #[serde(default = "default_max_cycles")]
    pub max_cycles: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_cycles: default_max_cycles(),
        }
    }
}

fn default_max_cycles() -> usize {
    crate::analytics::DEFAULT_MAX_CYCLES
}
