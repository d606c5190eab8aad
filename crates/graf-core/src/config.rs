//! Configuration for graf
//!
//! Configuration is read from `graf.toml` in the working directory, or from
//! an explicit path. Every key is optional; a missing file means defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{AnalyticsConfig, GrafConfig, GraphConfig, OutputConfig, CONFIG_FILE_NAME};

impl GrafConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GrafConfig = toml::from_str(&content)?;

        if config.analytics.max_cycles == 0 {
            crate::bail_invalid!("analytics.max_cycles", 0);
        }

        tracing::debug!(path = %path.display(), kind = ?config.graph.kind, "config_loaded");
        Ok(config)
    }

    /// Load `graf.toml` from `dir` if present, otherwise return defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
