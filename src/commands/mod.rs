//! CLI commands for graf

pub mod analytics;
pub mod dispatch;
pub mod menu;
pub mod path;
pub mod render;
pub mod show;

use graf_core::config::GrafConfig;
use graf_core::format::OutputFormat;
use graf_core::graph::{CancelToken, SearchOptions};

/// Settings shared by every command in one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub config: GrafConfig,
    pub cancel: CancelToken,
}

impl Context {
    /// Search options wired to the Ctrl-C token
    pub fn search_options(&self, verbose: bool) -> SearchOptions {
        SearchOptions::verbose(verbose).with_cancel(self.cancel.clone())
    }

    /// Print a JSON document for `value`
    pub fn print_json(&self, value: &impl serde::Serialize) -> graf_core::error::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
