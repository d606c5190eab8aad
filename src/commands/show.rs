//! `graf show` - list the nodes and edges of the loaded graph

use graf_core::error::Result;
use graf_core::format::OutputFormat;
use graf_core::graph::Graph;

use crate::commands::{render, Context};

/// Execute the show command
pub fn execute(ctx: &Context, graph: &Graph, show_weights: bool) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "directed": graph.is_directed(),
                "nodes": graph.nodes().collect::<Vec<_>>(),
                "edges": graph.edges(),
            });
            ctx.print_json(&output)?;
        }
        OutputFormat::Human => println!("{}", render::graph_listing(graph, show_weights)),
    }
    Ok(())
}
