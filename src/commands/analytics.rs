//! `graf degree|properties|neighbors` - read-only graph analytics

use graf_core::analytics::{degree_report, neighbors_of, properties_report_with_limit};
use graf_core::error::Result;
use graf_core::format::OutputFormat;
use graf_core::graph::Graph;

use crate::commands::{render, Context};

pub fn execute_degree(ctx: &Context, graph: &Graph) -> Result<()> {
    let report = degree_report(graph);
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&report)?,
        OutputFormat::Human => println!("{}", render::degree(&report)),
    }
    Ok(())
}

/// `max_cycles` overrides the configured cycle limit
pub fn execute_properties(ctx: &Context, graph: &Graph, max_cycles: Option<usize>) -> Result<()> {
    let limit = max_cycles.unwrap_or(ctx.config.analytics.max_cycles);
    if limit == 0 {
        graf_core::bail_usage!("--max-cycles must be at least 1");
    }

    if graph.is_directed() && !ctx.quiet && ctx.format == OutputFormat::Human {
        eprintln!("note: directed cycle listing is best effort and can be slow on dense graphs");
    }

    let report = properties_report_with_limit(graph, limit);
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&report)?,
        OutputFormat::Human => println!("{}", render::properties(&report)),
    }
    Ok(())
}

pub fn execute_neighbors(ctx: &Context, graph: &Graph, node: &str) -> Result<()> {
    let report = neighbors_of(graph, node)?;
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&report)?,
        OutputFormat::Human => println!("{}", render::neighbors(&report)),
    }
    Ok(())
}
