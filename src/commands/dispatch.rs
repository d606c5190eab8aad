//! Command dispatch logic for graf
use std::env;
use std::io;
use std::time::Instant;

use graf_core::config::GrafConfig;
use graf_core::error::Result;
use graf_core::format::OutputFormat;
use graf_core::graph::{sample_graph, CancelToken};
use graf_core::trace_time;

use crate::cli::{Cli, Commands, SearchArgs};
use crate::commands::path::{self, Algorithm};
use crate::commands::{analytics, menu, show, Context};

/// Exit status used when a second Ctrl-C aborts the process
const INTERRUPT_EXIT: i32 = 130;

/// Read `--config`, or `graf.toml` in the working directory when present
pub fn load_config(cli: &Cli) -> Result<GrafConfig> {
    match &cli.config {
        Some(path) => GrafConfig::load(path),
        None => GrafConfig::discover(&env::current_dir()?),
    }
}

pub fn run(cli: &Cli, config: GrafConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let kind = cli.graph.unwrap_or(config.graph.kind);
    let ctx = Context {
        format,
        quiet: cli.quiet,
        config,
        cancel: install_interrupt_handler(),
    };

    let graph = sample_graph(kind)?;
    trace_time!(start, "load_graph", directed = kind.is_directed());

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Bfs(args)) => handle_search(&ctx, &graph, Algorithm::Bfs, args),

        Some(Commands::Dfs(args)) => handle_search(&ctx, &graph, Algorithm::Dfs, args),

        Some(Commands::Dijkstra { nodes, table }) => {
            let algorithm = Algorithm::dijkstra(*table || ctx.config.output.table);
            path::execute(&ctx, &graph, algorithm, &nodes.start, &nodes.end, false)
        }

        Some(Commands::Reach { start }) => path::execute_reach(&ctx, &graph, start),

        Some(Commands::Degree) => analytics::execute_degree(&ctx, &graph),

        Some(Commands::Properties { max_cycles }) => {
            analytics::execute_properties(&ctx, &graph, *max_cycles)
        }

        Some(Commands::Neighbors { node }) => analytics::execute_neighbors(&ctx, &graph, node),

        Some(Commands::Show) => show::execute(&ctx, &graph, true),

        Some(Commands::Menu) => {
            // The menu is interactive; JSON output makes no sense there
            let menu_ctx = Context {
                format: OutputFormat::Human,
                ..ctx
            };
            menu::run(&menu_ctx, kind, &mut io::stdin().lock())
        }
    }
}

fn handle_search(ctx: &Context, graph: &graf_core::graph::Graph, algorithm: Algorithm, args: &SearchArgs) -> Result<()> {
    let detail = args.steps || ctx.config.output.steps;
    path::execute(ctx, graph, algorithm, &args.nodes.start, &args.nodes.end, detail)
}

fn handle_no_command() -> Result<()> {
    println!("graf {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Path finding and analytics on small weighted graphs.");
    println!();
    println!("Run `graf --help` for usage information, or `graf menu` for the interactive menu.");
    Ok(())
}

/// First Ctrl-C cancels the running traversal; a second one exits
fn install_interrupt_handler() -> CancelToken {
    let token = CancelToken::new();
    let handler_token = token.clone();

    let installed = ctrlc::set_handler(move || {
        if handler_token.cancel() {
            std::process::exit(INTERRUPT_EXIT);
        }
        eprintln!("\ninterrupt received; press Ctrl-C again to exit");
    });
    if let Err(e) = installed {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
    }

    token
}
