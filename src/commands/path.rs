//! `graf bfs|dfs|dijkstra|reach` - path finding between sample nodes

use graf_core::error::Result;
use graf_core::format::OutputFormat;
use graf_core::graph::{bfs_all_paths, bfs_search, dfs_search, dijkstra_search, dijkstra_table_search, Graph};

use crate::commands::{render, Context};

/// Path-finding algorithm picked on the command line or from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    DijkstraTable,
}

impl Algorithm {
    /// Dijkstra, with the distance table when `with_table` is set
    pub fn dijkstra(with_table: bool) -> Self {
        if with_table {
            Algorithm::DijkstraTable
        } else {
            Algorithm::Dijkstra
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::DijkstraTable => "Dijkstra with table",
        }
    }

    /// Whether the algorithm can record a step log
    pub fn has_steps(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }
}

/// Run `algorithm` from `start` to `end` and print the result.
///
/// `detail` turns on the step log for BFS/DFS and is ignored otherwise.
/// An unreachable target is printed as a result, not returned as an error.
pub fn execute(
    ctx: &Context,
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    end: &str,
    detail: bool,
) -> Result<()> {
    tracing::debug!(algorithm = algorithm.label(), start, end, detail, "path_command");

    match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => {
            let opts = ctx.search_options(detail);
            let result = if algorithm == Algorithm::Bfs {
                bfs_search(graph, start, end, &opts)?
            } else {
                dfs_search(graph, start, end, &opts)?
            };

            match ctx.format {
                OutputFormat::Json => ctx.print_json(&result)?,
                OutputFormat::Human => {
                    if !result.steps.is_empty() {
                        println!(
                            "{}",
                            render::traversal_steps(
                                algorithm.label(),
                                algorithm == Algorithm::Dfs,
                                &result
                            )
                        );
                    }
                    println!("{}", render::search_summary(algorithm.label(), &result));
                }
            }
        }
        Algorithm::Dijkstra => {
            let result = dijkstra_search(graph, start, end, &ctx.search_options(false))?;
            match ctx.format {
                OutputFormat::Json => ctx.print_json(&result)?,
                OutputFormat::Human => println!("{}", render::shortest_path(&result)),
            }
        }
        Algorithm::DijkstraTable => {
            let tabulated = dijkstra_table_search(graph, start, end, &ctx.search_options(false))?;
            match ctx.format {
                OutputFormat::Json => ctx.print_json(&tabulated)?,
                OutputFormat::Human => {
                    println!("{}", render::distance_table(start, end, &tabulated.table));
                    println!("{}", render::shortest_path(&tabulated.result));
                }
            }
        }
    }

    Ok(())
}

/// `graf reach <START>`
pub fn execute_reach(ctx: &Context, graph: &Graph, start: &str) -> Result<()> {
    let paths = bfs_all_paths(graph, start)?;
    match ctx.format {
        OutputFormat::Json => ctx.print_json(&paths)?,
        OutputFormat::Human => println!("{}", render::reach(start, &paths)),
    }
    Ok(())
}
