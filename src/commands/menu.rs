//! `graf menu` - interactive numbered menu over stdin
//!
//! Mirrors a classic console menu: display, shortest path, additional
//! search methods, analytics and switching between the sample graphs.
//! End of input behaves like choosing Exit.

use std::io::{self, BufRead, Write};

use graf_core::analytics::{degree_report, neighbors_of, properties_report_with_limit};
use graf_core::error::{GrafError, Result};
use graf_core::graph::{sample_graph, Graph, GraphKind};

use crate::commands::path::{self, Algorithm};
use crate::commands::{render, show, Context};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    ShowGraph,
    ShowWeighted,
    ShortestPath,
    AdditionalMethods,
    Analytics,
    SwitchGraph,
    Exit,
}

impl MainChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MainChoice::ShowGraph),
            "2" => Some(MainChoice::ShowWeighted),
            "3" => Some(MainChoice::ShortestPath),
            "4" => Some(MainChoice::AdditionalMethods),
            "5" => Some(MainChoice::Analytics),
            "6" => Some(MainChoice::SwitchGraph),
            "7" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdditionalChoice {
    Run(Algorithm),
    Back,
}

impl AdditionalChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(AdditionalChoice::Run(Algorithm::Bfs)),
            "2" => Some(AdditionalChoice::Run(Algorithm::Dfs)),
            "3" => Some(AdditionalChoice::Run(Algorithm::DijkstraTable)),
            "4" => Some(AdditionalChoice::Back),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalyticsChoice {
    Degree,
    Properties,
    Neighbors,
    Back,
}

impl AnalyticsChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(AnalyticsChoice::Degree),
            "2" => Some(AnalyticsChoice::Properties),
            "3" => Some(AnalyticsChoice::Neighbors),
            "4" => Some(AnalyticsChoice::Back),
            _ => None,
        }
    }
}

fn parse_graph_choice(input: &str) -> Option<GraphKind> {
    match input {
        "1" => Some(GraphKind::Undirected),
        "2" => Some(GraphKind::Directed),
        _ => None,
    }
}

/// Whether the menu keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct MenuSession<'c, R> {
    ctx: &'c Context,
    kind: GraphKind,
    graph: Graph,
    input: R,
}

impl<'c, R: BufRead> MenuSession<'c, R> {
    fn new(ctx: &'c Context, kind: GraphKind, input: R) -> Result<Self> {
        Ok(Self {
            ctx,
            kind,
            graph: sample_graph(kind)?,
            input,
        })
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn node_list(&self) -> String {
        self.graph.nodes().collect::<Vec<_>>().join(", ")
    }

    /// Main-menu Dijkstra, with the table when `output.table` is set
    fn shortest_path_algorithm(&self) -> Algorithm {
        Algorithm::dijkstra(self.ctx.config.output.table)
    }

    fn graph_title(&self) -> &'static str {
        if self.kind.is_directed() {
            "DIRECTED"
        } else {
            "UNDIRECTED"
        }
    }

    fn run(&mut self) -> Result<()> {
        println!("=== WELCOME TO THE GRAPH ANALYSIS TOOL ===");
        println!("{} graph loaded with nodes {}", self.kind, self.node_list());

        loop {
            println!();
            println!("=== {} GRAPH ANALYSIS MENU ===", self.graph_title());
            println!("1. Display Graph (basic)");
            println!("2. Display Weighted Graph");
            println!("3. Find Shortest Path (Dijkstra)");
            println!("4. Additional Methods");
            println!("5. Graph Analytics");
            println!("6. Switch Graph Type");
            println!("7. Exit");

            let Some(answer) = self.prompt("Enter your choice (1-7): ")? else {
                break;
            };
            let flow = match MainChoice::parse(&answer) {
                Some(MainChoice::ShowGraph) => {
                    show::execute(self.ctx, &self.graph, false)?;
                    Flow::Continue
                }
                Some(MainChoice::ShowWeighted) => {
                    show::execute(self.ctx, &self.graph, true)?;
                    Flow::Continue
                }
                Some(MainChoice::ShortestPath) => self.run_path(self.shortest_path_algorithm())?,
                Some(MainChoice::AdditionalMethods) => self.additional_methods()?,
                Some(MainChoice::Analytics) => self.analytics()?,
                Some(MainChoice::SwitchGraph) => self.switch_graph()?,
                Some(MainChoice::Exit) => Flow::Quit,
                None => {
                    println!("Invalid choice! Please try again.");
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn additional_methods(&mut self) -> Result<Flow> {
        loop {
            println!();
            println!("--- Additional Methods ---");
            println!("1. BFS (Breadth-First Search)");
            println!("2. DFS (Depth-First Search)");
            println!("3. Dijkstra with Table");
            println!("4. Back to Main Menu");

            let Some(answer) = self.prompt("Enter your choice (1-4): ")? else {
                return Ok(Flow::Quit);
            };
            match AdditionalChoice::parse(&answer) {
                Some(AdditionalChoice::Run(algorithm)) => {
                    if self.run_path(algorithm)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Some(AdditionalChoice::Back) => return Ok(Flow::Continue),
                None => println!("Invalid choice! Please try again."),
            }
        }
    }

    fn analytics(&mut self) -> Result<Flow> {
        loop {
            println!();
            println!("--- Graph Analytics ---");
            println!("1. Degree Analysis");
            println!("2. Graph Properties");
            println!("3. Node Neighbors");
            println!("4. Back to Main Menu");

            let Some(answer) = self.prompt("Enter your choice (1-4): ")? else {
                return Ok(Flow::Quit);
            };
            match AnalyticsChoice::parse(&answer) {
                Some(AnalyticsChoice::Degree) => {
                    println!("{}", render::degree(&degree_report(&self.graph)));
                }
                Some(AnalyticsChoice::Properties) => {
                    let report =
                        properties_report_with_limit(&self.graph, self.ctx.config.analytics.max_cycles);
                    println!("{}", render::properties(&report));
                }
                Some(AnalyticsChoice::Neighbors) => {
                    let Some(node) = self.prompt("Enter node: ")? else {
                        return Ok(Flow::Quit);
                    };
                    let node = node.to_uppercase();
                    match neighbors_of(&self.graph, &node) {
                        Ok(report) => println!("{}", render::neighbors(&report)),
                        Err(GrafError::NodeNotFound { id }) => {
                            println!("Node '{id}' not found in graph!");
                        }
                        Err(e) => return Err(e),
                    }
                }
                Some(AnalyticsChoice::Back) => return Ok(Flow::Continue),
                None => println!("Invalid choice! Please try again."),
            }
        }
    }

    fn switch_graph(&mut self) -> Result<Flow> {
        println!("=== GRAPH SELECTION ===");
        println!("1. Undirected Graph");
        println!("2. Directed Graph");

        let Some(answer) = self.prompt("Choose graph type (1-2): ")? else {
            return Ok(Flow::Quit);
        };
        match parse_graph_choice(&answer) {
            Some(kind) => {
                self.graph = sample_graph(kind)?;
                self.kind = kind;
                tracing::debug!(%kind, "switched graph");
                println!("Switched to {kind} graph");
            }
            None => println!("Invalid choice. Keeping current graph."),
        }
        Ok(Flow::Continue)
    }

    /// Prompt for endpoints and run one algorithm. Bad input and data
    /// errors are reported and the menu carries on.
    fn run_path(&mut self, algorithm: Algorithm) -> Result<Flow> {
        let Some(start) = self.prompt("Enter start node: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(end) = self.prompt("Enter end node: ")? else {
            return Ok(Flow::Quit);
        };
        let (start, end) = (start.to_uppercase(), end.to_uppercase());

        if !self.graph.has_node(&start) || !self.graph.has_node(&end) {
            println!("Invalid nodes! Please enter nodes from: {}", self.node_list());
            return Ok(Flow::Continue);
        }

        let detail = if algorithm.has_steps() {
            let Some(answer) = self.prompt("Show detailed steps? (y/N): ")? else {
                return Ok(Flow::Quit);
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => true,
                "" => self.ctx.config.output.steps,
                _ => false,
            }
        } else {
            false
        };

        self.ctx.cancel.reset();
        match path::execute(self.ctx, &self.graph, algorithm, &start, &end, detail) {
            Ok(()) => {}
            Err(e @ (GrafError::Interrupted | GrafError::NodeNotFound { .. })) => {
                eprintln!("error: {e}");
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }
}

/// Run the interactive menu on `input` until Exit or end of input
pub fn run(ctx: &Context, kind: GraphKind, input: &mut impl BufRead) -> Result<()> {
    MenuSession::new(ctx, kind, input)?.run()
}
