//! Human-readable text for engine results and analytics reports
//!
//! Every function returns the text instead of printing it so the menu and
//! the one-shot commands share the same layout.

use std::collections::BTreeMap;

use graf_core::analytics::{Connectivity, DegreeLeader, DegreeReport, NeighborReport, PropertiesReport};
use graf_core::graph::{
    DistanceTable, Graph, NodeId, Reach, SearchResult, ShortestPath, TraversalStep,
};

const TABLE_RULE: usize = 80;
const REPORT_RULE: usize = 60;
const NEIGHBOR_RULE: usize = 70;

pub fn arrow_path(path: &[NodeId]) -> String {
    path.join(" -> ")
}

fn bracket_list(nodes: &[NodeId]) -> String {
    format!("[{}]", nodes.join(", "))
}

fn banner(title: &str, width: usize) -> Vec<String> {
    let indent = width.saturating_sub(title.len()) / 2;
    vec![
        "=".repeat(width),
        format!("{}{}", " ".repeat(indent), title),
        "=".repeat(width),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Step log of a verbose BFS/DFS run.
///
/// `depth_first` selects the DFS wording for explore lines.
pub fn traversal_steps(label: &str, depth_first: bool, result: &SearchResult) -> String {
    let mut lines = Vec::new();
    for step in &result.steps {
        match step {
            TraversalStep::Start { node, target } => {
                lines.push(String::new());
                lines.push(format!("--- {label} Traversal Details ---"));
                lines.push(format!("Starting node: {node}"));
                lines.push(format!("Target node: {target}"));
                lines.push(String::new());
                lines.push("Visiting nodes in order:".to_string());
            }
            TraversalStep::Visit { step, node, parent } => match parent {
                Some(parent) => lines.push(format!("Step {step}: Visit {node} (from {parent})")),
                None => lines.push(format!("Step {step}: Visit {node} (start node)")),
            },
            TraversalStep::Explore { node, neighbors } if depth_first => lines.push(format!(
                "  Exploring from {node}, unvisited neighbors: {}",
                bracket_list(neighbors)
            )),
            TraversalStep::Explore { node, neighbors } => {
                lines.push(String::new());
                lines.push(format!(
                    "Exploring from {node}, neighbors: {}",
                    bracket_list(neighbors)
                ));
            }
            TraversalStep::Backtrack { node } => {
                lines.push(format!("  Backtracking from {node} (no unvisited neighbors)"));
            }
            TraversalStep::Found { target, visited } => {
                lines.push(String::new());
                lines.push(format!("✓ Target node {target} found!"));
                lines.push(format!("Total nodes visited: {visited}"));
                lines.push(format!(
                    "Nodes visited in order: {}",
                    arrow_path(&result.visited_order)
                ));
            }
            TraversalStep::Exhausted { visited } => {
                lines.push(String::new());
                lines.push("✗ No path found".to_string());
                lines.push(format!("Total nodes visited: {visited}"));
                lines.push(format!("Nodes visited: {}", result.visited_order.join(", ")));
            }
        }
    }
    lines.join("\n")
}

/// Closing lines of a BFS/DFS run
pub fn search_summary(label: &str, result: &SearchResult) -> String {
    match (&result.path, result.hops) {
        (Some(path), Some(hops)) => format!(
            "{label} path from {} to {}: {}\nNumber of steps: {hops}",
            result.start,
            result.end,
            arrow_path(path)
        ),
        _ => format!("No path exists between {} and {}", result.start, result.end),
    }
}

pub fn shortest_path(result: &ShortestPath) -> String {
    match (&result.path, result.distance) {
        (Some(path), Some(distance)) => format!(
            "Shortest path from {} to {}: {}\nTotal distance: {distance}",
            result.start,
            result.end,
            arrow_path(path)
        ),
        _ => format!("No path exists between {} and {}", result.start, result.end),
    }
}

pub fn distance_table(start: &str, end: &str, table: &DistanceTable) -> String {
    let mut lines = vec![
        String::new(),
        format!("Dijkstra's Algorithm Table (Start: {start}, End: {end})"),
        "=".repeat(TABLE_RULE),
    ];

    let mut header = format!("{:<6}{:<10}{:<15}", "Step", "Current", "Visited");
    for column in &table.columns {
        header.push_str(&format!("{column:<8}"));
    }
    lines.push(header.trim_end().to_string());
    lines.push("-".repeat(TABLE_RULE));

    for row in &table.rows {
        let settled = format!("{{{}}}", row.settled.join(", "));
        let mut line = format!("{:<6}{:<10}{:<15}", row.step, row.current, settled);
        for distance in &row.distances {
            line.push_str(&format!("{distance:<8}"));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push("=".repeat(TABLE_RULE));
    lines.join("\n")
}

pub fn reach(start: &str, paths: &BTreeMap<NodeId, Reach>) -> String {
    let mut lines = vec![format!("Reachable from {start}:")];
    for (node, route) in paths {
        lines.push(format!(
            "  {node}: {} ({})",
            arrow_path(&route.path),
            plural(route.distance, "hop", "hops")
        ));
    }
    lines.join("\n")
}

fn leader_line(title: &str, leader: Option<&DegreeLeader>) -> Option<String> {
    leader.map(|l| format!("  {title}: {} ({})", l.node, l.degree))
}

pub fn degree(report: &DegreeReport) -> String {
    let mut lines = vec![String::new()];
    lines.extend(banner("GRAPH DEGREE ANALYSIS", REPORT_RULE));
    lines.push(String::new());

    if report.directed {
        lines.push("Graph Type: DIRECTED".to_string());
        lines.push(String::new());
        lines.push(format!(
            "{:<10} {:<15} {:<15} {}",
            "Node", "In-Degree", "Out-Degree", "Total Degree"
        ));
        lines.push("-".repeat(REPORT_RULE));
        for row in &report.rows {
            lines.push(format!(
                "{:<10} {:<15} {:<15} {}",
                row.node,
                row.in_degree.unwrap_or(0),
                row.out_degree.unwrap_or(0),
                row.degree
            ));
        }
    } else {
        lines.push("Graph Type: UNDIRECTED".to_string());
        lines.push(String::new());
        lines.push(format!("{:<10} {}", "Node", "Degree"));
        lines.push("-".repeat(REPORT_RULE));
        for row in &report.rows {
            lines.push(format!("{:<10} {}", row.node, row.degree));
        }
    }

    lines.push(String::new());
    lines.push("Degree Statistics:".to_string());
    lines.extend(leader_line("Highest In-Degree", report.highest_in.as_ref()));
    lines.extend(leader_line("Highest Out-Degree", report.highest_out.as_ref()));
    lines.extend(leader_line("Highest Degree", report.max_degree.as_ref()));
    lines.push(format!("  Average Degree: {:.2}", report.average_degree));
    lines.push("=".repeat(REPORT_RULE));
    lines.join("\n")
}

pub fn properties(report: &PropertiesReport) -> String {
    let mut lines = vec![String::new()];
    lines.extend(banner("GRAPH PROPERTIES", REPORT_RULE));
    lines.push(format!(
        "  Type: {}",
        if report.directed { "directed" } else { "undirected" }
    ));
    lines.push(format!("  Nodes: {}", report.node_count));
    lines.push(format!("  Edges: {}", report.edge_count));

    match &report.connectivity {
        Connectivity::Undirected {
            connected,
            components,
        } => lines.push(format!(
            "  Connected: {} ({})",
            yes_no(*connected),
            plural(*components, "component", "components")
        )),
        Connectivity::Directed {
            weakly_connected,
            strongly_connected,
            weak_components,
            strong_components,
        } => {
            lines.push(format!(
                "  Weakly connected: {} ({})",
                yes_no(*weakly_connected),
                plural(*weak_components, "component", "components")
            ));
            lines.push(format!(
                "  Strongly connected: {} ({})",
                yes_no(*strongly_connected),
                plural(*strong_components, "component", "components")
            ));
        }
    }

    lines.push(format!("  Density: {:.3}", report.density));
    lines.push(format!("  Isolated nodes: {}", report.isolated_nodes));
    lines.push(format!("  Has cycle: {}", yes_no(report.has_cycle)));

    if !report.cycles.is_empty() {
        let title = if report.directed {
            "Simple cycles"
        } else {
            "Cycle basis"
        };
        lines.push(String::new());
        lines.push(format!("{title} ({}):", report.cycles.len()));
        for cycle in &report.cycles {
            let mut closed = cycle.clone();
            closed.extend(cycle.first().cloned());
            lines.push(format!("  {}", arrow_path(&closed)));
        }
        if report.cycles_truncated {
            lines.push("  ... more cycles not listed".to_string());
        }
    }
    lines.push("=".repeat(REPORT_RULE));
    lines.join("\n")
}

pub fn neighbors(report: &NeighborReport) -> String {
    let node = &report.node;
    let mut lines = vec![String::new()];
    lines.extend(banner(&format!("NEIGHBORS OF NODE '{node}'"), NEIGHBOR_RULE));
    lines.push(String::new());

    if report.neighbors.is_empty() {
        lines.push(format!("Node '{node}' has no neighbors."));
    } else {
        lines.push(format!(
            "Node '{node}' has {} neighbor(s):",
            report.neighbors.len()
        ));
        for entry in &report.neighbors {
            lines.push(format!("  → {} (weight: {})", entry.node, entry.weight_label()));
        }
    }
    lines.push("=".repeat(NEIGHBOR_RULE));
    lines.join("\n")
}

/// Node and edge listing, the text stand-in for a graph drawing
pub fn graph_listing(graph: &Graph, show_weights: bool) -> String {
    let kind = if graph.is_directed() {
        "Directed"
    } else {
        "Undirected"
    };
    let connector = if graph.is_directed() { "->" } else { "-" };

    let nodes: Vec<&str> = graph.nodes().collect();
    let mut lines = vec![
        format!(
            "{kind} graph: {}, {}",
            plural(graph.node_count(), "node", "nodes"),
            plural(graph.edge_count(), "edge", "edges")
        ),
        format!("Nodes: {}", nodes.join(", ")),
        "Edges:".to_string(),
    ];
    for edge in graph.edges() {
        let mut line = format!("  {} {connector} {}", edge.from, edge.to);
        if show_weights {
            line.push_str(&format!(" (weight: {})", edge.cost()));
        }
        lines.push(line);
    }
    lines.join("\n")
}
