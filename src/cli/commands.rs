//! CLI command implementations.

use std::path::Path;

use crate::graph::{Graph, VisitStep};
use crate::io::read_edge_list_from_path;
use crate::types::GraphResult;

/// Print the adjacency-list representation of an edge-list file.
pub fn cmd_print(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let graph = read_edge_list_from_path(path, directed)?;
    if json {
        let adjacency: serde_json::Map<String, serde_json::Value> = (1..=graph.vertex_count())
            .map(|v| {
                let targets: Vec<usize> = graph.neighbors(v).map(|e| e.target()).collect();
                (v.to_string(), serde_json::json!(targets))
            })
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Run a breadth-first traversal and print the visit steps.
pub fn cmd_bfs(path: &Path, start: usize, directed: bool, json: bool) -> GraphResult<()> {
    let mut graph = read_edge_list_from_path(path, directed)?;
    graph.init_search();
    let steps = graph.breadth_first_search(start)?;
    print_steps(&steps, json);
    Ok(())
}

/// Run a depth-first traversal and print the visit steps.
pub fn cmd_dfs(path: &Path, start: usize, directed: bool, json: bool) -> GraphResult<()> {
    let mut graph = read_edge_list_from_path(path, directed)?;
    graph.init_search();
    let steps = graph.depth_first_search(start)?;
    print_steps(&steps, json);
    Ok(())
}

/// Find the fewest-edges path between two vertices.
pub fn cmd_path(path: &Path, start: usize, end: usize, directed: bool, json: bool) -> GraphResult<()> {
    let mut graph = read_edge_list_from_path(path, directed)?;
    let vertices = graph.find_path(start, end)?;
    if json {
        println!("{}", serde_json::json!({ "path": vertices }));
    } else {
        let rendered: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
        println!("{}", rendered.join(" -> "));
    }
    Ok(())
}

/// Label connected components.
pub fn cmd_components(path: &Path, directed: bool, json: bool) -> GraphResult<()> {
    let mut graph = read_edge_list_from_path(path, directed)?;
    let components = graph.connected_components()?;
    if json {
        let map: serde_json::Map<String, serde_json::Value> = components
            .iter()
            .map(|(id, members)| (id.to_string(), serde_json::json!(members)))
            .collect();
        println!("{}", serde_json::Value::Object(map));
    } else {
        for (id, members) in &components {
            let rendered: Vec<String> = members.iter().map(|v| v.to_string()).collect();
            println!("component {}: {}", id, rendered.join(" "));
        }
    }
    Ok(())
}

/// Find a cycle reachable from a start vertex.
pub fn cmd_cycles(path: &Path, start: usize, directed: bool, json: bool) -> GraphResult<()> {
    let mut graph = read_edge_list_from_path(path, directed)?;
    graph.init_search();
    let (ancestor, descendant) = graph.find_cycles(start)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "ancestor": ancestor, "descendant": descendant })
        );
    } else {
        println!(
            "cycle closes through the back edge from {} to {}",
            descendant, ancestor
        );
    }
    Ok(())
}

/// Find articulation vertices reachable from a start vertex.
pub fn cmd_articulation(path: &Path, start: usize, directed: bool, json: bool) -> GraphResult<()> {
    let mut graph = read_edge_list_from_path(path, directed)?;
    graph.init_search();
    let vertices = graph.find_articulation_vertices(start)?;
    if json {
        println!("{}", serde_json::json!({ "articulation_vertices": vertices }));
    } else if vertices.is_empty() {
        println!("no articulation vertices reachable from {}", start);
    } else {
        let rendered: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
        println!("articulation vertices: {}", rendered.join(" "));
    }
    Ok(())
}

fn print_steps(steps: &[VisitStep], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string(steps).unwrap_or_default()
        );
        return;
    }
    for step in steps {
        match step {
            VisitStep::Vertex(v) => println!("vertex {}", v),
            VisitStep::Edge(x, y) => println!("edge {} -> {}", x, y),
        }
    }
}
