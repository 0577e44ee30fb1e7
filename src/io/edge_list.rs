//! Edge-list input: whitespace-separated pairs of vertex ids.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Parse an edge list from any buffered reader. Each pair of
/// whitespace/newline-separated positive integers (x, y) denotes an edge
/// from x to y; there is no header and no vertex-count line. The vertex
/// count is inferred from the ids seen.
///
/// Ids are 1-based; a zero id, a non-integer token, or a dangling
/// unpaired token is reported as [`GraphError::MalformedEdgeList`] with
/// the offending line number.
pub fn read_edge_list<R: BufRead>(reader: R, directed: bool) -> GraphResult<Graph> {
    let mut graph = Graph::new(directed);
    let mut pending: Option<usize> = None;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        last_line = index + 1;
        for token in line.split_whitespace() {
            let vertex = parse_vertex(token, last_line)?;
            match pending.take() {
                None => pending = Some(vertex),
                Some(x) => graph.insert_edge(x, vertex),
            }
        }
    }

    if pending.is_some() {
        return Err(GraphError::MalformedEdgeList {
            line: last_line,
            reason: "odd number of vertex ids; edges come in pairs".to_string(),
        });
    }

    log::debug!(
        "read edge list: {} vertices, {} edges, directed={}",
        graph.vertex_count(),
        graph.edge_count(),
        directed
    );
    Ok(graph)
}

/// Read an edge list from a file path.
pub fn read_edge_list_from_path<P: AsRef<Path>>(path: P, directed: bool) -> GraphResult<Graph> {
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file), directed)
}

fn parse_vertex(token: &str, line: usize) -> GraphResult<usize> {
    let vertex: usize = token.parse().map_err(|_| GraphError::MalformedEdgeList {
        line,
        reason: format!("expected a vertex id, found {:?}", token),
    })?;
    if vertex == 0 {
        return Err(GraphError::MalformedEdgeList {
            line,
            reason: "vertex ids are 1-based; 0 is not a valid id".to_string(),
        });
    }
    Ok(vertex)
}
