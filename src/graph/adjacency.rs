//! Adjacency-list storage — the graph's core data structure.

use std::collections::HashMap;
use std::fmt;

/// One entry in a vertex's adjacency list: the edge's target vertex, a
/// weight slot reserved for future weighted-graph support (always zero),
/// and the owned link to the next entry in the same list.
#[derive(Debug)]
pub struct EdgeNode {
    target: usize,
    weight: i64,
    next: Option<Box<EdgeNode>>,
}

impl EdgeNode {
    /// The vertex this edge points to.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Reserved weight slot. Always zero in the current implementation.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// The next edge in the same vertex's list, if any.
    pub fn next(&self) -> Option<&EdgeNode> {
        self.next.as_deref()
    }
}

// Adjacency chains are dropped iteratively so a long list cannot blow the
// stack through recursive Box drops.
impl Drop for EdgeNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Iterator over a vertex's adjacency list, newest edge first.
pub struct Neighbors<'a> {
    cursor: Option<&'a EdgeNode>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a EdgeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.cursor?;
        self.cursor = edge.next();
        Some(edge)
    }
}

/// Adjacency-list representation of a directed or undirected graph.
///
/// Vertices are dense positive integers `1..=vertex_count()`; the vertex
/// count is maintained as the largest id seen, which for dense ids equals
/// the number of distinct ids. Edges are insert-only and parallel edges
/// are permitted.
#[derive(Debug)]
pub struct AdjacencyList {
    /// Vertex id -> head of its adjacency list.
    edges: HashMap<usize, Box<EdgeNode>>,
    /// Vertex id -> out-degree.
    degree: HashMap<usize, usize>,
    n_vertices: usize,
    n_edges: usize,
    directed: bool,
}

impl AdjacencyList {
    /// Create an empty adjacency list.
    pub fn new(directed: bool) -> Self {
        Self {
            edges: HashMap::new(),
            degree: HashMap::new(),
            n_vertices: 0,
            n_edges: 0,
            directed,
        }
    }

    /// Insert an edge from `x` to `y`. For an undirected graph the
    /// mirrored arc (y, x) is stored as well, but the logical edge count
    /// increments only once.
    pub fn insert_edge(&mut self, x: usize, y: usize) {
        self.insert_arc(x, y);
        if !self.directed {
            self.insert_arc(y, x);
        }
        self.n_edges += 1;
        self.n_vertices = self.n_vertices.max(x).max(y);
        log::trace!("inserted edge ({}, {}), directed={}", x, y, self.directed);
    }

    /// Store a single directed arc, prepended at the head of x's list.
    fn insert_arc(&mut self, x: usize, y: usize) {
        let head = self.edges.remove(&x);
        self.edges.insert(
            x,
            Box::new(EdgeNode {
                target: y,
                weight: 0,
                next: head,
            }),
        );
        *self.degree.entry(x).or_insert(0) += 1;
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n_vertices
    }

    /// Number of logical edges (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Whether edges are traversable in one direction only.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Out-degree of a vertex (for undirected graphs, its degree).
    pub fn degree(&self, v: usize) -> usize {
        self.degree.get(&v).copied().unwrap_or(0)
    }

    /// Whether `v` is a valid vertex id for this graph.
    pub fn contains(&self, v: usize) -> bool {
        v >= 1 && v <= self.n_vertices
    }

    /// Iterate over the adjacency list of `v`, newest edge first.
    pub fn neighbors(&self, v: usize) -> Neighbors<'_> {
        Neighbors {
            cursor: self.edges.get(&v).map(Box::as_ref),
        }
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph: {} vertices, {} edges, directed={}",
            self.n_vertices, self.n_edges, self.directed
        )?;
        for v in 1..=self.n_vertices {
            write!(f, "{} ->", v)?;
            for edge in self.neighbors(v) {
                write!(f, " {}", edge.target())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
