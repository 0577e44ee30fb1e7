//! The public graph engine: adjacency store + search state + algorithms.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::adjacency::{AdjacencyList, Neighbors};
use super::search::{SearchState, VertexState};
use super::traversal::{bfs, dfs, Visitor};
use super::visitors::{
    ArticulationFinder, ComponentLabeler, CycleFinder, QuietVisitor, TraceVisitor, VisitStep,
};

/// A directed or undirected graph with traversal-based algorithms.
///
/// The graph owns one set of per-vertex traversal state. State is valid
/// only between an [`init_search`](Graph::init_search) call and the
/// completion of one traversal; `breadth_first_search`,
/// `depth_first_search`, `find_cycles` and `find_articulation_vertices`
/// expect the caller to reset before each independent run, while
/// `find_path` and `connected_components` reset internally.
#[derive(Debug)]
pub struct Graph {
    adjacency: AdjacencyList,
    search: SearchState,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: AdjacencyList::new(directed),
            search: SearchState::new(),
        }
    }

    /// Insert an edge from `x` to `y` (and the mirrored arc for
    /// undirected graphs). Parallel edges are permitted.
    pub fn insert_edge(&mut self, x: usize, y: usize) {
        self.adjacency.insert_edge(x, y);
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Number of logical edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Whether edges are traversable in one direction only.
    pub fn is_directed(&self) -> bool {
        self.adjacency.is_directed()
    }

    /// Out-degree of a vertex.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency.degree(v)
    }

    /// Iterate over the adjacency list of `v`, newest edge first.
    pub fn neighbors(&self, v: usize) -> Neighbors<'_> {
        self.adjacency.neighbors(v)
    }

    /// The underlying adjacency store.
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// The traversal state of the most recent run.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Reset all per-vertex traversal state for a fresh run.
    pub fn init_search(&mut self) {
        self.search.reset(self.adjacency.vertex_count());
    }

    /// Run a BFS from `start` with a caller-supplied visitor.
    pub fn bfs_with(&mut self, start: usize, visitor: &mut dyn Visitor) -> GraphResult<()> {
        let Self { adjacency, search } = self;
        bfs(adjacency, search, start, visitor)
    }

    /// Run a DFS from `start` with a caller-supplied visitor.
    pub fn dfs_with(&mut self, start: usize, visitor: &mut dyn Visitor) -> GraphResult<()> {
        let Self { adjacency, search } = self;
        dfs(adjacency, search, start, visitor)
    }

    /// Vanilla BFS traversal, returning the ordered visit steps.
    /// The caller must call `init_search` first.
    pub fn breadth_first_search(&mut self, start: usize) -> GraphResult<Vec<VisitStep>> {
        let mut tracer = TraceVisitor::default();
        self.bfs_with(start, &mut tracer)?;
        Ok(tracer.visits)
    }

    /// Vanilla DFS traversal, returning the ordered visit steps.
    /// The caller must call `init_search` first.
    pub fn depth_first_search(&mut self, start: usize) -> GraphResult<Vec<VisitStep>> {
        let mut tracer = TraceVisitor::default();
        self.dfs_with(start, &mut tracer)?;
        Ok(tracer.visits)
    }

    /// Shortest path (fewest edges) from `start` to `end`, inclusive.
    /// Resets the traversal state internally; BFS parent pointers encode
    /// the shortest-path tree in an unweighted graph.
    pub fn find_path(&mut self, start: usize, end: usize) -> GraphResult<Vec<usize>> {
        if !self.adjacency.contains(end) {
            return Err(GraphError::VertexNotFound(end));
        }
        self.init_search();
        self.bfs_with(start, &mut QuietVisitor)?;

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            match self.search.parent(current) {
                Some(parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => return Err(GraphError::PathNotFound { start, end }),
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Label connected components: ascending vertex scan, one BFS per
    /// still-undiscovered seed, component ids assigned from 1 in
    /// discovery order. Resets the traversal state internally.
    ///
    /// For directed graphs this labels BFS reachability from each seed,
    /// not mutual reachability; strongly connected components are out of
    /// scope.
    pub fn connected_components(&mut self) -> GraphResult<BTreeMap<usize, Vec<usize>>> {
        self.init_search();
        let mut labeler = ComponentLabeler::new();
        let mut component = 1;
        for v in 1..=self.adjacency.vertex_count() {
            if self.search.vertex_state(v) == VertexState::Undiscovered {
                labeler.current = component;
                self.bfs_with(v, &mut labeler)?;
                component += 1;
            }
        }
        Ok(labeler.components)
    }

    /// Find a cycle reachable from `start`. Returns the cycle-closing
    /// edge as (ancestor, descendant); the pair identifies *a* cycle, not
    /// all cycles. The caller must call `init_search` first.
    pub fn find_cycles(&mut self, start: usize) -> GraphResult<(usize, usize)> {
        let mut finder = CycleFinder::default();
        self.dfs_with(start, &mut finder)?;
        finder.cycle_edge.ok_or(GraphError::CycleNotFound(start))
    }

    /// Find articulation vertices reachable from `start`, in discovery
    /// order. A vertex qualifying under multiple rules appears once per
    /// rule firing. The caller must call `init_search` first.
    pub fn find_articulation_vertices(&mut self, start: usize) -> GraphResult<Vec<usize>> {
        let mut finder = ArticulationFinder::default();
        self.dfs_with(start, &mut finder)?;
        Ok(finder.articulation_vertices)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.adjacency.fmt(f)
    }
}
