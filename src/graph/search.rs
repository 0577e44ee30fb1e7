//! Per-traversal vertex bookkeeping and DFS edge classification.

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// Discovery state of a vertex during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VertexState {
    /// Never visited.
    Undiscovered,
    /// On the frontier (BFS) or recursion stack (DFS).
    Discovered,
    /// Fully explored.
    Processed,
}

impl VertexState {
    /// Human-readable name for this state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undiscovered => "undiscovered",
            Self::Discovered => "discovered",
            Self::Processed => "processed",
        }
    }
}

impl std::fmt::Display for VertexState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// DFS classification of an examined edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeClass {
    /// Edge to a previously undiscovered vertex; part of the DFS tree.
    Tree,
    /// Edge to an ancestor still on the recursion stack; signals a cycle.
    Back,
    /// Edge to an already processed descendant (directed graphs only).
    Forward,
    /// Edge to an already processed vertex in another subtree.
    Cross,
}

impl EdgeClass {
    /// Human-readable name for this classification.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Cross => "cross",
        }
    }
}

impl std::fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-vertex traversal state, stored struct-of-arrays and indexed by
/// vertex id (slot 0 is unused; vertices are `1..=n`).
///
/// The state is only valid between a [`reset`](SearchState::reset) and the
/// completion of one traversal. Callers of traversal-based algorithms that
/// do not reset internally must reset before each independent run, or
/// stale parent and timestamp data will leak across runs.
#[derive(Debug)]
pub struct SearchState {
    state: Vec<VertexState>,
    parent: Vec<Option<usize>>,
    entry_time: Vec<u32>,
    exit_time: Vec<u32>,
    reachable_ancestor: Vec<usize>,
    tree_out_degree: Vec<usize>,
    time: u32,
    finished: bool,
}

impl SearchState {
    /// Create state with no capacity; unusable until `reset`.
    pub fn new() -> Self {
        Self {
            state: Vec::new(),
            parent: Vec::new(),
            entry_time: Vec::new(),
            exit_time: Vec::new(),
            reachable_ancestor: Vec::new(),
            tree_out_degree: Vec::new(),
            time: 0,
            finished: false,
        }
    }

    /// Re-initialize for a graph of `vertex_count` vertices: every vertex
    /// undiscovered with no parent, clock at zero, finished flag cleared.
    pub fn reset(&mut self, vertex_count: usize) {
        let slots = vertex_count + 1;
        self.state = vec![VertexState::Undiscovered; slots];
        self.parent = vec![None; slots];
        self.entry_time = vec![0; slots];
        self.exit_time = vec![0; slots];
        self.reachable_ancestor = vec![0; slots];
        self.tree_out_degree = vec![0; slots];
        self.time = 0;
        self.finished = false;
    }

    /// Number of vertices this state was last reset for.
    pub fn capacity(&self) -> usize {
        self.state.len().saturating_sub(1)
    }

    /// Check that this state was reset for a graph of `vertex_count`
    /// vertices, so traversals fail cleanly instead of indexing out of
    /// bounds.
    pub(crate) fn ensure_capacity(&self, vertex_count: usize) -> GraphResult<()> {
        if self.capacity() < vertex_count {
            return Err(GraphError::SearchNotInitialized {
                expected: vertex_count,
            });
        }
        Ok(())
    }

    /// Discovery state of `v`.
    pub fn vertex_state(&self, v: usize) -> VertexState {
        self.state[v]
    }

    pub(crate) fn set_vertex_state(&mut self, v: usize, state: VertexState) {
        self.state[v] = state;
    }

    /// Parent of `v` in the current traversal tree, `None` for roots and
    /// undiscovered vertices.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent[v]
    }

    pub(crate) fn set_parent(&mut self, v: usize, parent: Option<usize>) {
        self.parent[v] = parent;
    }

    /// Logical-clock value when `v` was entered (DFS only).
    pub fn entry_time(&self, v: usize) -> u32 {
        self.entry_time[v]
    }

    /// Logical-clock value when `v` was exited (DFS only).
    pub fn exit_time(&self, v: usize) -> u32 {
        self.exit_time[v]
    }

    pub(crate) fn stamp_entry(&mut self, v: usize) {
        self.time += 1;
        self.entry_time[v] = self.time;
    }

    pub(crate) fn stamp_exit(&mut self, v: usize) {
        self.time += 1;
        self.exit_time[v] = self.time;
    }

    /// Lowest-entry-time vertex reachable from `v`'s subtree via one back
    /// edge. Maintained by the articulation-point visitor.
    pub fn reachable_ancestor(&self, v: usize) -> usize {
        self.reachable_ancestor[v]
    }

    /// Update the reachable ancestor of `v`.
    pub fn set_reachable_ancestor(&mut self, v: usize, ancestor: usize) {
        self.reachable_ancestor[v] = ancestor;
    }

    /// Number of DFS tree children of `v`.
    pub fn tree_out_degree(&self, v: usize) -> usize {
        self.tree_out_degree[v]
    }

    /// Record one more DFS tree child under `v`.
    pub fn increment_tree_out_degree(&mut self, v: usize) {
        self.tree_out_degree[v] += 1;
    }

    /// Whether a visitor has requested early termination.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Request early termination: the DFS driver stops descending and
    /// unwinds as soon as this is observed.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Classify the examined edge (x, y). Valid only in DFS context,
    /// where parent pointers and entry timestamps are being populated.
    ///
    /// Any combination outside tree/back/forward/cross means the
    /// traversal state is corrupt and yields
    /// [`GraphError::UnclassifiableEdge`].
    pub fn classify(&self, x: usize, y: usize) -> GraphResult<EdgeClass> {
        if self.parent[y] == Some(x) {
            return Ok(EdgeClass::Tree);
        }
        match self.state[y] {
            VertexState::Discovered => Ok(EdgeClass::Back),
            VertexState::Processed if self.entry_time[y] > self.entry_time[x] => {
                Ok(EdgeClass::Forward)
            }
            VertexState::Processed if self.entry_time[y] < self.entry_time[x] => {
                Ok(EdgeClass::Cross)
            }
            _ => Err(GraphError::UnclassifiableEdge { x, y }),
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
