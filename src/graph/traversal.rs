//! Generic BFS/DFS traversal drivers and the visitor seam.

use crate::collections::Queue;
use crate::types::{GraphError, GraphResult};

use super::adjacency::AdjacencyList;
use super::search::{SearchState, VertexState};

/// The extension seam shared by BFS and DFS. A visitor is called at three
/// well-defined points of a traversal; every specific processing task
/// (path finding, component labeling, cycle detection, articulation
/// points) is one implementation of this trait.
///
/// Hooks receive the adjacency store immutably and the search state
/// mutably, so a visitor can read parent pointers and timestamps and
/// maintain its own per-vertex bookkeeping without aliasing the graph.
pub trait Visitor {
    /// Called once when `v` is first dequeued (BFS) or recursed into
    /// (DFS), before its edges are examined.
    fn on_vertex_early(
        &mut self,
        _graph: &AdjacencyList,
        _search: &mut SearchState,
        _v: usize,
    ) -> GraphResult<()> {
        Ok(())
    }

    /// Called for every edge (x, y) examined from x whenever y is not yet
    /// processed, or unconditionally for directed graphs (directed edges
    /// are traversable in one direction only and must always be seen).
    fn on_edge(
        &mut self,
        _graph: &AdjacencyList,
        _search: &mut SearchState,
        _x: usize,
        _y: usize,
    ) -> GraphResult<()> {
        Ok(())
    }

    /// Called once after all of `v`'s edges have been examined (after
    /// recursive descent completes, for DFS).
    fn on_vertex_late(
        &mut self,
        _graph: &AdjacencyList,
        _search: &mut SearchState,
        _v: usize,
    ) -> GraphResult<()> {
        Ok(())
    }
}

/// Breadth-first search from `start`, FIFO-ordered via the crate's own
/// queue. Runs in O(V+E) and leaves behind a parent-pointer tree that
/// encodes fewest-edges shortest paths from `start`.
///
/// The caller must have reset `search` for this graph's vertex count.
pub fn bfs<V: Visitor + ?Sized>(
    graph: &AdjacencyList,
    search: &mut SearchState,
    start: usize,
    visitor: &mut V,
) -> GraphResult<()> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start));
    }
    search.ensure_capacity(graph.vertex_count())?;

    let mut frontier = Queue::new();
    frontier.enqueue(start);
    search.set_vertex_state(start, VertexState::Discovered);

    while let Some(v) = frontier.dequeue() {
        visitor.on_vertex_early(graph, search, v)?;
        search.set_vertex_state(v, VertexState::Processed);
        for edge in graph.neighbors(v) {
            let y = edge.target();
            if search.vertex_state(y) != VertexState::Processed || graph.is_directed() {
                visitor.on_edge(graph, search, v, y)?;
            }
            if search.vertex_state(y) == VertexState::Undiscovered {
                frontier.enqueue(y);
                search.set_vertex_state(y, VertexState::Discovered);
                search.set_parent(y, Some(v));
                log::trace!("bfs discovered {} via {}", y, v);
            }
        }
        visitor.on_vertex_late(graph, search, v)?;
    }
    Ok(())
}

/// Depth-first search from `start`, recursive (stack-ordered). Recursion
/// depth is bounded by the longest simple path in the graph.
///
/// The finished flag is honored before descending into a child and after
/// each neighbor step, so a visitor can stop the whole traversal early.
/// The caller must have reset `search` for this graph's vertex count.
pub fn dfs<V: Visitor + ?Sized>(
    graph: &AdjacencyList,
    search: &mut SearchState,
    start: usize,
    visitor: &mut V,
) -> GraphResult<()> {
    if !graph.contains(start) {
        return Err(GraphError::VertexNotFound(start));
    }
    search.ensure_capacity(graph.vertex_count())?;
    dfs_visit(graph, search, start, visitor)
}

fn dfs_visit<V: Visitor + ?Sized>(
    graph: &AdjacencyList,
    search: &mut SearchState,
    v: usize,
    visitor: &mut V,
) -> GraphResult<()> {
    if search.finished() {
        return Ok(());
    }

    search.set_vertex_state(v, VertexState::Discovered);
    search.stamp_entry(v);
    visitor.on_vertex_early(graph, search, v)?;

    for edge in graph.neighbors(v) {
        let y = edge.target();
        if search.vertex_state(y) == VertexState::Undiscovered {
            search.set_parent(y, Some(v));
            visitor.on_edge(graph, search, v, y)?;
            dfs_visit(graph, search, y, visitor)?;
        } else if search.vertex_state(y) != VertexState::Processed || graph.is_directed() {
            visitor.on_edge(graph, search, v, y)?;
        }
        if search.finished() {
            return Ok(());
        }
    }

    visitor.on_vertex_late(graph, search, v)?;
    search.stamp_exit(v);
    search.set_vertex_state(v, VertexState::Processed);
    Ok(())
}
