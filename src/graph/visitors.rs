//! Concrete visitor implementations for the traversal drivers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::GraphResult;

use super::adjacency::AdjacencyList;
use super::search::{EdgeClass, SearchState};
use super::traversal::Visitor;

/// One step of a recorded traversal: either a vertex being entered or an
/// edge being examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStep {
    /// A vertex was entered.
    Vertex(usize),
    /// The edge (from, to) was examined.
    Edge(usize, usize),
}

/// A visitor that does nothing. Traversals driven with it still populate
/// the search state (discovery states, parents, timestamps), which is all
/// the shortest-path algorithm needs.
pub struct QuietVisitor;

impl Visitor for QuietVisitor {}

/// Records every vertex entry and examined edge, in order.
#[derive(Default)]
pub struct TraceVisitor {
    /// The recorded steps.
    pub visits: Vec<VisitStep>,
}

impl Visitor for TraceVisitor {
    fn on_vertex_early(
        &mut self,
        _graph: &AdjacencyList,
        _search: &mut SearchState,
        v: usize,
    ) -> GraphResult<()> {
        self.visits.push(VisitStep::Vertex(v));
        Ok(())
    }

    fn on_edge(
        &mut self,
        _graph: &AdjacencyList,
        _search: &mut SearchState,
        x: usize,
        y: usize,
    ) -> GraphResult<()> {
        self.visits.push(VisitStep::Edge(x, y));
        Ok(())
    }
}

/// Labels every vertex reached by the current BFS run with the component
/// id in `current`.
#[derive(Default)]
pub struct ComponentLabeler {
    /// The component id assigned to vertices discovered by the next run.
    pub current: usize,
    /// Component id -> vertices in discovery order.
    pub components: BTreeMap<usize, Vec<usize>>,
}

impl ComponentLabeler {
    /// Create a labeler with no components yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for ComponentLabeler {
    fn on_vertex_early(
        &mut self,
        _graph: &AdjacencyList,
        _search: &mut SearchState,
        v: usize,
    ) -> GraphResult<()> {
        self.components.entry(self.current).or_default().push(v);
        Ok(())
    }
}

/// Detects a cycle via DFS: the first back edge that is not the trivial
/// edge to the immediate parent closes a cycle. Records the closing pair
/// (ancestor, descendant) and halts the traversal.
#[derive(Default)]
pub struct CycleFinder {
    /// The cycle-closing edge, ancestor first, once found.
    pub cycle_edge: Option<(usize, usize)>,
}

impl Visitor for CycleFinder {
    fn on_edge(
        &mut self,
        _graph: &AdjacencyList,
        search: &mut SearchState,
        x: usize,
        y: usize,
    ) -> GraphResult<()> {
        let class = search.classify(x, y)?;
        if class == EdgeClass::Back && search.parent(x) != Some(y) {
            log::debug!("cycle found: back edge from {} to {}", x, y);
            self.cycle_edge = Some((y, x));
            search.finish();
        }
        Ok(())
    }
}

/// Finds articulation points with the standard low-link algorithm over
/// DFS entry times and reachable ancestors.
///
/// A vertex may qualify under more than one rule across different child
/// branches; the result keeps one entry per rule firing, in discovery
/// order, without deduplication.
#[derive(Default)]
pub struct ArticulationFinder {
    /// Articulation vertices in the order discovered.
    pub articulation_vertices: Vec<usize>,
}

impl Visitor for ArticulationFinder {
    fn on_vertex_early(
        &mut self,
        _graph: &AdjacencyList,
        search: &mut SearchState,
        v: usize,
    ) -> GraphResult<()> {
        search.set_reachable_ancestor(v, v);
        Ok(())
    }

    fn on_edge(
        &mut self,
        _graph: &AdjacencyList,
        search: &mut SearchState,
        x: usize,
        y: usize,
    ) -> GraphResult<()> {
        let class = search.classify(x, y)?;
        if class == EdgeClass::Tree {
            search.increment_tree_out_degree(x);
        }
        if class == EdgeClass::Back && search.parent(x) != Some(y) {
            let current = search.reachable_ancestor(x);
            if search.entry_time(y) < search.entry_time(current) {
                search.set_reachable_ancestor(x, y);
            }
        }
        Ok(())
    }

    fn on_vertex_late(
        &mut self,
        _graph: &AdjacencyList,
        search: &mut SearchState,
        v: usize,
    ) -> GraphResult<()> {
        let parent = match search.parent(v) {
            Some(parent) => parent,
            None => {
                // Root rule: a root with more than one tree child splits
                // the graph if removed.
                if search.tree_out_degree(v) > 1 {
                    log::debug!("root articulation vertex: {}", v);
                    self.articulation_vertices.push(v);
                }
                return Ok(());
            }
        };

        let parent_is_root = search.parent(parent).is_none();
        if search.reachable_ancestor(v) == parent && !parent_is_root {
            log::debug!("parent articulation vertex: {}", parent);
            self.articulation_vertices.push(parent);
        }
        if search.reachable_ancestor(v) == v && search.tree_out_degree(v) > 0 {
            // Bridge rule: nothing in v's subtree reaches above v, so the
            // tree edge into v is a bridge. Leaves are excluded.
            log::debug!("bridge articulation vertex: {}", v);
            self.articulation_vertices.push(v);
        }

        let ancestor_v = search.reachable_ancestor(v);
        let ancestor_parent = search.reachable_ancestor(parent);
        if search.entry_time(ancestor_v) < search.entry_time(ancestor_parent) {
            search.set_reachable_ancestor(parent, ancestor_v);
        }
        Ok(())
    }
}
