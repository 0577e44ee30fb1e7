//! Graph engine tests: traversal orders, derived algorithms, and the
//! visitor seam.

use graphwalk::graph::{EdgeClass, Graph, VisitStep};
use graphwalk::types::{GraphError, GraphResult};
use graphwalk::{AdjacencyList, SearchState, Visitor};

/// The canonical ten-vertex sample: a directed chain 1->2->3->4->5 with a
/// back edge 5->2, a spur 1->6, and a second component 7->8->9->10.
/// Insertion order matters: adjacency lists are head-inserted.
fn sample_graph(directed: bool) -> Graph {
    let mut graph = Graph::new(directed);
    for (x, y) in [
        (1, 6),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 2),
        (7, 8),
        (8, 9),
        (9, 10),
    ] {
        graph.insert_edge(x, y);
    }
    graph
}

// ==================== Adjacency Store ====================

#[test]
fn test_counts_and_degrees() {
    let graph = sample_graph(true);
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 9);
    assert!(graph.is_directed());
    assert_eq!(graph.degree(1), 2);
    assert_eq!(graph.degree(5), 1);
    assert_eq!(graph.degree(10), 0);
}

#[test]
fn test_adjacency_head_insertion_order() {
    let graph = sample_graph(true);
    let targets: Vec<usize> = graph.neighbors(1).map(|e| e.target()).collect();
    assert_eq!(targets, vec![2, 6]);
    assert!(graph.neighbors(1).all(|e| e.weight() == 0));
}

#[test]
fn test_undirected_insert_mirrors_edge() {
    let mut graph = Graph::new(false);
    graph.insert_edge(4, 9);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.degree(4), 1);
    assert_eq!(graph.degree(9), 1);
    let from_4: Vec<usize> = graph.neighbors(4).map(|e| e.target()).collect();
    let from_9: Vec<usize> = graph.neighbors(9).map(|e| e.target()).collect();
    assert_eq!(from_4, vec![9]);
    assert_eq!(from_9, vec![4]);
}

#[test]
fn test_parallel_edges_permitted() {
    let mut graph = Graph::new(true);
    graph.insert_edge(1, 2);
    graph.insert_edge(1, 2);
    assert_eq!(graph.degree(1), 2);
    assert_eq!(graph.edge_count(), 2);

    graph.init_search();
    let steps = graph.breadth_first_search(1).unwrap();
    let edge_visits = steps
        .iter()
        .filter(|s| **s == VisitStep::Edge(1, 2))
        .count();
    assert_eq!(edge_visits, 2);
}

#[test]
fn test_display_lists_adjacency() {
    let graph = sample_graph(true);
    let rendered = format!("{}", graph);
    assert!(rendered.contains("10 vertices, 9 edges"));
    assert!(rendered.contains("1 -> 2 6"));
}

// ==================== BFS / DFS Orders ====================

#[test]
fn test_breadth_first_search_order() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let steps = graph.breadth_first_search(1).unwrap();
    let expected = vec![
        VisitStep::Vertex(1),
        VisitStep::Edge(1, 2),
        VisitStep::Edge(1, 6),
        VisitStep::Vertex(2),
        VisitStep::Edge(2, 3),
        VisitStep::Vertex(6),
        VisitStep::Vertex(3),
        VisitStep::Edge(3, 4),
        VisitStep::Vertex(4),
        VisitStep::Edge(4, 5),
        VisitStep::Vertex(5),
        VisitStep::Edge(5, 2),
    ];
    assert_eq!(steps, expected);
}

#[test]
fn test_depth_first_search_order() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let steps = graph.depth_first_search(1).unwrap();
    let expected = vec![
        VisitStep::Vertex(1),
        VisitStep::Edge(1, 2),
        VisitStep::Vertex(2),
        VisitStep::Edge(2, 3),
        VisitStep::Vertex(3),
        VisitStep::Edge(3, 4),
        VisitStep::Vertex(4),
        VisitStep::Edge(4, 5),
        VisitStep::Vertex(5),
        VisitStep::Edge(5, 2),
        VisitStep::Edge(1, 6),
        VisitStep::Vertex(6),
    ];
    assert_eq!(steps, expected);
}

#[test]
fn test_init_search_is_idempotent() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let first = graph.breadth_first_search(1).unwrap();

    // Resetting twice in a row must not leak residual state.
    graph.init_search();
    graph.init_search();
    let second = graph.breadth_first_search(1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_traversal_requires_init_search() {
    let mut graph = sample_graph(true);
    match graph.breadth_first_search(1) {
        Err(GraphError::SearchNotInitialized { expected }) => assert_eq!(expected, 10),
        other => panic!("expected SearchNotInitialized, got {:?}", other),
    }
}

#[test]
fn test_traversal_from_unknown_vertex() {
    let mut graph = sample_graph(true);
    graph.init_search();
    match graph.breadth_first_search(99) {
        Err(GraphError::VertexNotFound(99)) => {}
        other => panic!("expected VertexNotFound, got {:?}", other),
    }
    match graph.depth_first_search(0) {
        Err(GraphError::VertexNotFound(0)) => {}
        other => panic!("expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_dfs_stamps_entry_and_exit_times() {
    let mut graph = sample_graph(true);
    graph.init_search();
    graph.depth_first_search(1).unwrap();
    let search = graph.search();
    // 1 is entered first and exited last.
    assert_eq!(search.entry_time(1), 1);
    for v in 2..=6 {
        assert!(search.entry_time(v) > search.entry_time(1));
        assert!(search.exit_time(v) < search.exit_time(1));
    }
    // Nested intervals: 3 lies inside 2.
    assert!(search.entry_time(2) < search.entry_time(3));
    assert!(search.exit_time(3) < search.exit_time(2));
}

// ==================== Edge Classification ====================

#[derive(Default)]
struct ClassRecorder {
    classes: Vec<(usize, usize, EdgeClass)>,
}

impl Visitor for ClassRecorder {
    fn on_edge(
        &mut self,
        _graph: &AdjacencyList,
        search: &mut SearchState,
        x: usize,
        y: usize,
    ) -> GraphResult<()> {
        self.classes.push((x, y, search.classify(x, y)?));
        Ok(())
    }
}

#[test]
fn test_every_edge_classifies_in_directed_dfs() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let mut recorder = ClassRecorder::default();
    graph.dfs_with(1, &mut recorder).unwrap();

    let expected = vec![
        (1, 2, EdgeClass::Tree),
        (2, 3, EdgeClass::Tree),
        (3, 4, EdgeClass::Tree),
        (4, 5, EdgeClass::Tree),
        (5, 2, EdgeClass::Back),
        (1, 6, EdgeClass::Tree),
    ];
    assert_eq!(recorder.classes, expected);
}

#[test]
fn test_every_edge_classifies_in_undirected_dfs() {
    let mut graph = Graph::new(false);
    for (x, y) in [(1, 2), (2, 3), (3, 1), (3, 4)] {
        graph.insert_edge(x, y);
    }
    graph.init_search();
    let mut recorder = ClassRecorder::default();
    graph.dfs_with(1, &mut recorder).unwrap();
    // Every examined edge must land in a class; each one is Tree or Back
    // in an undirected DFS.
    assert!(!recorder.classes.is_empty());
    for (_, _, class) in &recorder.classes {
        assert!(matches!(class, EdgeClass::Tree | EdgeClass::Back));
    }
}

#[test]
fn test_forward_and_cross_edges_in_directed_dfs() {
    // 1->2->3, plus forward edge 1->3 and a cross edge 4->3 reached after
    // 3 is processed (separate DFS runs share one reset).
    let mut graph = Graph::new(true);
    for (x, y) in [(1, 3), (1, 2), (2, 3), (4, 3)] {
        graph.insert_edge(x, y);
    }
    graph.init_search();
    let mut recorder = ClassRecorder::default();
    graph.dfs_with(1, &mut recorder).unwrap();
    graph.dfs_with(4, &mut recorder).unwrap();

    assert!(recorder.classes.contains(&(1, 3, EdgeClass::Forward)));
    assert!(recorder.classes.contains(&(4, 3, EdgeClass::Cross)));
}

// ==================== Shortest Path ====================

#[test]
fn test_find_path_minimizes_edge_count() {
    let mut graph = sample_graph(true);
    let path = graph.find_path(1, 5).unwrap();
    assert_eq!(path, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_find_path_to_self() {
    let mut graph = sample_graph(true);
    assert_eq!(graph.find_path(3, 3).unwrap(), vec![3]);
}

#[test]
fn test_find_path_unreachable() {
    let mut graph = sample_graph(true);
    match graph.find_path(6, 5) {
        Err(GraphError::PathNotFound { start: 6, end: 5 }) => {}
        other => panic!("expected PathNotFound, got {:?}", other),
    }
}

#[test]
fn test_find_path_unknown_end() {
    let mut graph = sample_graph(true);
    match graph.find_path(1, 42) {
        Err(GraphError::VertexNotFound(42)) => {}
        other => panic!("expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_find_path_resets_internally() {
    let mut graph = sample_graph(true);
    // No init_search call between runs; find_path owns its reset.
    assert_eq!(graph.find_path(1, 5).unwrap(), vec![1, 2, 3, 4, 5]);
    assert_eq!(graph.find_path(2, 4).unwrap(), vec![2, 3, 4]);
}

#[test]
fn test_undirected_edge_round_trip() {
    let mut graph = Graph::new(false);
    graph.insert_edge(4, 9);
    assert_eq!(graph.find_path(4, 9).unwrap(), vec![4, 9]);
    assert_eq!(graph.find_path(9, 4).unwrap(), vec![9, 4]);
}

// ==================== Connected Components ====================

#[test]
fn test_connected_components_membership() {
    let mut graph = sample_graph(true);
    let components = graph.connected_components().unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[&1], vec![1, 2, 6, 3, 4, 5]);
    assert_eq!(components[&2], vec![7, 8, 9, 10]);
}

#[test]
fn test_connected_components_partition_vertices() {
    let mut graph = sample_graph(true);
    let components = graph.connected_components().unwrap();
    let mut seen: Vec<usize> = components.values().flatten().copied().collect();
    seen.sort_unstable();
    let all: Vec<usize> = (1..=10).collect();
    assert_eq!(seen, all);
}

#[test]
fn test_component_ids_follow_discovery_order() {
    let mut graph = sample_graph(true);
    let components = graph.connected_components().unwrap();
    assert!(components[&1].contains(&1));
    assert!(components[&2].contains(&7));
}

// ==================== Cycle Detection ====================

#[test]
fn test_find_cycles_reports_back_edge() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let (ancestor, descendant) = graph.find_cycles(1).unwrap();
    assert_eq!((ancestor, descendant), (2, 5));
    // The traversal halted as soon as the cycle was found.
    assert!(graph.search().finished());
}

#[test]
fn test_find_cycles_none_in_acyclic_reach() {
    let mut graph = sample_graph(true);
    graph.init_search();
    match graph.find_cycles(7) {
        Err(GraphError::CycleNotFound(7)) => {}
        other => panic!("expected CycleNotFound, got {:?}", other),
    }
}

#[test]
fn test_find_cycles_undirected_triangle() {
    let mut graph = Graph::new(false);
    for (x, y) in [(1, 2), (2, 3), (3, 1)] {
        graph.insert_edge(x, y);
    }
    graph.init_search();
    let (ancestor, descendant) = graph.find_cycles(1).unwrap();
    assert_eq!((ancestor, descendant), (1, 2));
}

#[test]
fn test_undirected_tree_has_no_cycle() {
    // The mirrored arc back to the immediate parent must not be mistaken
    // for a cycle.
    let mut graph = Graph::new(false);
    for (x, y) in [(1, 2), (2, 3), (2, 4)] {
        graph.insert_edge(x, y);
    }
    graph.init_search();
    match graph.find_cycles(1) {
        Err(GraphError::CycleNotFound(1)) => {}
        other => panic!("expected CycleNotFound, got {:?}", other),
    }
}

// ==================== Articulation Points ====================

#[test]
fn test_articulation_vertices_on_sample() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let got = graph.find_articulation_vertices(1).unwrap();
    // One entry per rule firing, in discovery order, not deduplicated.
    assert_eq!(got, vec![2, 2, 1]);
}

#[test]
fn test_articulation_on_undirected_path() {
    let mut graph = Graph::new(false);
    graph.insert_edge(1, 2);
    graph.insert_edge(2, 3);
    graph.init_search();
    let got = graph.find_articulation_vertices(1).unwrap();
    assert_eq!(got, vec![2]);
}

#[test]
fn test_no_articulation_in_undirected_cycle() {
    let mut graph = Graph::new(false);
    for (x, y) in [(1, 2), (2, 3), (3, 1)] {
        graph.insert_edge(x, y);
    }
    graph.init_search();
    let got = graph.find_articulation_vertices(1).unwrap();
    assert!(got.is_empty());
}

// ==================== Custom Visitors ====================

#[derive(Default)]
struct EarlyStopper {
    visited: Vec<usize>,
    stop_at: usize,
}

impl Visitor for EarlyStopper {
    fn on_vertex_early(
        &mut self,
        _graph: &AdjacencyList,
        search: &mut SearchState,
        v: usize,
    ) -> GraphResult<()> {
        self.visited.push(v);
        if v == self.stop_at {
            search.finish();
        }
        Ok(())
    }
}

#[test]
fn test_finished_flag_halts_dfs() {
    let mut graph = sample_graph(true);
    graph.init_search();
    let mut stopper = EarlyStopper {
        visited: Vec::new(),
        stop_at: 3,
    };
    graph.dfs_with(1, &mut stopper).unwrap();
    assert_eq!(stopper.visited, vec![1, 2, 3]);
}
