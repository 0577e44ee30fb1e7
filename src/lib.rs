//! graphwalk — classic data structures around a visitor-driven graph
//! traversal engine.
//!
//! The core is the [`graph`] module: an adjacency-list graph whose BFS
//! and DFS drivers call into a pluggable [`Visitor`] at three extension
//! points, with shortest path, connected components, cycle detection and
//! articulation points layered on top as visitor implementations. The
//! [`collections`] module holds the supporting teaching structures
//! (linked list, stack, queue, binary search tree); the BFS frontier uses
//! the crate's own queue.

pub mod cli;
pub mod collections;
pub mod graph;
pub mod io;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::{Bst, LinkedList, Queue, Stack, TraversalOrder};
pub use graph::{
    AdjacencyList, ArticulationFinder, ComponentLabeler, CycleFinder, EdgeClass, EdgeNode, Graph,
    QuietVisitor, SearchState, TraceVisitor, VertexState, VisitStep, Visitor,
};
pub use io::{read_edge_list, read_edge_list_from_path};
pub use types::{GraphError, GraphResult};
