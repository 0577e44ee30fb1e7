//! Graph engine — adjacency-list storage, visitor-driven BFS/DFS, and
//! the algorithms layered on top.

pub mod adjacency;
pub mod engine;
pub mod search;
pub mod traversal;
pub mod visitors;

pub use adjacency::{AdjacencyList, EdgeNode, Neighbors};
pub use engine::Graph;
pub use search::{EdgeClass, SearchState, VertexState};
pub use traversal::{bfs, dfs, Visitor};
pub use visitors::{
    ArticulationFinder, ComponentLabeler, CycleFinder, QuietVisitor, TraceVisitor, VisitStep,
};
