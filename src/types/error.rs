//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A traversal was asked to start from (or reach) a vertex the graph
    /// does not contain.
    #[error("vertex {0} is not in the graph")]
    VertexNotFound(usize),

    /// No path exists between the requested endpoints.
    #[error("no path exists from {start} to {end}")]
    PathNotFound { start: usize, end: usize },

    /// No cycle is reachable from the requested start vertex.
    #[error("no cycle reachable from vertex {0}")]
    CycleNotFound(usize),

    /// An edge could not be classified as tree/back/forward/cross during
    /// DFS. The traversal state is corrupt; the operation is aborted.
    #[error("edge ({x}, {y}) is unclassifiable; traversal state is corrupt")]
    UnclassifiableEdge { x: usize, y: usize },

    /// A traversal ran against search state that was never initialized,
    /// or was initialized for a different vertex count.
    #[error("search state not initialized for {expected} vertices; call init_search first")]
    SearchNotInitialized { expected: usize },

    /// Edge-list input could not be parsed.
    #[error("malformed edge list at line {line}: {reason}")]
    MalformedEdgeList { line: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
