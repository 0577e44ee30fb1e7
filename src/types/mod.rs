//! Shared types: errors and the crate-wide result alias.

pub mod error;

pub use error::{GraphError, GraphResult};
