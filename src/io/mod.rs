//! Input parsing for graphs.

pub mod edge_list;

pub use edge_list::{read_edge_list, read_edge_list_from_path};
