//! Command implementations backing the `gwalk` binary.

pub mod commands;
