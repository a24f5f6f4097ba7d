//! State spaces to search: grid mazes and weighted graphs.
#![deny(clippy::all)]

pub mod coord2d;
pub mod graph;

/// Data type used for coordinates
pub type Position = usize;
