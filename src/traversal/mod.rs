//! Breadth-first traversal engine.
//!
//! Computes reachability and hop distance from a start vertex. Every vertex
//! moves through `undiscovered -> discovered -> processed` within a single
//! call; that state is held in a map keyed by [`crate::VertexId`] which is
//! built when the call starts and dropped when it returns.

mod bfs;
mod frontier;
mod state;

pub use bfs::{BfsOptions, BfsVisit};
