//! Identifier types shared by the graph store and the traversal engine.

use std::fmt;

/// Stable handle to a vertex stored in a [`crate::Graph`].
///
/// Handles are allocated from a per-graph counter and are never reused, so a
/// handle held after its vertex was removed simply stops resolving.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(value: u64) -> Self {
        VertexId(value)
    }
}

impl From<VertexId> for u64 {
    fn from(value: VertexId) -> Self {
        value.0
    }
}
