//! Error taxonomy shared by graph mutation, lookup and traversal.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::VertexId;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors reported by graph mutation, lookup and traversal operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex equal to the inserted one is already present.
    #[error("vertex already present in graph")]
    DuplicateVertex,
    /// The referenced vertex is not part of the graph.
    #[error("vertex not found")]
    VertexNotFound,
    /// The source endpoint of an edge operation is not part of the graph.
    #[error("edge source vertex not found")]
    SourceNotFound,
    /// The destination endpoint of an edge insertion is not part of the graph.
    #[error("edge target vertex not found")]
    EdgeTargetNotFound,
    /// The source vertex has no neighbor matching the edge target.
    #[error("edge not found")]
    EdgeNotFound,
    /// Vertex removal was refused because the vertex still has out-edges.
    #[error("vertex {vertex} still has {degree} outgoing edge(s)")]
    NonEmptyAdjacency {
        /// Handle of the vertex whose removal was refused.
        vertex: VertexId,
        /// Number of entries left in its neighbor sequence.
        degree: usize,
    },
    /// Vertex removal was refused because other vertices still point at it.
    #[error("vertex {vertex} is still the target of {referrers} edge(s)")]
    VertexReferenced {
        /// Handle of the vertex whose removal was refused.
        vertex: VertexId,
        /// Number of adjacency entries elsewhere that name the vertex.
        referrers: usize,
    },
    /// The traversal start vertex is not part of the graph.
    #[error("traversal start vertex not found")]
    StartNotFound,
    /// Growing an internal buffer failed.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

impl GraphError {
    /// Returns true for the lookup-style failures that name a missing vertex or edge.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound
                | GraphError::SourceNotFound
                | GraphError::EdgeTargetNotFound
                | GraphError::EdgeNotFound
                | GraphError::StartNotFound
        )
    }
}
