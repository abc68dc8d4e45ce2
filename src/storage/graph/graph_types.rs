use crate::types::VertexId;

/// Per-vertex structure pairing a vertex payload with its outgoing neighbors.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyRecord<T> {
    pub(super) id: VertexId,
    pub(super) vertex: T,
    pub(super) weight: i32,
    pub(super) neighbors: Vec<VertexId>,
}

impl<T> AdjacencyRecord<T> {
    pub(super) fn new(id: VertexId, vertex: T) -> Self {
        Self {
            id,
            vertex,
            weight: 0,
            neighbors: Vec::new(),
        }
    }

    /// Stable handle of the vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The vertex payload.
    pub fn vertex(&self) -> &T {
        &self.vertex
    }

    /// Reserved weight attribute. No algorithm reads it; it is always zero.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Handles of the edge targets, in insertion order.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Number of outgoing adjacency entries.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true when `id` appears in the neighbor sequence.
    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains(&id)
    }
}
