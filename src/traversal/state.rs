use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::storage::AdjacencyRecord;
use crate::types::VertexId;

/// Per-vertex progress within one traversal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum VertexState {
    Undiscovered,
    Discovered,
    Processed,
}

/// Transient traversal record of one vertex. `hops` is `None` until reached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BfsVertex {
    pub(crate) state: VertexState,
    pub(crate) hops: Option<u32>,
}

/// Mapping from vertex handle to traversal record, owned by a single call.
#[derive(Debug)]
pub(crate) struct TraversalState {
    vertices: FxHashMap<VertexId, BfsVertex>,
}

impl TraversalState {
    /// Marks every vertex undiscovered except `start`, which is discovered at hop 0.
    pub(crate) fn reset<'g, T: 'g>(
        records: impl ExactSizeIterator<Item = &'g AdjacencyRecord<T>>,
        start: VertexId,
    ) -> Result<Self> {
        let mut vertices = FxHashMap::default();
        vertices.try_reserve(records.len())?;
        for record in records {
            let entry = if record.id() == start {
                BfsVertex {
                    state: VertexState::Discovered,
                    hops: Some(0),
                }
            } else {
                BfsVertex {
                    state: VertexState::Undiscovered,
                    hops: None,
                }
            };
            vertices.insert(record.id(), entry);
        }
        Ok(Self { vertices })
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: VertexId) -> Option<BfsVertex> {
        self.vertices.get(&id).copied()
    }

    pub(crate) fn hops(&self, id: VertexId) -> Option<u32> {
        self.vertices.get(&id).and_then(|vertex| vertex.hops)
    }

    /// Moves an undiscovered vertex to discovered. Returns false otherwise.
    pub(crate) fn discover(&mut self, id: VertexId, hops: u32) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) if vertex.state == VertexState::Undiscovered => {
                vertex.state = VertexState::Discovered;
                vertex.hops = Some(hops);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_processed(&mut self, id: VertexId) {
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.state = VertexState::Processed;
        }
    }

    pub(crate) fn count(&self, state: VertexState) -> usize {
        self.vertices
            .values()
            .filter(|vertex| vertex.state == state)
            .count()
    }
}
