use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::storage::options::InEdgePolicy;
use crate::types::VertexId;

use super::{AdjacencyRecord, Graph};

impl<T> Graph<T> {
    /// Appends a vertex with an empty neighbor sequence.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] when an equal vertex is
    /// already present; the rejected payload is dropped.
    pub fn insert_vertex(&mut self, vertex: T) -> Result<VertexId> {
        if self.find_position(&vertex).is_some() {
            debug!("graph.insert_vertex.duplicate");
            return Err(GraphError::DuplicateVertex);
        }
        self.records.try_reserve(1)?;
        self.positions.try_reserve(1)?;

        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.positions.insert(id, self.records.len());
        self.records.push(AdjacencyRecord::new(id, vertex));
        self.metrics.vertex_inserted();
        trace!(vertex = %id, vertices = self.records.len(), "graph.insert_vertex");
        Ok(id)
    }

    /// Removes a vertex and hands its payload back to the caller.
    ///
    /// The vertex must have no outgoing edges. Edges pointing at it are
    /// handled according to the graph's [`InEdgePolicy`]. The destroyer
    /// capability is not invoked; the returned payload is the caller's.
    pub fn remove_vertex(&mut self, vertex: &T) -> Result<T> {
        let pos = self
            .find_position(vertex)
            .ok_or(GraphError::VertexNotFound)?;
        self.remove_at(pos)
    }

    /// Removes the vertex behind `id`. See [`Graph::remove_vertex`].
    pub fn remove_vertex_by_id(&mut self, id: VertexId) -> Result<T> {
        let pos = self.position_of(id).ok_or(GraphError::VertexNotFound)?;
        self.remove_at(pos)
    }

    fn remove_at(&mut self, pos: usize) -> Result<T> {
        let id = self.records[pos].id;
        let degree = self.records[pos].neighbors.len();
        if degree > 0 {
            debug!(vertex = %id, degree, "graph.remove_vertex.non_empty_adjacency");
            return Err(GraphError::NonEmptyAdjacency { vertex: id, degree });
        }

        let referrers = self.count_referrers(id);
        if referrers > 0 {
            match self.in_edge_policy {
                InEdgePolicy::Reject => {
                    debug!(vertex = %id, referrers, "graph.remove_vertex.referenced");
                    return Err(GraphError::VertexReferenced {
                        vertex: id,
                        referrers,
                    });
                }
                InEdgePolicy::Detach => self.detach_in_edges(id),
            }
        }

        let record = self.records.remove(pos);
        self.positions.remove(&id);
        self.reindex_from(pos);
        self.metrics.vertex_removed();
        debug!(vertex = %id, vertices = self.records.len(), "graph.remove_vertex");
        Ok(record.vertex)
    }

    fn count_referrers(&self, id: VertexId) -> usize {
        self.records
            .iter()
            .map(|record| record.neighbors.iter().filter(|n| **n == id).count())
            .sum()
    }

    fn detach_in_edges(&mut self, id: VertexId) {
        let mut detached = 0usize;
        for record in &mut self.records {
            let before = record.neighbors.len();
            record.neighbors.retain(|n| *n != id);
            detached += before - record.neighbors.len();
        }
        self.edge_count -= detached;
        for _ in 0..detached {
            self.metrics.edge_removed();
        }
        debug!(vertex = %id, detached, "graph.remove_vertex.detach_in_edges");
    }
}
