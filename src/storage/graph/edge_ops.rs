use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::types::VertexId;

use super::Graph;

impl<T> Graph<T> {
    /// Adds an edge from `from` to `to`.
    ///
    /// Both endpoints are resolved before anything is mutated: a missing
    /// source reports [`GraphError::SourceNotFound`], then a missing target
    /// reports [`GraphError::EdgeTargetNotFound`]. Parallel edges are kept.
    /// Undirected graphs also store the mirror entry `to -> from`.
    pub fn insert_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let src = self.find_position(from).ok_or(GraphError::SourceNotFound)?;
        let dst = self
            .find_position(to)
            .ok_or(GraphError::EdgeTargetNotFound)?;
        self.link(src, dst)
    }

    /// Adds an edge between two handles. See [`Graph::insert_edge`].
    pub fn insert_edge_by_id(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let src = self.position_of(from).ok_or(GraphError::SourceNotFound)?;
        let dst = self
            .position_of(to)
            .ok_or(GraphError::EdgeTargetNotFound)?;
        self.link(src, dst)
    }

    /// Removes the first edge from `from` whose target equals `to`.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let src = self.find_position(from).ok_or(GraphError::SourceNotFound)?;
        let target = self
            .find_position(to)
            .map(|pos| self.records[pos].id)
            .ok_or(GraphError::EdgeNotFound)?;
        self.unlink(src, target)
    }

    /// Removes the first edge between two handles. See [`Graph::remove_edge`].
    pub fn remove_edge_by_id(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let src = self.position_of(from).ok_or(GraphError::SourceNotFound)?;
        self.unlink(src, to)
    }

    fn link(&mut self, src: usize, dst: usize) -> Result<()> {
        let src_id = self.records[src].id;
        let dst_id = self.records[dst].id;
        let mirror = !self.directed && src != dst;

        self.records[src].neighbors.try_reserve(1)?;
        if mirror {
            self.records[dst].neighbors.try_reserve(1)?;
        }

        self.records[src].neighbors.push(dst_id);
        self.edge_count += 1;
        self.metrics.edge_inserted();
        if mirror {
            self.records[dst].neighbors.push(src_id);
            self.edge_count += 1;
            self.metrics.edge_inserted();
        }
        trace!(from = %src_id, to = %dst_id, edges = self.edge_count, "graph.insert_edge");
        Ok(())
    }

    fn unlink(&mut self, src: usize, target: VertexId) -> Result<()> {
        let src_id = self.records[src].id;
        let slot = self.records[src]
            .neighbors
            .iter()
            .position(|n| *n == target)
            .ok_or_else(|| {
                debug!(from = %src_id, to = %target, "graph.remove_edge.not_found");
                GraphError::EdgeNotFound
            })?;
        self.records[src].neighbors.remove(slot);
        self.edge_count -= 1;
        self.metrics.edge_removed();

        if !self.directed && src_id != target {
            if let Some(dst) = self.position_of(target) {
                let mirror = &mut self.records[dst].neighbors;
                if let Some(back) = mirror.iter().position(|n| *n == src_id) {
                    mirror.remove(back);
                    self.edge_count -= 1;
                    self.metrics.edge_removed();
                }
            }
        }
        trace!(from = %src_id, to = %target, edges = self.edge_count, "graph.remove_edge");
        Ok(())
    }
}
