use std::fmt;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::storage::Graph;
use crate::types::VertexId;

use super::frontier::Frontier;
use super::state::{TraversalState, VertexState};

/// Options for breadth-first traversal over the graph.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BfsOptions {
    /// Maximum hop count (inclusive) to explore from the start vertex.
    pub max_depth: Option<u32>,
    /// Cap on the number of reached vertices returned, start vertex included.
    pub max_results: Option<usize>,
}

impl BfsOptions {
    /// Unbounded traversal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops discovering vertices further than `depth` hops away.
    pub fn max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Stops once `limit` vertices were reached. The start vertex is always reported.
    pub fn max_results(mut self, limit: usize) -> Self {
        self.max_results = Some(limit);
        self
    }
}

/// Vertex reached during a breadth-first traversal.
pub struct BfsVisit<'g, T> {
    /// Handle of the reached vertex.
    pub id: VertexId,
    /// Payload of the reached vertex.
    pub vertex: &'g T,
    /// Length of the shortest path from the start vertex, in edges.
    pub hops: u32,
}

impl<T> Clone for BfsVisit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BfsVisit<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for BfsVisit<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BfsVisit")
            .field("id", &self.id)
            .field("vertex", self.vertex)
            .field("hops", &self.hops)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BfsVisit<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.vertex == other.vertex && self.hops == other.hops
    }
}

impl<T> Graph<T> {
    /// Breadth-first traversal from `start` without limits.
    ///
    /// Returns every vertex reachable from `start`, paired with its hop
    /// count, in discovery order. The start vertex comes first with hop 0 and
    /// hop counts never decrease along the result.
    pub fn bfs(&self, start: &T) -> Result<Vec<BfsVisit<'_, T>>> {
        self.bfs_with(start, &BfsOptions::default())
    }

    /// Breadth-first traversal from `start` bounded by `opts`.
    ///
    /// Traversal state lives only for the duration of the call; the stored
    /// payloads are never modified, so repeated calls on an unchanged graph
    /// return identical results.
    pub fn bfs_with(&self, start: &T, opts: &BfsOptions) -> Result<Vec<BfsVisit<'_, T>>> {
        let start_pos = self
            .find_position(start)
            .ok_or(GraphError::StartNotFound)?;
        let (visits, state) = self.traverse(start_pos, opts)?;
        self.metrics().bfs_completed(visits.len());
        debug!(
            start = %self.record_at(start_pos).id(),
            reached = visits.len(),
            processed = state.count(VertexState::Processed),
            "bfs.complete"
        );
        Ok(visits)
    }

    fn traverse(
        &self,
        start_pos: usize,
        opts: &BfsOptions,
    ) -> Result<(Vec<BfsVisit<'_, T>>, TraversalState)> {
        let start_record = self.record_at(start_pos);
        let mut state = TraversalState::reset(self.adjacency_records(), start_record.id())?;

        let mut frontier = Frontier::new();
        frontier.enqueue(start_pos)?;

        let mut visits = Vec::new();
        visits.try_reserve(1)?;
        visits.push(BfsVisit {
            id: start_record.id(),
            vertex: start_record.vertex(),
            hops: 0,
        });
        let limit = opts.max_results.unwrap_or(usize::MAX);

        while let Some(&current) = frontier.peek() {
            let record = self.record_at(current);
            let depth = state.hops(record.id());
            debug_assert!(depth.is_some(), "queued vertex without hop count");
            let depth = depth.unwrap_or_default();
            let expand = opts.max_depth.map_or(true, |max| depth < max);

            if expand && visits.len() < limit {
                for &neighbor in record.neighbors() {
                    let pos = self
                        .position_of(neighbor)
                        .ok_or(GraphError::VertexNotFound)?;
                    if !state.discover(neighbor, depth + 1) {
                        continue;
                    }
                    frontier.enqueue(pos)?;
                    visits.try_reserve(1)?;
                    visits.push(BfsVisit {
                        id: neighbor,
                        vertex: self.record_at(pos).vertex(),
                        hops: depth + 1,
                    });
                    trace!(
                        vertex = %neighbor,
                        hops = depth + 1,
                        queued = frontier.len(),
                        "bfs.discover"
                    );
                    if visits.len() >= limit {
                        break;
                    }
                }
            }

            frontier.dequeue();
            state.mark_processed(record.id());
        }

        debug_assert!(frontier.is_empty());
        debug_assert_eq!(state.count(VertexState::Discovered), 0);
        Ok((visits, state))
    }

    /// Hop distance from `from` to `to`, or `None` when `to` is unreachable.
    ///
    /// A missing `from` reports [`GraphError::StartNotFound`] before `to` is
    /// looked up.
    pub fn hops_between(&self, from: &T, to: &T) -> Result<Option<u32>> {
        let start_pos = self
            .find_position(from)
            .ok_or(GraphError::StartNotFound)?;
        let target = self.vertex_id(to).ok_or(GraphError::VertexNotFound)?;
        let (visits, _) = self.traverse(start_pos, &BfsOptions::default())?;
        self.metrics().bfs_completed(visits.len());
        Ok(visits
            .iter()
            .find(|visit| visit.id == target)
            .map(|visit| visit.hops))
    }

    /// Payloads reachable from `start`, in discovery order.
    pub fn reachable(&self, start: &T) -> Result<Vec<&T>> {
        Ok(self
            .bfs(start)?
            .into_iter()
            .map(|visit| visit.vertex)
            .collect())
    }

    /// Traversal record of `target` after a full traversal from `start`.
    #[cfg(test)]
    pub(crate) fn bfs_state_of(
        &self,
        start: &T,
        target: &T,
    ) -> Result<Option<super::state::BfsVertex>> {
        let start_pos = self
            .find_position(start)
            .ok_or(GraphError::StartNotFound)?;
        let target = self.vertex_id(target).ok_or(GraphError::VertexNotFound)?;
        let (_, state) = self.traverse(start_pos, &BfsOptions::default())?;
        Ok(state.get(target))
    }
}
