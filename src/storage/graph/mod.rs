use std::fmt;
use std::mem;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::capability::Capabilities;
use crate::types::VertexId;

use super::metrics::GraphMetrics;
use super::options::{GraphOptions, InEdgePolicy};

mod adjacency_ops;
mod edge_ops;
mod graph_types;
mod vertex_ops;

pub use graph_types::AdjacencyRecord;

/// Adjacency-list graph owning its vertex payloads.
///
/// Vertices live in insertion order, one [`AdjacencyRecord`] each. Vertex
/// identity is decided by the equality capability; lookups by payload scan the
/// vertex sequence, while neighbor entries are stored as [`VertexId`] handles
/// that resolve in constant time.
pub struct Graph<T> {
    records: Vec<AdjacencyRecord<T>>,
    positions: FxHashMap<VertexId, usize>,
    next_vertex_id: u64,
    edge_count: usize,
    directed: bool,
    in_edge_policy: InEdgePolicy,
    caps: Capabilities<T>,
    metrics: Arc<dyn GraphMetrics>,
}

impl<T: PartialEq> Graph<T> {
    /// Creates an empty directed graph comparing vertices with `PartialEq`.
    pub fn new() -> Self {
        Self::create(Capabilities::partial_eq(), GraphOptions::default())
    }

    /// Creates an empty graph comparing vertices with `PartialEq`.
    pub fn with_options(opts: GraphOptions) -> Self {
        Self::create(Capabilities::partial_eq(), opts)
    }
}

impl<T: PartialEq> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Creates an empty graph driven by the supplied capabilities.
    pub fn create(caps: Capabilities<T>, opts: GraphOptions) -> Self {
        debug!(
            directed = opts.directed,
            in_edge_policy = %opts.in_edge_policy,
            destroyer = caps.has_destroyer(),
            "graph.create"
        );
        Self {
            records: Vec::with_capacity(opts.vertex_capacity),
            positions: FxHashMap::default(),
            next_vertex_id: 1,
            edge_count: 0,
            directed: opts.directed,
            in_edge_policy: opts.in_edge_policy,
            caps,
            metrics: opts.metrics,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.records.len()
    }

    /// Number of adjacency entries across all vertices.
    ///
    /// Undirected graphs store every edge in both directions, so one
    /// [`Graph::insert_edge`] between distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true when the graph holds no vertex.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true for directed graphs.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Policy applied to in-edges on vertex removal.
    pub fn in_edge_policy(&self) -> InEdgePolicy {
        self.in_edge_policy
    }

    /// Adjacency records in vertex insertion order.
    pub fn adjacency_records(&self) -> impl ExactSizeIterator<Item = &AdjacencyRecord<T>> + '_ {
        self.records.iter()
    }

    /// Handle of the vertex equal to `vertex`, if present.
    pub fn vertex_id(&self, vertex: &T) -> Option<VertexId> {
        self.find_position(vertex).map(|pos| self.records[pos].id)
    }

    /// Returns true when a vertex equal to `vertex` is present.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.find_position(vertex).is_some()
    }

    /// Payload behind a handle.
    pub fn vertex(&self, id: VertexId) -> Option<&T> {
        self.record(id).map(|record| &record.vertex)
    }

    /// Adjacency record behind a handle.
    pub fn record(&self, id: VertexId) -> Option<&AdjacencyRecord<T>> {
        self.position_of(id).map(|pos| &self.records[pos])
    }

    /// Tears the graph down, running the destroyer capability on every payload.
    pub fn destroy(self) {
        drop(self);
    }

    pub(crate) fn record_at(&self, pos: usize) -> &AdjacencyRecord<T> {
        &self.records[pos]
    }

    pub(crate) fn position_of(&self, id: VertexId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn metrics(&self) -> &dyn GraphMetrics {
        self.metrics.as_ref()
    }

    /// Linear scan of the vertex sequence through the equality capability.
    pub(crate) fn find_position(&self, vertex: &T) -> Option<usize> {
        let found = self
            .records
            .iter()
            .position(|record| self.caps.equals.equals(vertex, &record.vertex));
        self.metrics
            .vertex_scan(found.map_or(self.records.len(), |pos| pos + 1));
        found
    }

    fn reindex_from(&mut self, start: usize) {
        for (offset, record) in self.records[start..].iter().enumerate() {
            self.positions.insert(record.id, start + offset);
        }
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let arcs: usize = self.records.iter().map(|record| record.neighbors.len()).sum();
        debug_assert_eq!(arcs, self.edge_count, "edge count drifted");
        debug_assert_eq!(self.positions.len(), self.records.len());
        for (pos, record) in self.records.iter().enumerate() {
            debug_assert_eq!(self.positions.get(&record.id), Some(&pos));
            for neighbor in &record.neighbors {
                debug_assert!(
                    self.positions.contains_key(neighbor),
                    "dangling neighbor {neighbor}"
                );
            }
        }
    }
}

impl<T> Drop for Graph<T> {
    fn drop(&mut self) {
        let records = mem::take(&mut self.records);
        self.positions.clear();
        let released = records.len();
        if let Some(destroyer) = self.caps.destroyer.as_ref() {
            for record in records {
                destroyer.destroy(record.vertex);
            }
        }
        debug!(vertices = released, edges = self.edge_count, "graph.destroy");
    }
}

impl<T: fmt::Debug> fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.records.len())
            .field("edge_count", &self.edge_count)
            .field("directed", &self.directed)
            .field("records", &self.records)
            .finish()
    }
}
