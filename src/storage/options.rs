use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::metrics::{default_metrics, GraphMetrics};

/// What vertex removal does about edges that still point at the removed vertex.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InEdgePolicy {
    /// Refuse the removal with [`crate::GraphError::VertexReferenced`].
    #[default]
    Reject,
    /// Drop every in-edge naming the vertex, then remove it.
    Detach,
}

impl fmt::Display for InEdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InEdgePolicy::Reject => "reject",
            InEdgePolicy::Detach => "detach",
        })
    }
}

impl FromStr for InEdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(InEdgePolicy::Reject),
            "detach" => Ok(InEdgePolicy::Detach),
            other => Err(format!("unknown in-edge policy '{other}'")),
        }
    }
}

/// Configuration options supplied when creating a [`super::Graph`].
#[derive(Clone)]
pub struct GraphOptions {
    /// Whether edges are one-way. Undirected graphs mirror every edge.
    pub directed: bool,
    /// Handling of in-edges when a vertex is removed.
    pub in_edge_policy: InEdgePolicy,
    /// Metrics sink notified after successful operations.
    pub metrics: Arc<dyn GraphMetrics>,
    /// Number of vertices to reserve room for up front.
    pub vertex_capacity: usize,
}

impl GraphOptions {
    /// Creates options with default settings: directed, rejecting dangling in-edges.
    pub fn new() -> Self {
        Self {
            directed: true,
            in_edge_policy: InEdgePolicy::Reject,
            metrics: default_metrics(),
            vertex_capacity: 0,
        }
    }

    /// Sets whether the graph is directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets the in-edge policy applied on vertex removal.
    pub fn in_edge_policy(mut self, policy: InEdgePolicy) -> Self {
        self.in_edge_policy = policy;
        self
    }

    /// Sets the metrics collection implementation.
    pub fn metrics(mut self, metrics: Arc<dyn GraphMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Reserves room for `capacity` vertices at creation.
    pub fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GraphOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphOptions")
            .field("directed", &self.directed)
            .field("in_edge_policy", &self.in_edge_policy)
            .field("vertex_capacity", &self.vertex_capacity)
            .finish_non_exhaustive()
    }
}
