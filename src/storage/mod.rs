//! Graph store: the vertex set and the adjacency relation.
//!
//! Implements the in-memory adjacency-list [`Graph`], its construction
//! options and the metrics hooks it reports to.

mod graph;
mod metrics;
mod options;

/// Core graph storage implementation.
pub use graph::{AdjacencyRecord, Graph};

/// Metrics and profiling.
pub use metrics::{default_metrics, CounterMetrics, GraphMetrics, NoopMetrics};

/// Graph configuration options.
pub use options::{GraphOptions, InEdgePolicy};
