use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Trait for tracking graph mutations and traversals.
///
/// Implementations collect statistics about vertex and edge churn, linear
/// vertex scans and completed traversals. Every hook is called after the
/// corresponding operation succeeded.
pub trait GraphMetrics: Send + Sync {
    /// Records the insertion of a vertex.
    fn vertex_inserted(&self);

    /// Records the removal of a vertex.
    fn vertex_removed(&self);

    /// Records the insertion of one adjacency entry.
    fn edge_inserted(&self);

    /// Records the removal of one adjacency entry.
    fn edge_removed(&self);

    /// Records a linear scan over the vertex sequence.
    ///
    /// # Parameters
    /// * `visited` - Number of adjacency records compared before the scan stopped.
    fn vertex_scan(&self, visited: usize);

    /// Records a completed breadth-first traversal.
    ///
    /// # Parameters
    /// * `reached` - Number of vertices in the traversal result.
    fn bfs_completed(&self, reached: usize);
}

/// A no-op implementation of [`GraphMetrics`] that discards all recorded metrics.
#[derive(Default)]
pub struct NoopMetrics;

impl GraphMetrics for NoopMetrics {
    fn vertex_inserted(&self) {}
    fn vertex_removed(&self) {}
    fn edge_inserted(&self) {}
    fn edge_removed(&self) {}
    fn vertex_scan(&self, _visited: usize) {}
    fn bfs_completed(&self, _reached: usize) {}
}

/// A thread-safe counter-based implementation of [`GraphMetrics`].
#[derive(Default, Debug)]
pub struct CounterMetrics {
    /// Number of vertices inserted.
    pub vertices_inserted: AtomicU64,

    /// Number of vertices removed.
    pub vertices_removed: AtomicU64,

    /// Number of adjacency entries inserted.
    pub edges_inserted: AtomicU64,

    /// Number of adjacency entries removed.
    pub edges_removed: AtomicU64,

    /// Number of linear vertex scans performed.
    pub vertex_scans: AtomicU64,

    /// Total adjacency records compared across all scans.
    pub vertex_scan_steps: AtomicU64,

    /// Number of completed traversals.
    pub bfs_runs: AtomicU64,

    /// Total vertices reached across all traversals.
    pub bfs_reached: AtomicU64,
}

impl CounterMetrics {
    /// Reads a counter with relaxed ordering.
    pub fn get(counter: &AtomicU64) -> u64 {
        counter.load(Ordering::Relaxed)
    }
}

impl GraphMetrics for CounterMetrics {
    fn vertex_inserted(&self) {
        self.vertices_inserted.fetch_add(1, Ordering::Relaxed);
    }

    fn vertex_removed(&self) {
        self.vertices_removed.fetch_add(1, Ordering::Relaxed);
    }

    fn edge_inserted(&self) {
        self.edges_inserted.fetch_add(1, Ordering::Relaxed);
    }

    fn edge_removed(&self) {
        self.edges_removed.fetch_add(1, Ordering::Relaxed);
    }

    fn vertex_scan(&self, visited: usize) {
        self.vertex_scans.fetch_add(1, Ordering::Relaxed);
        self.vertex_scan_steps
            .fetch_add(visited as u64, Ordering::Relaxed);
    }

    fn bfs_completed(&self, reached: usize) {
        self.bfs_runs.fetch_add(1, Ordering::Relaxed);
        self.bfs_reached.fetch_add(reached as u64, Ordering::Relaxed);
    }
}

/// Returns the default metrics implementation wrapped in an [`Arc`].
///
/// The default implementation is [`NoopMetrics`].
pub fn default_metrics() -> Arc<dyn GraphMetrics> {
    Arc::new(NoopMetrics)
}
