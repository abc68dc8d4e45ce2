//! In-memory adjacency-list graph store with a breadth-first traversal engine.
//!
//! A [`Graph`] owns its vertex payloads and the adjacency relation between
//! them. Vertex identity is decided by a client-supplied [`Equatable`]
//! capability; traversal computes hop distances from a start vertex without
//! ever touching the stored payloads.
//!
//! ```
//! use hopgraph::Graph;
//!
//! let mut graph = Graph::new();
//! for v in [2, 6, 4, 7, 5] {
//!     graph.insert_vertex(v)?;
//! }
//! for (a, b) in [(2, 6), (2, 4), (6, 4), (6, 7), (4, 7), (6, 5)] {
//!     graph.insert_edge(&a, &b)?;
//! }
//! let hops: Vec<(i32, u32)> = graph
//!     .bfs(&2)?
//!     .into_iter()
//!     .map(|visit| (*visit.vertex, visit.hops))
//!     .collect();
//! assert_eq!(hops, vec![(2, 0), (6, 1), (4, 1), (7, 2), (5, 2)]);
//! # Ok::<(), hopgraph::GraphError>(())
//! ```

pub mod capability;
pub mod error;
pub mod storage;
pub mod traversal;
pub mod types;

pub use capability::{
    Capabilities, DebugPrinter, Destroyable, DisplayPrinter, Equatable, PartialEqMatch, Printable,
};
pub use error::{GraphError, Result};
pub use storage::{AdjacencyRecord, Graph, GraphOptions, InEdgePolicy};
pub use traversal::{BfsOptions, BfsVisit};
pub use types::VertexId;
