//! # `wayfind` - Shortest Paths Between Named Locations
//!
//! A small graph engine for weighted, undirected maps of named locations
//! positioned in the plane. It registers vertices and edges, runs
//! Dijkstra's algorithm from a source, and reconstructs the edge-by-edge
//! route and total distance to any target.
//!
//! ## Design
//!
//! - **Arena storage**: vertices live in a dense vector addressed by
//!   [`VertexId`]; names are resolved once through a hash index.
//! - **Contiguous edges**: all directed edges share one store, with each
//!   vertex's outgoing list threaded through it.
//! - **Query-local state**: Dijkstra never writes to the graph. Distances,
//!   settled flags and predecessor links live in a [`ShortestPathTree`]
//!   allocated per run, so queries can share a `&Graph`.
//! - **Exact predecessor edges**: each predecessor link records the edge
//!   that was relaxed, so path reconstruction is a plain walk back to the
//!   source and is correct with parallel edges.
//!
//! ## Invariants
//!
//! **Registry**: names are unique, and every edge's endpoints were
//! registered before the edge. A failed insertion leaves the graph as it was.
//!
//! **Weights**: finite, and non-negative unless the graph was built with
//! [`WeightPolicy::AllowNegative`]; Dijkstra's optimality holds only for
//! non-negative weights.
//!
//! **Paths**: a path from `s` to `t` is a connected chain of edges whose
//! summed weight equals the distance of `t` in the tree rooted at `s`. It
//! is empty when `s == t` or `t` is unreachable.
//!
//! ## Example
//!
//! ```rust
//! use wayfind::Graph;
//!
//! # fn main() -> wayfind::Result<()> {
//! let mut graph = Graph::new();
//! graph.add_vertex("A", 0, 0)?;
//! graph.add_vertex("B", 1, 0)?;
//! graph.add_vertex("C", 2, 0)?;
//! graph.add_undirected_edge("A", "B", 2.0)?;
//! graph.add_undirected_edge("B", "C", 3.0)?;
//! graph.add_undirected_edge("A", "C", 10.0)?;
//!
//! let path = graph.get_path("A", "C")?;
//! assert_eq!(path.vertices(), ["A", "B", "C"]);
//! assert_eq!(graph.total_distance("A", "C")?, 5.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod shortest_path;

pub use config::{GraphConfig, WeightPolicy};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Position, Vertex, VertexId};
pub use shortest_path::{dijkstra, Path, PathEdge, Predecessor, ShortestPathTree, VertexState};

// Compile-time assertions for handle layout
const _: () = {
    use core::mem;

    // Handles are plain `u32` indices.
    assert!(mem::size_of::<VertexId>() == 4);
    assert!(mem::size_of::<EdgeId>() == 4);

    // A predecessor link is two handles with no padding.
    assert!(mem::size_of::<Predecessor>() == 8);
};
