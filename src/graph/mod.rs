//! Graph model: named vertices positioned in the plane, joined by weighted edges.
//!
//! Vertical split:
//! - `vertex`: vertex entities and `VertexId` handles
//! - `edge`: directed edges and the edge store
//! - `registry`: the `Graph` that owns both
//! - `tests`: module tests

pub mod edge;
pub mod registry;
pub mod vertex;

pub use edge::{Edge, EdgeId, Outgoing};
pub use registry::Graph;
pub use vertex::{Position, Vertex, VertexId};
