//! The vertex/edge registry.
//!
//! `Graph` owns every vertex and edge. Vertices are kept in a dense arena
//! indexed by [`VertexId`], with a name index on the side for lookups by
//! name. Topology (the ends of each vertex's outgoing edge list) is stored
//! in a vector parallel to the arena, so traversals walk contiguous memory
//! and never touch the vertex names.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | One hash insert, two pushes |
//! | `add_edge` | \(O(1)\) amortized | Two name lookups, tail append |
//! | `vertex` | \(O(1)\) expected | Hash lookup by name |
//! | `outgoing` | \(O(\text{out-degree})\) | Intrusive list walk |

use std::collections::HashMap;

use tracing::{trace, warn};

use super::edge::{Edge, EdgeId, EdgeList, EdgeStore, Outgoing};
use super::vertex::{Vertex, VertexId};
use crate::config::{GraphConfig, WeightPolicy};
use crate::error::{Error, Result};

/// A weighted graph of named locations.
///
/// Vertices and edges are only ever added. Shortest-path queries borrow the
/// graph immutably and keep their own state, so any number of queries can
/// run against one graph while no mutation is in progress.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    config: GraphConfig,
    vertices: Vec<Vertex>,
    /// Outgoing edge lists, indexed by `VertexId`.
    topology: Vec<EdgeList>,
    edges: EdgeStore,
    names: HashMap<String, VertexId>,
}

impl Graph {
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges` directed edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self::with_config(GraphConfig::new().capacity(vertices, edges))
    }

    /// Creates an empty graph using `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: Vec::with_capacity(config.vertex_capacity),
            topology: Vec::with_capacity(config.vertex_capacity),
            edges: EdgeStore::with_capacity(config.edge_capacity),
            names: HashMap::with_capacity(config.vertex_capacity),
            config,
        }
    }

    /// The configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a vertex named `name` at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateVertex`] if the name is taken. The graph is
    /// left unchanged.
    pub fn add_vertex(&mut self, name: impl Into<String>, x: i32, y: i32) -> Result<VertexId> {
        self.insert_vertex(Vertex::new(name, x, y))
    }

    /// Adds a pre-built vertex, keyed by its name.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateVertex`] if the name is taken.
    pub fn insert_vertex(&mut self, vertex: Vertex) -> Result<VertexId> {
        if self.names.contains_key(vertex.name()) {
            return Err(Error::DuplicateVertex(vertex.name().to_owned()));
        }

        let id = VertexId::new(self.vertices.len());
        trace!(vertex = vertex.name(), %id, x = vertex.x(), y = vertex.y(), "adding vertex");
        self.names.insert(vertex.name().to_owned(), id);
        self.vertices.push(vertex);
        self.topology.push(EdgeList::default());
        Ok(id)
    }

    /// Adds a directed edge `from -> to` owned by `from`.
    ///
    /// # Errors
    /// - [`Error::UnknownVertex`] naming the first missing endpoint (`from` is checked first).
    /// - [`Error::InvalidWeight`] if `weight` is `NaN` or infinite.
    /// - [`Error::NegativeWeight`] if `weight < 0` under [`WeightPolicy::RejectNegative`].
    ///
    /// On error the graph is left unchanged.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<EdgeId> {
        let start = self.require(from)?;
        let end = self.require(to)?;
        self.check_weight(from, to, weight)?;

        let id = self.edges.push(
            &mut self.topology[start.index()],
            Edge {
                start,
                end,
                distance: weight,
            },
        );
        trace!(from, to, weight, edge = id.index(), "adding edge");
        Ok(id)
    }

    /// Adds an undirected connection as two directed edges with the same weight.
    ///
    /// Returns the ids of the `a -> b` and `b -> a` edges. The two insertions
    /// are not atomic, but the first one validates both endpoints and the
    /// weight, so once it succeeds the second cannot fail.
    ///
    /// # Errors
    /// Same as [`Graph::add_edge`].
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<(EdgeId, EdgeId)> {
        let forward = self.add_edge(a, b, weight)?;
        let backward = self.add_edge(b, a, weight)?;
        Ok((forward, backward))
    }

    pub(crate) fn require(&self, name: &str) -> Result<VertexId> {
        self.vertex_id(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_owned()))
    }

    fn check_weight(&self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            });
        }
        if weight < 0.0 {
            match self.config.weight_policy {
                WeightPolicy::RejectNegative => {
                    return Err(Error::NegativeWeight {
                        from: from.to_owned(),
                        to: to.to_owned(),
                        weight,
                    });
                }
                WeightPolicy::AllowNegative => {
                    warn!(from, to, weight, "negative edge weight; shortest paths may be incorrect");
                }
            }
        }
        Ok(())
    }

    /// Looks up the id of the vertex named `name`.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Looks up the vertex named `name`.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).map(|id| &self.vertices[id.index()])
    }

    /// Returns the vertex behind `id`, if `id` belongs to this graph.
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Returns `true` if a vertex named `name` exists.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns the edge behind `id`, if `id` belongs to this graph.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Iterates over all directed edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter()
    }

    /// Iterates over the outgoing edges of `vertex`, in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` does not belong to this graph.
    pub fn outgoing(&self, vertex: VertexId) -> Outgoing<'_> {
        self.edges.outgoing(&self.topology[vertex.index()])
    }

    /// Resolves a vertex id to its name.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn name_of(&self, id: VertexId) -> &str {
        self.vertices[id.index()].name()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges. An undirected connection counts twice.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
