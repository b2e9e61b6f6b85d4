//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! A query never writes to the graph. All per-query bookkeeping lives in a
//! [`VertexState`] table that is allocated fresh for every run, so an
//! unreached vertex can never carry a distance over from an earlier query.
//!
//! The frontier is a `BinaryHeap` with lazy deletion: a vertex whose
//! distance improves is pushed again rather than re-keyed, and entries for
//! vertices that are already settled are skipped when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use ordered_float::OrderedFloat;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};

pub mod path;
#[cfg(test)]
mod tests;

pub use path::{Path, PathEdge};

/// The predecessor link of a vertex in a shortest-path tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Predecessor {
    /// The previous vertex on the shortest path.
    pub vertex: VertexId,
    /// The exact edge relaxed to reach this vertex.
    pub edge: EdgeId,
}

/// Per-query state of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VertexState {
    /// `true` once the vertex's distance is final.
    pub settled: bool,
    /// Best known distance from the query source; `+inf` if unreached.
    pub distance: f64,
    /// How the vertex was reached; `None` for the source and unreached vertices.
    pub previous: Option<Predecessor>,
}

impl Default for VertexState {
    fn default() -> Self {
        Self {
            settled: false,
            distance: f64::INFINITY,
            previous: None,
        }
    }
}

/// The outcome of one Dijkstra run: distances and predecessor links for every vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    source: VertexId,
    states: Vec<VertexState>,
}

impl<'g> ShortestPathTree<'g> {
    /// The graph this tree was computed over.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The query source.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The full state of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` does not belong to the graph.
    pub fn state(&self, vertex: VertexId) -> &VertexState {
        &self.states[vertex.index()]
    }

    /// All vertex states, indexed by `VertexId`.
    pub fn states(&self) -> &[VertexState] {
        &self.states
    }

    /// Shortest distance from the source, or `None` if `vertex` is unreachable.
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        let distance = self.states.get(vertex.index())?.distance;
        distance.is_finite().then_some(distance)
    }

    /// Returns `true` if `vertex` was reached from the source.
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Returns `true` if `vertex` was settled during the run.
    pub fn is_settled(&self, vertex: VertexId) -> bool {
        self.states.get(vertex.index()).is_some_and(|s| s.settled)
    }

    /// The predecessor link of `vertex`.
    pub fn previous(&self, vertex: VertexId) -> Option<Predecessor> {
        self.states.get(vertex.index())?.previous
    }

    /// Number of vertices settled by the run (the source included).
    pub fn settled_count(&self) -> usize {
        self.states.iter().filter(|s| s.settled).count()
    }
}

/// Runs Dijkstra's algorithm from `source` over the whole graph.
///
/// Edge weights are assumed non-negative. Graphs built with
/// [`WeightPolicy::AllowNegative`](crate::WeightPolicy) still terminate, but
/// distances are not guaranteed to be minimal.
///
/// # Panics
/// Panics if `source` does not belong to `graph`.
pub fn dijkstra(graph: &Graph, source: VertexId) -> ShortestPathTree<'_> {
    let started = Instant::now();
    debug!(source = graph.name_of(source), vertices = graph.vertex_count(), "dijkstra start");

    let mut states = vec![VertexState::default(); graph.vertex_count()];
    let mut frontier = BinaryHeap::with_capacity(graph.vertex_count());
    let mut settled = 0usize;

    states[source.index()].distance = 0.0;
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((_, u))) = frontier.pop() {
        let state = &mut states[u.index()];
        // Stale entry: `u` was already settled through a shorter key.
        if state.settled {
            continue;
        }
        state.settled = true;
        settled += 1;
        let du = state.distance;

        for (edge_id, edge) in graph.outgoing(u) {
            let v = &mut states[edge.end.index()];
            if v.settled {
                continue;
            }
            let candidate = du + edge.distance;
            if candidate < v.distance {
                v.distance = candidate;
                v.previous = Some(Predecessor {
                    vertex: u,
                    edge: edge_id,
                });
                frontier.push(Reverse((OrderedFloat(candidate), edge.end)));
            }
        }
    }

    debug!(
        source = graph.name_of(source),
        settled,
        elapsed_us = started.elapsed().as_micros() as u64,
        "dijkstra done"
    );

    ShortestPathTree {
        graph,
        source,
        states,
    }
}

impl Graph {
    /// Runs Dijkstra's algorithm from the vertex named `source`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `source` is not registered.
    pub fn shortest_paths(&self, source: &str) -> Result<ShortestPathTree<'_>> {
        let source = self.require(source)?;
        Ok(dijkstra(self, source))
    }

    /// Returns the shortest path from `source` to `target`.
    ///
    /// Every call recomputes the whole shortest-path tree from `source`. To
    /// extract several paths from one source, call [`Graph::shortest_paths`]
    /// once and use [`ShortestPathTree::path_to`].
    ///
    /// The path is empty when `target` is unreachable or equal to `source`.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) naming the
    /// first unknown name (`source` is checked first).
    pub fn get_path(&self, source: &str, target: &str) -> Result<Path<'_>> {
        let source = self.require(source)?;
        let target = self.require(target)?;
        Ok(dijkstra(self, source).path_to(target))
    }

    /// Sum of the edge weights along [`Graph::get_path`]; `0` for an empty path.
    ///
    /// # Errors
    /// Same as [`Graph::get_path`].
    pub fn total_distance(&self, source: &str, target: &str) -> Result<f64> {
        Ok(self.get_path(source, target)?.total_distance())
    }
}
