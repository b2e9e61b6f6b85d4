//! Path reconstruction from a shortest-path tree.

use std::fmt;

use serde::Serialize;

use super::ShortestPathTree;
use crate::graph::{Edge, EdgeId, Graph, VertexId};

/// One hop of a [`Path`], with endpoint names borrowed from the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathEdge<'g> {
    /// The directed edge this hop travels along.
    pub id: EdgeId,
    /// Name of the vertex the hop leaves.
    pub from: &'g str,
    /// Name of the vertex the hop enters.
    pub to: &'g str,
    /// Weight of the edge.
    pub distance: f64,
}

impl<'g> PathEdge<'g> {
    fn new(graph: &'g Graph, id: EdgeId, edge: &Edge) -> Self {
        Self {
            id,
            from: graph.name_of(edge.start),
            to: graph.name_of(edge.end),
            distance: edge.distance,
        }
    }
}

/// An ordered sequence of edges from a source to a target.
///
/// An empty path means the target was the source itself or was unreachable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path<'g> {
    edges: Vec<PathEdge<'g>>,
}

impl<'g> Path<'g> {
    /// The hops, source to target.
    pub fn edges(&self) -> &[PathEdge<'g>] {
        &self.edges
    }

    /// Iterates over the hops, source to target.
    pub fn iter(&self) -> std::slice::Iter<'_, PathEdge<'g>> {
        self.edges.iter()
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the path has no hops.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the hop weights; `0` for an empty path.
    pub fn total_distance(&self) -> f64 {
        self.edges.iter().fold(0.0, |acc, e| acc + e.distance)
    }

    /// Names of the vertices visited, source first. Empty for an empty path.
    pub fn vertices(&self) -> Vec<&'g str> {
        let Some(first) = self.edges.first() else {
            return Vec::new();
        };
        let mut names = Vec::with_capacity(self.edges.len() + 1);
        names.push(first.from);
        names.extend(self.edges.iter().map(|e| e.to));
        names
    }
}

impl<'a, 'g> IntoIterator for &'a Path<'g> {
    type Item = &'a PathEdge<'g>;
    type IntoIter = std::slice::Iter<'a, PathEdge<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Renders hops as `(A - B, 2), (B - C, 3)`.
impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({} - {}, {})", e.from, e.to, e.distance)?;
        }
        Ok(())
    }
}

impl<'g> ShortestPathTree<'g> {
    /// Reconstructs the path from the source to `target`.
    ///
    /// Walks the predecessor links back from `target`, taking the edge that
    /// was recorded during relaxation at each step, then reverses them.
    ///
    /// # Panics
    /// Panics if `target` does not belong to the graph.
    pub fn path_to(&self, target: VertexId) -> Path<'g> {
        let graph = self.graph;
        let mut edges = Vec::new();
        let mut current = target;

        while let Some(pred) = self.state(current).previous {
            if let Some(edge) = graph.edge(pred.edge) {
                edges.push(PathEdge::new(graph, pred.edge, edge));
            }
            current = pred.vertex;
        }

        edges.reverse();
        Path { edges }
    }

    /// Like [`ShortestPathTree::path_to`], addressing the target by name.
    ///
    /// Returns `None` if no vertex is named `target`.
    pub fn path_to_name(&self, target: &str) -> Option<Path<'g>> {
        self.graph.vertex_id(target).map(|id| self.path_to(id))
    }
}
