//! Directed edges and their storage.
//!
//! Edges live in a single append-only store. Each vertex's outgoing edges
//! form an intrusive singly-linked list threaded through the store
//! (`next_outgoing`), with the list ends kept in the graph's topology
//! table. This keeps all edge data contiguous while still giving O(1)
//! insertion at the tail, so neighbours are visited in insertion order.

use super::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// A handle to a directed edge in a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(
            index <= u32::MAX as usize,
            "edge index overflow: too many edges"
        );
        Self(index as u32)
    }

    /// Returns the underlying store index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed, weighted connection owned by its `start` vertex.
///
/// An undirected connection is stored as two `Edge`s, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The owning vertex.
    pub start: VertexId,
    /// The vertex this edge leads to.
    pub end: VertexId,
    /// The edge weight.
    pub distance: f64,
}

/// Head and tail of one vertex's outgoing edge list.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EdgeList {
    head: Option<EdgeId>,
    tail: Option<EdgeId>,
}

/// SoA store: edge payloads in one vector, list links in a parallel one.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeStore {
    edges: Vec<Edge>,
    next_outgoing: Vec<Option<EdgeId>>,
}

impl EdgeStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            next_outgoing: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    /// Appends `edge` and links it at the tail of `list`.
    pub(crate) fn push(&mut self, list: &mut EdgeList, edge: Edge) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        self.next_outgoing.push(None);

        match list.tail {
            Some(tail) => self.next_outgoing[tail.index()] = Some(id),
            None => list.head = Some(id),
        }
        list.tail = Some(id);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| (EdgeId::new(idx), edge))
    }

    pub(crate) fn outgoing<'a>(&'a self, list: &EdgeList) -> Outgoing<'a> {
        Outgoing {
            store: self,
            curr: list.head,
        }
    }
}

/// Iterator over one vertex's outgoing edges, in insertion order.
pub struct Outgoing<'a> {
    store: &'a EdgeStore,
    curr: Option<EdgeId>,
}

impl<'a> Iterator for Outgoing<'a> {
    type Item = (EdgeId, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.curr?;
        let idx = id.index();
        self.curr = self.store.next_outgoing[idx];
        Some((id, &self.store.edges[idx]))
    }
}
