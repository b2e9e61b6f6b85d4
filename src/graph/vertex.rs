//! Vertex entities and their arena handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A handle to a vertex in a [`Graph`](crate::Graph).
///
/// This is a lightweight wrapper around the vertex's arena index. Vertices
/// are never removed, so a handle stays valid for the lifetime of the graph
/// that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(
            index <= u32::MAX as usize,
            "vertex index overflow: too many vertices"
        );
        Self(index as u32)
    }

    /// Returns the underlying arena index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A point in the integer plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A named location.
///
/// Only static data lives here. The outgoing edge list is held by the
/// graph's topology table, and shortest-path state is kept per query in
/// [`VertexState`](crate::VertexState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    position: Position,
}

impl Vertex {
    /// Creates a vertex with the given name and coordinates.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }

    /// The unique name of this vertex.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The position of this vertex in the plane.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Shorthand for `position().x`.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Shorthand for `position().y`.
    pub fn y(&self) -> i32 {
        self.position.y
    }
}
