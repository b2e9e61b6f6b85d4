//! Graph construction settings.
//!
//! `GraphConfig` is deliberately small: it carries capacity hints and the
//! policy for negative edge weights. It derives serde traits so a host
//! application can embed it in its own configuration file.

use serde::{Deserialize, Serialize};

/// How [`Graph::add_edge`](crate::Graph::add_edge) treats negative weights.
///
/// Non-finite weights are rejected regardless of the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Negative weights fail with [`Error::NegativeWeight`](crate::Error::NegativeWeight).
    #[default]
    RejectNegative,
    /// Negative weights are stored as given.
    ///
    /// Dijkstra's correctness guarantee does not hold for such graphs;
    /// distances and paths may be suboptimal.
    AllowNegative,
}

/// Settings applied when building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Policy for negative edge weights.
    pub weight_policy: WeightPolicy,
    /// Number of vertices to pre-allocate storage for.
    pub vertex_capacity: usize,
    /// Number of directed edges to pre-allocate storage for.
    pub edge_capacity: usize,
}

impl GraphConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the negative-weight policy.
    #[must_use]
    pub fn weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.weight_policy = policy;
        self
    }

    /// Sets the vertex and edge capacity hints.
    #[must_use]
    pub fn capacity(mut self, vertices: usize, edges: usize) -> Self {
        self.vertex_capacity = vertices;
        self.edge_capacity = edges;
        self
    }
}
