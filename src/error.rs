//! Error types for graph construction and shortest-path queries.
//!
//! Every failure is raised synchronously at the call that caused it and
//! leaves the graph exactly as it was before the call.

use thiserror::Error;

/// Result type alias for `wayfind` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a [`Graph`](crate::Graph).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A vertex with this name is already registered.
    #[error("vertex '{0}' already exists")]
    DuplicateVertex(String),

    /// An edge or query referenced a name that is not registered.
    #[error("vertex '{0}' does not exist")]
    UnknownVertex(String),

    /// A negative weight was rejected by [`WeightPolicy::RejectNegative`](crate::WeightPolicy).
    #[error("edge '{from}' -> '{to}' has negative weight {weight}")]
    NegativeWeight {
        /// Name of the owning vertex.
        from: String,
        /// Name of the target vertex.
        to: String,
        /// The rejected weight.
        weight: f64,
    },

    /// The weight was `NaN` or infinite.
    #[error("edge '{from}' -> '{to}' has non-finite weight {weight}")]
    InvalidWeight {
        /// Name of the owning vertex.
        from: String,
        /// Name of the target vertex.
        to: String,
        /// The rejected weight.
        weight: f64,
    },
}

impl Error {
    /// Returns `true` if this error was caused by a bad edge weight.
    pub fn is_weight_error(&self) -> bool {
        matches!(self, Self::NegativeWeight { .. } | Self::InvalidWeight { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_vertex() {
        assert_eq!(
            Error::DuplicateVertex("A".into()).to_string(),
            "vertex 'A' already exists"
        );
        assert_eq!(
            Error::UnknownVertex("Z".into()).to_string(),
            "vertex 'Z' does not exist"
        );
    }

    #[test]
    fn weight_errors_are_classified() {
        let err = Error::NegativeWeight {
            from: "A".into(),
            to: "B".into(),
            weight: -1.0,
        };
        assert!(err.is_weight_error());
        assert_eq!(err.to_string(), "edge 'A' -> 'B' has negative weight -1");
        assert!(!Error::UnknownVertex("A".into()).is_weight_error());
    }
}
