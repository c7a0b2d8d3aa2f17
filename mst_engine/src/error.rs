// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Error types for the spanning tree engine.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::VertexId;

/// Error type for strict graph operations.
///
/// The permissive operations (`Graph::add_edge`, `Graph::set_vertex_label`)
/// never produce these; they drop invalid input instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphError {
    /// Vertex index is not in `[0, vertex_count)`.
    VertexOutOfRange { index: VertexId, vertex_count: usize },
    /// Edge weight is NaN and cannot be ordered.
    InvalidWeight { from: VertexId, to: VertexId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "Vertex {index} out of range for graph with {vertex_count} vertices"
                )
            },
            Self::InvalidWeight { from, to } => {
                write!(f, "Edge {from}-{to} has a NaN weight")
            },
        }
    }
}

impl std::error::Error for GraphError {}

impl Eq for GraphError {}

impl Hash for GraphError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::VertexOutOfRange {
                index,
                vertex_count,
            } => {
                index.hash(state);
                vertex_count.hash(state);
            },
            Self::InvalidWeight { from, to } => {
                from.hash(state);
                to.hash(state);
            },
        }
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_display() {
        let e = GraphError::VertexOutOfRange {
            index: 9,
            vertex_count: 4,
        };
        assert_eq!(
            e.to_string(),
            "Vertex 9 out of range for graph with 4 vertices"
        );

        let e = GraphError::InvalidWeight { from: 1, to: 2 };
        assert_eq!(e.to_string(), "Edge 1-2 has a NaN weight");
    }

    #[test]
    fn test_error_hash_distinguishes_variants() {
        let mut set = HashSet::new();
        set.insert(GraphError::VertexOutOfRange {
            index: 1,
            vertex_count: 2,
        });
        set.insert(GraphError::InvalidWeight { from: 1, to: 2 });
        set.insert(GraphError::VertexOutOfRange {
            index: 1,
            vertex_count: 2,
        });
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_error_serde_roundtrip() {
        let e = GraphError::VertexOutOfRange {
            index: 3,
            vertex_count: 3,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: GraphError = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
