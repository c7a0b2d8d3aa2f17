// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Spanning tree results and solver selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Graph, VertexId, Weight};

/// Which minimum spanning tree algorithm produced (or should produce) a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MstAlgorithm {
    /// Sort edges, accept those joining distinct components.
    Kruskal,
    /// Grow a tree from a root by key relaxation, starting a new tree from
    /// the next unreached vertex when the current one cannot grow.
    Prim,
}

impl MstAlgorithm {
    pub const ALL: [Self; 2] = [Self::Kruskal, Self::Prim];

    /// Run this algorithm on `graph` with its default settings.
    #[must_use]
    pub fn solve(self, graph: &Graph) -> MstResult {
        match self {
            Self::Kruskal => super::run_kruskal(graph),
            Self::Prim => super::run_prim(graph),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An edge in the MST result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MstEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl MstEdge {
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Whether this edge joins `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Result of MST computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    /// Algorithm that produced this result.
    pub algorithm: MstAlgorithm,
    /// Edges in selection order.
    pub edges: Vec<MstEdge>,
    /// Sum of the selected edge weights.
    pub total_weight: Weight,
    /// Number of trees in the forest (1 for connected graphs).
    pub tree_count: usize,
    /// Vertices Prim reached without any connecting edge (always empty for Kruskal).
    pub unreachable: Vec<VertexId>,
}

impl MstResult {
    #[must_use]
    pub const fn empty(algorithm: MstAlgorithm) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            total_weight: 0.0,
            tree_count: 0,
            unreachable: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.tree_count == 1 && self.unreachable.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = MstResult::empty(MstAlgorithm::Kruskal);
        assert_eq!(result.edge_count(), 0);
        assert_eq!(result.tree_count, 0);
        assert!(!result.is_connected());
    }

    #[test]
    fn test_edge_connects_either_orientation() {
        let edge = MstEdge::new(2, 5, 1.5);
        assert!(edge.connects(2, 5));
        assert!(edge.connects(5, 2));
        assert!(!edge.connects(2, 4));
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(MstAlgorithm::Kruskal.to_string(), "Kruskal");
        assert_eq!(MstAlgorithm::Prim.to_string(), "Prim");
    }

    #[test]
    fn test_solve_dispatches() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 3.0);
        for algorithm in MstAlgorithm::ALL {
            let result = algorithm.solve(&graph);
            assert_eq!(result.algorithm, algorithm);
            assert_eq!(result.edges, vec![MstEdge::new(0, 1, 3.0)]);
        }
    }
}
