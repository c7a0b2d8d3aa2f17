// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Configuration for the spanning tree solvers.

use serde::{Deserialize, Serialize};

use crate::VertexId;

/// Vertex-selection policy for Prim's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimStrategy {
    /// O(V) scan over all vertices per step, O(V^2) overall.
    #[default]
    LinearScan,
    /// Lazy-deletion binary heap, O(E log V) overall.
    BinaryHeap,
}

/// Configuration for Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimConfig {
    /// Vertex the tree is grown from.
    pub root: VertexId,
    /// How the next vertex is selected.
    pub strategy: PrimStrategy,
}

impl Default for PrimConfig {
    fn default() -> Self {
        Self {
            root: 0,
            strategy: PrimStrategy::LinearScan,
        }
    }
}

impl PrimConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn root(mut self, root: VertexId) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub const fn strategy(mut self, strategy: PrimStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
