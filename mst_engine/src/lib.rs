// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
// Pedantic lint configuration for mst_engine
#![allow(clippy::missing_errors_doc)] // Error conditions are self-evident from Result types
#![allow(clippy::uninlined_format_args)] // Keep format strings readable

//! Weighted undirected graphs and their minimum spanning trees.
//!
//! A [`Graph`] is built once, then solved any number of times with
//! [`run_kruskal`] or [`run_prim`]. Solvers only read the graph; all of their
//! scratch state is allocated per call, so a shared `&Graph` can be solved
//! from several threads at once.
//!
//! ```
//! use mst_engine::{run_kruskal, run_prim, Graph};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 1.0);
//! graph.add_edge(1, 2, 2.0);
//! graph.add_edge(0, 2, 3.0);
//!
//! assert_eq!(run_kruskal(&graph).total_weight, 3.0);
//! assert_eq!(run_prim(&graph).total_weight, 3.0);
//! ```

pub mod algorithms;
mod config;
mod error;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use algorithms::{
    prim_attachments, run_kruskal, run_prim, run_prim_with, Attachment, DisjointSet,
    MstAlgorithm, MstEdge, MstResult,
};
pub use config::{PrimConfig, PrimStrategy};
pub use error::{GraphError, Result};

/// Index of a vertex in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge weight. Any real number; only relative order matters to the solvers.
pub type Weight = f64;

/// An undirected weighted edge. `(u, v, w)` and `(v, u, w)` are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Weighted undirected graph with a fixed vertex count and an append-only edge list.
///
/// Parallel edges and self-loops are accepted. Edges or labels naming a vertex
/// outside `[0, vertex_count)` are dropped by the permissive setters; the
/// `try_` variants report them instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct Graph {
    vertex_count: usize,
    vertex_labels: Vec<String>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph with `vertex_count` unlabeled vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            vertex_labels: vec![String::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn vertex_labels(&self) -> &[String] {
        &self.vertex_labels
    }

    #[must_use]
    pub fn label(&self, index: VertexId) -> Option<&str> {
        self.vertex_labels.get(index).map(String::as_str)
    }

    /// Label of `index`, or its decimal index when unlabeled or out of range.
    #[must_use]
    pub fn label_or_index(&self, index: VertexId) -> String {
        match self.label(index) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => index.to_string(),
        }
    }

    #[must_use]
    pub const fn contains_vertex(&self, index: VertexId) -> bool {
        index < self.vertex_count
    }

    /// Append the edge `(u, v, weight)`. Does nothing if either endpoint is out of range.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        if let Err(e) = self.check_vertex(u).and_then(|()| self.check_vertex(v)) {
            debug!(from = u, to = v, error = %e, "dropping edge");
            return;
        }
        self.edges.push(Edge::new(u, v, weight));
    }

    /// Append the edge `(u, v, weight)`, reporting why it was refused.
    ///
    /// Unlike [`Graph::add_edge`], NaN weights are refused as well.
    pub fn try_add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight { from: u, to: v });
        }
        self.edges.push(Edge::new(u, v, weight));
        Ok(())
    }

    /// Overwrite the label of `index`. Does nothing if `index` is out of range.
    pub fn set_vertex_label(&mut self, index: VertexId, label: impl Into<String>) {
        if let Err(e) = self.try_set_vertex_label(index, label) {
            debug!(index, error = %e, "dropping vertex label");
        }
    }

    /// Overwrite the label of `index`, reporting an out-of-range index.
    pub fn try_set_vertex_label(&mut self, index: VertexId, label: impl Into<String>) -> Result<()> {
        self.check_vertex(index)?;
        self.vertex_labels[index] = label.into();
        Ok(())
    }

    fn check_vertex(&self, index: VertexId) -> Result<()> {
        if self.contains_vertex(index) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                index,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// Unvalidated serialized form of [`Graph`].
#[derive(Deserialize)]
struct RawGraph {
    vertex_count: usize,
    #[serde(default)]
    vertex_labels: Vec<String>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl TryFrom<RawGraph> for Graph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self> {
        let mut graph = Self::new(raw.vertex_count);
        if raw.vertex_labels.len() > raw.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                index: raw.vertex_count,
                vertex_count: raw.vertex_count,
            });
        }
        for (index, label) in raw.vertex_labels.into_iter().enumerate() {
            graph.try_set_vertex_label(index, label)?;
        }
        for edge in raw.edges {
            graph.check_vertex(edge.from)?;
            graph.check_vertex(edge.to)?;
            graph.edges.push(edge);
        }
        Ok(graph)
    }
}
