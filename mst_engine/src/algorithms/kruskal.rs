// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Minimum Spanning Tree using Kruskal's algorithm.
//!
//! Computes the minimum spanning tree (or forest) of a graph using edge weights.

use tracing::{debug, instrument};

use super::{DisjointSet, MstAlgorithm, MstEdge, MstResult};
use crate::{Graph, Weight};

/// Compute the minimum spanning tree (or forest) using Kruskal's algorithm.
///
/// Edges are taken in ascending weight order, ties in insertion order. Every
/// edge is scanned, so a disconnected graph yields a spanning forest. Edges
/// weighing `+inf` or NaN are never selected.
///
/// Time complexity: O(E log E) for sorting edges.
#[must_use]
#[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn run_kruskal(graph: &Graph) -> MstResult {
    if graph.vertex_count() == 0 {
        return MstResult::empty(MstAlgorithm::Kruskal);
    }

    // +inf and NaN weights mean "no edge", as they do for Prim's keys.
    let mut sorted: Vec<_> = graph
        .edges()
        .iter()
        .filter(|e| e.weight < Weight::INFINITY)
        .collect();
    // `sort_by` is stable, which keeps equal weights in insertion order.
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut edges = Vec::with_capacity(graph.vertex_count() - 1);
    let mut total_weight = 0.0;
    let mut rejected = 0usize;

    for edge in sorted {
        let x = sets.find(edge.from);
        let y = sets.find(edge.to);
        if x == y {
            rejected += 1;
            continue;
        }
        edges.push(MstEdge::new(edge.from, edge.to, edge.weight));
        total_weight += edge.weight;
        sets.union(x, y);
    }

    debug!(
        accepted = edges.len(),
        rejected,
        trees = sets.set_count(),
        "kruskal finished"
    );

    MstResult {
        algorithm: MstAlgorithm::Kruskal,
        edges,
        total_weight,
        tree_count: sets.set_count(),
        unreachable: Vec::new(),
    }
}
