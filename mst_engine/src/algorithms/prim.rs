// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Minimum Spanning Tree using Prim's algorithm.
//!
//! The tree grows from a root vertex. Each outside vertex carries a key, the
//! lightest known edge weight joining it to the tree, and the lightest-keyed
//! vertex is pulled in next. The default selection is a linear scan (O(V^2));
//! [`PrimStrategy::BinaryHeap`] picks the same vertices in O(E log V).
//!
//! A vertex with no key when it is selected has no edge into the tree. It is
//! reported as [`Attachment::Unreachable`] and the scan carries on from it, so
//! the total weight is that of a minimum spanning forest.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{MstAlgorithm, MstEdge, MstResult};
use crate::{Graph, GraphError, PrimConfig, PrimStrategy, Result, VertexId, Weight};

/// How a vertex joined the tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Attachment {
    /// The starting vertex.
    Root,
    /// Joined through the edge `parent - vertex` of the given weight.
    Tree { parent: VertexId, weight: Weight },
    /// Selected with no connecting edge to the tree grown so far.
    Unreachable,
}

/// Compute the minimum spanning tree rooted at vertex 0 with a linear scan.
#[must_use]
pub fn run_prim(graph: &Graph) -> MstResult {
    let order = grow(graph, &PrimConfig::default());
    collect(graph, &order)
}

/// Compute the minimum spanning tree with an explicit root and strategy.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] if the graph has vertices and
/// `config.root` is not one of them.
pub fn run_prim_with(graph: &Graph, config: &PrimConfig) -> Result<MstResult> {
    check_root(graph, config)?;
    let order = grow(graph, config);
    Ok(collect(graph, &order))
}

/// Per-vertex outcome of Prim's algorithm, indexed by vertex.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] for a root outside a non-empty graph.
pub fn prim_attachments(graph: &Graph, config: &PrimConfig) -> Result<Vec<Attachment>> {
    check_root(graph, config)?;
    let mut attachments = vec![Attachment::Unreachable; graph.vertex_count()];
    for (vertex, attachment) in grow(graph, config) {
        attachments[vertex] = attachment;
    }
    Ok(attachments)
}

fn check_root(graph: &Graph, config: &PrimConfig) -> Result<()> {
    if graph.vertex_count() > 0 && !graph.contains_vertex(config.root) {
        return Err(GraphError::VertexOutOfRange {
            index: config.root,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

fn collect(graph: &Graph, order: &[(VertexId, Attachment)]) -> MstResult {
    if graph.vertex_count() == 0 {
        return MstResult::empty(MstAlgorithm::Prim);
    }

    let mut edges = Vec::with_capacity(graph.vertex_count() - 1);
    let mut unreachable = Vec::new();
    let mut total_weight = 0.0;

    for &(vertex, attachment) in order {
        match attachment {
            Attachment::Root => {},
            Attachment::Tree { parent, weight } => {
                edges.push(MstEdge::new(parent, vertex, weight));
                total_weight += weight;
            },
            Attachment::Unreachable => unreachable.push(vertex),
        }
    }

    if !unreachable.is_empty() {
        debug!(count = unreachable.len(), "prim left vertices unreachable from root");
    }

    MstResult {
        algorithm: MstAlgorithm::Prim,
        edges,
        total_weight,
        tree_count: 1 + unreachable.len(),
        unreachable,
    }
}

/// Undirected adjacency projection of the edge list, without self-loops.
fn adjacency(graph: &Graph) -> Vec<Vec<(VertexId, Weight)>> {
    let mut adj = vec![Vec::new(); graph.vertex_count()];
    for edge in graph.edges() {
        if edge.from == edge.to {
            continue;
        }
        adj[edge.from].push((edge.to, edge.weight));
        adj[edge.to].push((edge.from, edge.weight));
    }
    adj
}

/// Whether `weight` is strictly lighter than `key`; no key acts as +infinity.
fn improves(weight: Weight, key: Option<Weight>) -> bool {
    match key {
        Some(k) => weight < k,
        None => weight < Weight::INFINITY,
    }
}

fn key_less(a: Option<Weight>, b: Option<Weight>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Scratch state for one run.
struct Frontier {
    key: Vec<Option<Weight>>,
    parent: Vec<Option<VertexId>>,
    in_tree: Vec<bool>,
}

impl Frontier {
    fn new(n: usize, root: VertexId) -> Self {
        let mut key = vec![None; n];
        key[root] = Some(0.0);
        Self {
            key,
            parent: vec![None; n],
            in_tree: vec![false; n],
        }
    }

    /// Lowest-keyed vertex outside the tree, lowest index on ties.
    fn scan_min(&self) -> Option<VertexId> {
        let mut best: Option<VertexId> = None;
        for v in 0..self.key.len() {
            if self.in_tree[v] {
                continue;
            }
            best = match best {
                Some(b) if !key_less(self.key[v], self.key[b]) => Some(b),
                _ => Some(v),
            };
        }
        best
    }

    fn take(&mut self, u: VertexId, root: VertexId) -> Attachment {
        self.in_tree[u] = true;
        match (self.parent[u], self.key[u]) {
            (Some(parent), Some(weight)) => Attachment::Tree { parent, weight },
            _ if u == root => Attachment::Root,
            _ => Attachment::Unreachable,
        }
    }

    /// Relax the keys of `u`'s outside neighbors, calling `on_relax` for each change.
    fn relax(
        &mut self,
        u: VertexId,
        neighbors: &[(VertexId, Weight)],
        mut on_relax: impl FnMut(VertexId, Weight),
    ) {
        for &(v, w) in neighbors {
            if !self.in_tree[v] && improves(w, self.key[v]) {
                self.key[v] = Some(w);
                self.parent[v] = Some(u);
                on_relax(v, w);
            }
        }
    }
}

/// Min-heap entry ordered by key, then by vertex index.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    key: Weight,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Keys are never NaN: `improves` rejects NaN weights.
        self.key
            .partial_cmp(&other.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Selection order of every vertex with how it joined.
#[instrument(skip_all, fields(
    vertices = graph.vertex_count(),
    edges = graph.edge_count(),
    root = config.root,
    strategy = ?config.strategy
))]
fn grow(graph: &Graph, config: &PrimConfig) -> Vec<(VertexId, Attachment)> {
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }
    let adj = adjacency(graph);
    let mut frontier = Frontier::new(n, config.root);
    let mut order = Vec::with_capacity(n);

    match config.strategy {
        PrimStrategy::LinearScan => {
            for _ in 0..n {
                let Some(u) = frontier.scan_min() else {
                    break;
                };
                order.push((u, frontier.take(u, config.root)));
                frontier.relax(u, &adj[u], |_, _| {});
            }
        },
        PrimStrategy::BinaryHeap => {
            let mut heap = BinaryHeap::new();
            heap.push(Reverse(HeapEntry {
                key: 0.0,
                vertex: config.root,
            }));
            // Lowest index that might still be outside the tree.
            let mut cursor = 0;

            for _ in 0..n {
                let mut next = None;
                while let Some(Reverse(entry)) = heap.pop() {
                    let current = frontier.key[entry.vertex];
                    if !frontier.in_tree[entry.vertex] && current == Some(entry.key) {
                        next = Some(entry.vertex);
                        break;
                    }
                }
                // Every keyed outside vertex has a live heap entry, so an
                // empty heap means the remaining vertices are all keyless.
                let u = match next {
                    Some(u) => u,
                    None => {
                        while cursor < n && frontier.in_tree[cursor] {
                            cursor += 1;
                        }
                        if cursor == n {
                            break;
                        }
                        cursor
                    },
                };
                order.push((u, frontier.take(u, config.root)));
                frontier.relax(u, &adj[u], |vertex, key| {
                    heap.push(Reverse(HeapEntry { key, vertex }));
                });
            }
        },
    }

    order
}
