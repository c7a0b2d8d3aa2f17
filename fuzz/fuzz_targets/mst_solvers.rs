// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
#![no_main]

//! Fuzz target for the spanning tree solvers.
//!
//! Builds arbitrary graphs (including out-of-range endpoints, self-loops and
//! parallel edges) and checks that Kruskal and Prim agree and never emit a
//! cycle or a self-loop.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mst_engine::{
    run_kruskal, run_prim, run_prim_with, DisjointSet, Graph, MstEdge, PrimConfig, PrimStrategy,
};

#[derive(Arbitrary, Debug)]
struct FuzzEdge {
    from: u8,
    to: u8,
    weight: i16,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    vertices: u8,
    edges: Vec<FuzzEdge>,
    root: u8,
}

fn assert_forest(vertex_count: usize, edges: &[MstEdge]) {
    let mut sets = DisjointSet::new(vertex_count);
    for edge in edges {
        assert_ne!(edge.from, edge.to, "self-loop in result");
        let (a, b) = (sets.find(edge.from), sets.find(edge.to));
        assert_ne!(a, b, "cycle in result");
        sets.union(a, b);
    }
}

fuzz_target!(|input: FuzzInput| {
    let n = usize::from(input.vertices % 64);
    let mut graph = Graph::new(n);
    for e in input.edges.iter().take(512) {
        // Endpoints up to 2n exercise the silent out-of-range drop.
        let bound = (2 * n).max(1);
        graph.add_edge(
            usize::from(e.from) % bound,
            usize::from(e.to) % bound,
            f64::from(e.weight),
        );
    }
    assert!(graph.edges().iter().all(|e| e.from < n && e.to < n));

    let kruskal = run_kruskal(&graph);
    let prim = run_prim(&graph);
    assert_forest(n, &kruskal.edges);
    assert_forest(n, &prim.edges);

    // Integer weights sum exactly in f64.
    assert_eq!(kruskal.total_weight, prim.total_weight);
    assert_eq!(kruskal.edge_count(), prim.edge_count());
    assert_eq!(kruskal.tree_count, prim.tree_count);

    let config = PrimConfig::new()
        .root(usize::from(input.root) % n.max(1))
        .strategy(PrimStrategy::BinaryHeap);
    let heap = run_prim_with(&graph, &config).expect("root is in range");
    assert_eq!(heap.total_weight, kruskal.total_weight);
});
