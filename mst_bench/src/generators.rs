// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Reproducible graph generation.

use mst_engine::Graph;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{BenchError, Result};

/// Generate a random graph with exactly `edges` edges and no self-loops.
///
/// Endpoints are uniform over all vertices, so parallel edges can occur and
/// the graph need not be connected. Weights are whole numbers in
/// `1..=max_weight`. Every vertex touched by an edge is labelled with its index.
///
/// # Errors
///
/// Returns [`BenchError::InvalidScenario`] when edges are requested on fewer
/// than two vertices, or when `max_weight` is zero.
pub fn generate_graph(vertices: usize, edges: usize, max_weight: u32, seed: u64) -> Result<Graph> {
    if edges > 0 && vertices < 2 {
        return Err(BenchError::InvalidScenario {
            vertices,
            edges,
            reason: "edges without self-loops need at least two vertices".into(),
        });
    }
    if max_weight == 0 {
        return Err(BenchError::InvalidScenario {
            vertices,
            edges,
            reason: "max weight must be positive".into(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = Graph::new(vertices);
    while graph.edge_count() < edges {
        let u = rng.random_range(0..vertices);
        let v = rng.random_range(0..vertices);
        if u == v {
            continue;
        }
        let weight = f64::from(rng.random_range(1..=max_weight));
        graph.add_edge(u, v, weight);
        graph.set_vertex_label(u, u.to_string());
        graph.set_vertex_label(v, v.to_string());
    }
    Ok(graph)
}

/// The lettered reference graph: vertices A..G and eleven weighted edges.
#[must_use]
pub fn demo_graph() -> Graph {
    const LABELS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];
    const EDGES: [(usize, usize, f64); 11] = [
        (0, 1, 4.0),  // A-B
        (0, 6, 10.0), // A-G
        (0, 2, 9.0),  // A-C
        (1, 2, 8.0),  // B-C
        (2, 3, 5.0),  // C-D
        (2, 4, 2.0),  // C-E
        (2, 6, 7.0),  // C-G
        (3, 4, 3.0),  // D-E
        (3, 5, 7.0),  // D-F
        (4, 6, 6.0),  // E-G
        (5, 6, 11.0), // F-G
    ];

    let mut graph = Graph::new(LABELS.len());
    for (i, label) in LABELS.iter().enumerate() {
        graph.set_vertex_label(i, *label);
    }
    for (u, v, w) in EDGES {
        graph.add_edge(u, v, w);
    }
    graph
}
