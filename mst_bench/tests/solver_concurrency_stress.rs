// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Concurrent solver stress test.
//!
//! Many threads solve one shared graph at once; every result must match the
//! sequential one.

use std::{
    sync::{Arc, Barrier},
    thread,
    time::Instant,
};

use mst_bench::{generate_graph, LatencyHistogram};
use mst_engine::{run_prim_with, Graph, MstAlgorithm, MstResult, PrimConfig, PrimStrategy};

fn solve_concurrently(graph: Graph, thread_count: usize, ops_per_thread: usize) {
    let graph = Arc::new(graph);
    let expected_kruskal = MstAlgorithm::Kruskal.solve(&graph);
    let expected_prim = MstAlgorithm::Prim.solve(&graph);
    let barrier = Arc::new(Barrier::new(thread_count));
    let start = Instant::now();

    let handles: Vec<_> = (0..thread_count)
        .map(|t| {
            let graph = Arc::clone(&graph);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut latencies = LatencyHistogram::new().unwrap();
                let mut results: Vec<MstResult> = Vec::with_capacity(ops_per_thread);
                barrier.wait();
                for _ in 0..ops_per_thread {
                    let op_start = Instant::now();
                    let result = match t % 3 {
                        0 => MstAlgorithm::Kruskal.solve(&graph),
                        1 => MstAlgorithm::Prim.solve(&graph),
                        _ => run_prim_with(
                            &graph,
                            &PrimConfig::new().strategy(PrimStrategy::BinaryHeap),
                        )
                        .unwrap(),
                    };
                    latencies.record(op_start.elapsed()).unwrap();
                    results.push(result);
                }
                (t, results, latencies)
            })
        })
        .collect();

    let mut all = LatencyHistogram::new().unwrap();
    for handle in handles {
        let (t, results, latencies) = handle.join().unwrap();
        let expected = if t % 3 == 0 {
            &expected_kruskal
        } else {
            &expected_prim
        };
        for result in &results {
            assert_eq!(result, expected, "thread {t}");
        }
        all.merge(&latencies).unwrap();
    }

    let snapshot = all.snapshot();
    println!(
        "{} solves on {} threads in {:?}: {snapshot}",
        snapshot.count,
        thread_count,
        start.elapsed()
    );
    assert_eq!(snapshot.count, (thread_count * ops_per_thread) as u64);
}

#[test]
fn concurrent_solves_match_sequential() {
    let graph = generate_graph(300, 420, 100, 42).unwrap();
    solve_concurrently(graph, 6, 5);
}

#[test]
#[ignore]
fn stress_concurrent_solves_32_threads() {
    let graph = generate_graph(5000, 7000, 100, 7).unwrap();
    solve_concurrently(graph, 32, 10);
}
