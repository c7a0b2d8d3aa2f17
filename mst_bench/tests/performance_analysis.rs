// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! End-to-end runs of the performance analysis.

use mst_bench::{cross_check, demo_graph, quick_config, run_analysis, Scenario};
use mst_engine::{run_kruskal, run_prim};

#[test]
fn demo_graph_totals_match() {
    let graph = demo_graph();
    let kruskal = run_kruskal(&graph);
    let prim = run_prim(&graph);
    assert!((kruskal.total_weight - 30.0).abs() < f64::EPSILON);
    assert!((prim.total_weight - 30.0).abs() < f64::EPSILON);
}

#[test]
fn analysis_reports_serialize_to_json() {
    let config = quick_config()
        .with_repeats(1)
        .with_scenarios(vec![Scenario::new(10, 14)]);
    let reports = run_analysis(&config).unwrap();
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["scenario"]["vertices"], 10);
    assert_eq!(json[0]["kruskal"]["algorithm"], "Kruskal");
    assert_eq!(json[0]["prim"]["algorithm"], "Prim");
}

#[test]
fn analysis_is_reproducible_for_a_seed() {
    let config = quick_config().with_repeats(1).with_seed(9);
    let first = run_analysis(&config).unwrap();
    let second = run_analysis(&config).unwrap();
    for (a, b) in first.iter().zip(&second) {
        assert!((a.kruskal.total_weight - b.kruskal.total_weight).abs() < f64::EPSILON);
        assert_eq!(a.prim.edge_count, b.prim.edge_count);
    }
}

#[test]
fn sparse_scenarios_produce_forests() {
    // 1.4 edges per vertex on 1000 vertices almost never connects the graph.
    let config = quick_config()
        .with_repeats(1)
        .with_scenarios(vec![Scenario::new(1000, 1400)]);
    let report = &run_analysis(&config).unwrap()[0];
    assert!(report.weights_agree());
    assert_eq!(report.kruskal.tree_count, report.prim.tree_count);
    assert_eq!(report.kruskal.edge_count + report.kruskal.tree_count, 1000);
}

#[test]
fn cross_check_many_small_graphs() {
    let config = quick_config().with_scenarios(vec![
        Scenario::new(5, 4),
        Scenario::new(12, 30),
        Scenario::new(60, 80),
    ]);
    assert!(cross_check(&config, 50).unwrap().is_empty());
}
