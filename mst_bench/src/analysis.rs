// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Timed runs and cross-checks of the spanning tree solvers.
//!
//! Every measurement goes through [`MstAlgorithm::solve`]; nothing here
//! carries its own copy of an algorithm.

use std::time::Instant;

use mst_engine::{Graph, MstAlgorithm, MstResult};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    generate_graph, BenchConfig, BenchError, LatencyHistogram, LatencySnapshot, Result, Scenario,
};

/// Totals closer than this are considered equal.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Measurements for one algorithm on one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: MstAlgorithm,
    pub total_weight: f64,
    pub edge_count: usize,
    pub tree_count: usize,
    pub latency: LatencySnapshot,
}

/// Measurements for both algorithms on one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub kruskal: AlgorithmReport,
    pub prim: AlgorithmReport,
}

impl ScenarioReport {
    #[must_use]
    pub fn weights_agree(&self) -> bool {
        weights_agree(self.kruskal.total_weight, self.prim.total_weight)
    }
}

/// A graph on which the two solvers reported different totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disagreement {
    pub seed: u64,
    pub scenario: Scenario,
    pub kruskal_weight: f64,
    pub prim_weight: f64,
}

fn weights_agree(a: f64, b: f64) -> bool {
    (a - b).abs() <= WEIGHT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Solve `graph` with `algorithm` `repeats` times, timing each call.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] if `repeats` is zero.
pub fn measure(graph: &Graph, algorithm: MstAlgorithm, repeats: usize) -> Result<AlgorithmReport> {
    if repeats == 0 {
        return Err(BenchError::InvalidConfig("repeats must be positive".into()));
    }

    let mut latencies = LatencyHistogram::new()?;
    let mut last: Option<MstResult> = None;
    for _ in 0..repeats {
        let start = Instant::now();
        let result = algorithm.solve(graph);
        latencies.record(start.elapsed())?;
        last = Some(result);
    }

    let result = last.unwrap_or_else(|| MstResult::empty(algorithm));
    Ok(AlgorithmReport {
        algorithm,
        total_weight: result.total_weight,
        edge_count: result.edge_count(),
        tree_count: result.tree_count,
        latency: latencies.snapshot(),
    })
}

/// Generate each configured scenario once and time both solvers on it.
///
/// # Errors
///
/// Returns an error for an unusable scenario or a zero repeat count.
#[instrument(skip_all, fields(scale = ?config.scale))]
pub fn run_analysis(config: &BenchConfig) -> Result<Vec<ScenarioReport>> {
    let seed = config.effective_seed();
    let repeats = config.effective_repeats();
    let max_weight = config.effective_max_weight();

    let mut reports = Vec::with_capacity(config.scenarios.len());
    for (i, &scenario) in config.scenarios.iter().enumerate() {
        info!(
            vertices = scenario.vertices,
            edges = scenario.edges,
            "generating scenario"
        );
        let graph = generate_graph(
            scenario.vertices,
            scenario.edges,
            max_weight,
            seed.wrapping_add(i as u64),
        )?;

        let report = ScenarioReport {
            scenario,
            kruskal: measure(&graph, MstAlgorithm::Kruskal, repeats)?,
            prim: measure(&graph, MstAlgorithm::Prim, repeats)?,
        };
        if !report.weights_agree() {
            warn!(
                vertices = scenario.vertices,
                kruskal = report.kruskal.total_weight,
                prim = report.prim.total_weight,
                "solver totals differ"
            );
        }
        reports.push(report);
    }
    Ok(reports)
}

/// Solve `trials` random graphs per scenario with both algorithms in parallel
/// and return every graph where the totals differ.
///
/// # Errors
///
/// Returns an error if a scenario cannot be generated.
#[instrument(skip_all, fields(trials = trials))]
pub fn cross_check(config: &BenchConfig, trials: usize) -> Result<Vec<Disagreement>> {
    let base_seed = config.effective_seed();
    let max_weight = config.effective_max_weight();

    let jobs: Vec<(Scenario, u64)> = config
        .scenarios
        .iter()
        .flat_map(|&scenario| {
            (0..trials as u64).map(move |t| (scenario, base_seed.wrapping_add(t)))
        })
        .collect();

    let outcomes: Result<Vec<Option<Disagreement>>> = jobs
        .par_iter()
        .map(|&(scenario, seed)| {
            let graph = generate_graph(scenario.vertices, scenario.edges, max_weight, seed)?;
            let kruskal = MstAlgorithm::Kruskal.solve(&graph).total_weight;
            let prim = MstAlgorithm::Prim.solve(&graph).total_weight;
            Ok((!weights_agree(kruskal, prim)).then_some(Disagreement {
                seed,
                scenario,
                kruskal_weight: kruskal,
                prim_weight: prim,
            }))
        })
        .collect();

    let disagreements: Vec<Disagreement> = outcomes?.into_iter().flatten().collect();
    if disagreements.is_empty() {
        info!(graphs = jobs.len(), "solvers agree on every graph");
    } else {
        warn!(count = disagreements.len(), "solver totals differ");
    }
    Ok(disagreements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{demo_graph, quick_config};

    #[test]
    fn test_measure_demo_graph() {
        let graph = demo_graph();
        let report = measure(&graph, MstAlgorithm::Kruskal, 3).unwrap();
        assert_eq!(report.algorithm, MstAlgorithm::Kruskal);
        assert!((report.total_weight - 30.0).abs() < f64::EPSILON);
        assert_eq!(report.edge_count, 6);
        assert_eq!(report.tree_count, 1);
        assert_eq!(report.latency.count, 3);
    }

    #[test]
    fn test_measure_rejects_zero_repeats() {
        let graph = demo_graph();
        assert!(matches!(
            measure(&graph, MstAlgorithm::Prim, 0),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_analysis_quick() {
        let config = quick_config().with_repeats(2);
        let reports = run_analysis(&config).unwrap();
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert!(report.weights_agree());
            assert_eq!(report.kruskal.edge_count, report.prim.edge_count);
            assert_eq!(report.kruskal.latency.count, 2);
        }
        assert_eq!(reports[1].scenario, Scenario::new(100, 140));
    }

    #[test]
    fn test_run_analysis_reports_invalid_scenario() {
        let config = quick_config().with_scenarios(vec![Scenario::new(1, 4)]);
        assert!(run_analysis(&config).is_err());
    }

    #[test]
    fn test_cross_check_finds_no_disagreement() {
        let config =
            quick_config().with_scenarios(vec![Scenario::new(30, 40), Scenario::new(8, 30)]);
        let disagreements = cross_check(&config, 16).unwrap();
        assert!(disagreements.is_empty(), "{disagreements:?}");
    }

    #[test]
    fn test_weights_agree_tolerance() {
        assert!(weights_agree(25.0, 25.0));
        assert!(weights_agree(1e12, 1e12 + 1e-3));
        assert!(!weights_agree(25.0, 26.0));
    }
}
