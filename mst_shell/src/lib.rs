// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Command-line front end for the spanning tree engine.
//!
//! Parses arguments, runs the requested solvers or performance analysis,
//! and renders the results as tables or JSON.

pub mod cli;
mod error;
pub mod output;

use mst_bench::{
    cross_check, demo_graph, full_config, quick_config, run_analysis, standard_config, BenchConfig,
};
use mst_engine::{run_kruskal, run_prim_with, PrimConfig, PrimStrategy};
use serde::Serialize;
use tracing::info;

pub use cli::{Cli, Command, OutputFormat, Scale, Strategy};
pub use error::{Result, ShellError};
use output::{format_disagreements, format_mst, format_reports, LabeledResult};

impl From<Strategy> for PrimStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Linear => Self::LinearScan,
            Strategy::Heap => Self::BinaryHeap,
        }
    }
}

fn bench_config(scale: Scale) -> BenchConfig {
    match scale {
        Scale::Quick => quick_config(),
        Scale::Standard => standard_config(),
        Scale::Full => full_config(),
    }
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Execute a parsed command line and return the text to print.
///
/// # Errors
///
/// Returns an error if the Prim root is out of range, a benchmark scenario is
/// unusable, or JSON serialization fails.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Demo { root, strategy } => {
            let graph = demo_graph();
            let config = PrimConfig::new().root(*root).strategy((*strategy).into());
            let results = vec![
                LabeledResult::new(&graph, &run_kruskal(&graph)),
                LabeledResult::new(&graph, &run_prim_with(&graph, &config)?),
            ];
            render(cli.output_format, &results, || {
                results
                    .iter()
                    .map(format_mst)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        },
        Command::Bench {
            scale,
            repeats,
            seed,
        } => {
            let mut config = bench_config(*scale);
            if let Some(repeats) = repeats {
                config = config.with_repeats(*repeats);
            }
            if let Some(seed) = seed {
                config = config.with_seed(*seed);
            }
            info!(scenarios = config.scenarios.len(), "running performance analysis");
            let reports = run_analysis(&config)?;
            render(cli.output_format, &reports, || format_reports(&reports))
        },
        Command::Check { trials, scale } => {
            let config = bench_config(*scale);
            let graphs = trials * config.scenarios.len();
            let disagreements = cross_check(&config, *trials)?;
            render(cli.output_format, &disagreements, || {
                format_disagreements(&disagreements, graphs)
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_run_demo_table() {
        let cli = Cli::parse_from(["mst", "demo"]);
        let text = run(&cli).unwrap();
        assert!(text.contains("Kruskal minimum spanning tree"));
        assert!(text.contains("Prim minimum spanning tree"));
        assert_eq!(text.matches("Total weight: 30").count(), 2);
    }

    #[test]
    fn test_run_demo_json() {
        let cli = Cli::parse_from([
            "mst", "demo", "-o", "json", "--strategy", "heap", "--root", "6",
        ]);
        let text = run(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["algorithm"], "Kruskal");
        assert_eq!(value[1]["algorithm"], "Prim");
        assert_eq!(value[1]["total_weight"], 30.0);
        assert_eq!(value[1]["edges"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn test_run_demo_bad_root() {
        let cli = Cli::parse_from(["mst", "demo", "--root", "7"]);
        assert!(matches!(run(&cli), Err(ShellError::Graph(_))));
    }

    #[test]
    fn test_run_bench_quick() {
        let cli = Cli::parse_from(["mst", "bench", "--scale", "quick", "--repeats", "1"]);
        let text = run(&cli).unwrap();
        assert!(text.contains("Kruskal"));
        assert!(text.contains("Prim"));
        assert!(!text.contains("differing totals"));
    }

    #[test]
    fn test_run_bench_zero_repeats() {
        let cli = Cli::parse_from(["mst", "bench", "--scale", "quick", "--repeats", "0"]);
        assert!(matches!(run(&cli), Err(ShellError::Bench(_))));
    }

    #[test]
    fn test_run_check() {
        let cli = Cli::parse_from(["mst", "check", "--trials", "5"]);
        let text = run(&cli).unwrap();
        assert_eq!(text, "Kruskal and Prim agree on all 10 graphs");
    }
}
