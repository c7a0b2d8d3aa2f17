// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
// Command-line argument parsing for the mst shell.

use clap::{Parser, Subcommand, ValueEnum};

/// Minimum spanning trees with Kruskal's and Prim's algorithms.
#[derive(Parser, Debug)]
#[command(name = "mst")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true
    )]
    pub output_format: OutputFormat,

    /// Quiet mode: only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Solve the lettered A..G reference graph with both algorithms
    Demo {
        /// Vertex Prim's algorithm grows from
        #[arg(long, default_value_t = 0)]
        root: usize,

        /// Vertex selection policy for Prim's algorithm
        #[arg(long, value_enum, default_value_t = Strategy::Linear)]
        strategy: Strategy,
    },
    /// Time both algorithms on random graphs of increasing size
    Bench {
        /// Scenario preset
        #[arg(long, value_enum, default_value_t = Scale::Standard)]
        scale: Scale,

        /// Timed solves per algorithm and scenario
        #[arg(long, env = "MST_BENCH_REPEATS")]
        repeats: Option<usize>,

        /// Seed for graph generation
        #[arg(long, env = "MST_BENCH_SEED")]
        seed: Option<u64>,
    },
    /// Check that both algorithms agree on many random graphs
    Check {
        /// Random graphs per scenario
        #[arg(long, default_value_t = 100)]
        trials: usize,

        /// Scenario preset
        #[arg(long, value_enum, default_value_t = Scale::Quick)]
        scale: Scale,
    },
}

/// Output format for results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Prim vertex selection policy.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Linear scan, O(V^2)
    #[default]
    Linear,
    /// Binary heap, O(E log V)
    Heap,
}

/// Benchmark scenario preset.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Scale {
    Quick,
    #[default]
    Standard,
    Full,
}
