// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Performance analysis for the `mst_engine` solvers.
//!
//! Provides reproducible graph generators, scenario presets, latency
//! histograms, and timed runs that call the canonical solvers.

pub mod analysis;
pub mod config;
mod error;
pub mod generators;
pub mod metrics;

pub use analysis::{
    cross_check, measure, run_analysis, AlgorithmReport, Disagreement, ScenarioReport,
};
pub use config::{full_config, quick_config, standard_config, BenchConfig, ScaleLevel, Scenario};
pub use error::{BenchError, Result};
pub use generators::{demo_graph, generate_graph};
pub use metrics::{LatencyHistogram, LatencySnapshot};

/// Format a duration in seconds as a human-readable string.
#[must_use]
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else if secs >= 1e-3 {
        format!("{:.2}ms", secs * 1e3)
    } else {
        format!("{:.1}µs", secs * 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(120.0), "2.0m");
        assert_eq!(format_duration(1.5), "1.50s");
        assert_eq!(format_duration(0.0125), "12.50ms");
        assert_eq!(format_duration(0.000_004_2), "4.2µs");
    }
}
