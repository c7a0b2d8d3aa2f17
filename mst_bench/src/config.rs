// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Scenario presets for the performance analysis.

use std::env;

use serde::{Deserialize, Serialize};

/// Scale level for a performance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleLevel {
    /// Two small scenarios, a handful of repeats. Suitable for tests.
    Quick,
    /// 10 to 10,000 vertices with 1.4 edges per vertex.
    Standard,
    /// Standard scenarios with more repeats.
    Full,
}

/// One random graph shape to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub vertices: usize,
    pub edges: usize,
}

impl Scenario {
    #[must_use]
    pub const fn new(vertices: usize, edges: usize) -> Self {
        Self { vertices, edges }
    }
}

/// Configuration for a performance run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub scale: ScaleLevel,
    pub scenarios: Vec<Scenario>,
    /// Timed solves per algorithm and scenario.
    pub repeats: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u32,
    pub seed: u64,
}

impl BenchConfig {
    /// Get the seed, respecting `MST_BENCH_SEED` env var override.
    #[must_use]
    pub fn effective_seed(&self) -> u64 {
        env::var("MST_BENCH_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.seed)
    }

    /// Get the repeat count, respecting `MST_BENCH_REPEATS` env var override.
    #[must_use]
    pub fn effective_repeats(&self) -> usize {
        env::var("MST_BENCH_REPEATS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.repeats)
    }

    /// Get the maximum weight, respecting `MST_BENCH_MAX_WEIGHT` env var override.
    #[must_use]
    pub fn effective_max_weight(&self) -> u32 {
        env::var("MST_BENCH_MAX_WEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.max_weight)
    }

    #[must_use]
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    #[must_use]
    pub const fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }
}

const STANDARD_SCENARIOS: [Scenario; 4] = [
    Scenario::new(10, 14),
    Scenario::new(100, 140),
    Scenario::new(1000, 1400),
    Scenario::new(10_000, 14_000),
];

/// Quick config: 10 and 100 vertices, 5 repeats.
#[must_use]
pub fn quick_config() -> BenchConfig {
    BenchConfig {
        scale: ScaleLevel::Quick,
        scenarios: STANDARD_SCENARIOS[..2].to_vec(),
        repeats: 5,
        max_weight: 100,
        seed: 42,
    }
}

/// Standard config: 10 to 10,000 vertices, 3 repeats.
#[must_use]
pub fn standard_config() -> BenchConfig {
    BenchConfig {
        scale: ScaleLevel::Standard,
        scenarios: STANDARD_SCENARIOS.to_vec(),
        repeats: 3,
        max_weight: 100,
        seed: 42,
    }
}

/// Full config: 10 to 10,000 vertices, 20 repeats.
#[must_use]
pub fn full_config() -> BenchConfig {
    BenchConfig {
        scale: ScaleLevel::Full,
        scenarios: STANDARD_SCENARIOS.to_vec(),
        repeats: 20,
        max_weight: 100,
        seed: 42,
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        standard_config()
    }
}
