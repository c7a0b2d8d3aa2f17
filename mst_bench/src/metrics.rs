// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Latency metrics for solver runs.

use std::time::Duration;

use hdrhistogram::Histogram;
use serde::Serialize;

use crate::Result;

/// Latency histogram with p50/p99 percentiles, recorded in nanoseconds.
pub struct LatencyHistogram {
    histogram: Histogram<u64>,
}

impl LatencyHistogram {
    /// # Errors
    ///
    /// Returns [`crate::BenchError::Histogram`] if the histogram cannot be allocated.
    pub fn new() -> Result<Self> {
        Ok(Self {
            histogram: Histogram::new(3)?,
        })
    }

    /// Record a latency measurement, growing the tracked range as needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BenchError::Histogram`] if the range cannot grow to fit.
    pub fn record(&mut self, duration: Duration) -> Result<()> {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.histogram.record(nanos)?;
        Ok(())
    }

    /// Get a snapshot of the current statistics.
    #[must_use]
    pub fn snapshot(&self) -> LatencySnapshot {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mean = self.histogram.mean() as u64;
        LatencySnapshot {
            count: self.histogram.len(),
            min: Duration::from_nanos(self.histogram.min()),
            p50: Duration::from_nanos(self.histogram.value_at_quantile(0.5)),
            p99: Duration::from_nanos(self.histogram.value_at_quantile(0.99)),
            max: Duration::from_nanos(self.histogram.max()),
            mean: Duration::from_nanos(mean),
        }
    }

    /// Merge another histogram into this one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BenchError::Histogram`] if this histogram cannot grow
    /// to cover `other`'s range.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        self.histogram.add(&other.histogram)?;
        Ok(())
    }
}

/// Snapshot of latency statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatencySnapshot {
    pub count: u64,
    pub min: Duration,
    pub p50: Duration,
    pub p99: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl std::fmt::Display for LatencySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "n={} min={:?} p50={:?} p99={:?} max={:?}",
            self.count, self.min, self.p50, self.p99, self.max
        )
    }
}
