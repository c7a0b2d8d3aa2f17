// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Errors raised by the performance harness.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("invalid scenario ({vertices} vertices, {edges} edges): {reason}")]
    InvalidScenario {
        vertices: usize,
        edges: usize,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("histogram error: {0}")]
    Histogram(String),
}

impl From<hdrhistogram::CreationError> for BenchError {
    fn from(e: hdrhistogram::CreationError) -> Self {
        Self::Histogram(e.to_string())
    }
}

impl From<hdrhistogram::RecordError> for BenchError {
    fn from(e: hdrhistogram::RecordError) -> Self {
        Self::Histogram(e.to_string())
    }
}

impl From<hdrhistogram::AdditionError> for BenchError {
    fn from(e: hdrhistogram::AdditionError) -> Self {
        Self::Histogram(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = BenchError::InvalidScenario {
            vertices: 1,
            edges: 3,
            reason: "need two vertices".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid scenario (1 vertices, 3 edges): need two vertices"
        );

        let e = BenchError::InvalidConfig("repeats must be positive".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: repeats must be positive"
        );
    }
}
