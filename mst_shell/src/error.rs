// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
use mst_bench::BenchError;
use mst_engine::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("benchmark error: {0}")]
    Bench(#[from] BenchError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
