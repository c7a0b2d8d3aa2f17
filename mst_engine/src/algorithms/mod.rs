// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Graph algorithms module.
//!
//! This module provides minimum spanning tree algorithms:
//! - Disjoint-set forest (union by rank, path compression)
//! - Minimum Spanning Tree (Kruskal's algorithm)
//! - Minimum Spanning Tree (Prim's algorithm, linear scan or binary heap)

mod disjoint_set;
mod kruskal;
mod prim;
mod result;

pub use disjoint_set::DisjointSet;
pub use kruskal::run_kruskal;
pub use prim::{prim_attachments, run_prim, run_prim_with, Attachment};
pub use result::{MstAlgorithm, MstEdge, MstResult};
