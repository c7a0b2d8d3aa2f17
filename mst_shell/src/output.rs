// SPDX-License-Identifier: BSL-1.1 OR Apache-2.0
//! Output formatting for solver results.

#![allow(clippy::format_push_string)]

use mst_bench::{format_duration, Disagreement, ScenarioReport};
use mst_engine::{Graph, MstResult};
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

/// Builder for tables with rounded Unicode borders.
#[derive(Debug, Default)]
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_header(&mut self, headers: Vec<&str>) {
        self.headers = headers.into_iter().map(String::from).collect();
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn build(&self) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let mut data: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        data.push(self.headers.clone());
        data.extend(self.rows.iter().cloned());

        Table::from_iter(data)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()
    }
}

/// One selected edge with its endpoint labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// A solver result with vertex labels resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledResult {
    pub algorithm: String,
    pub edges: Vec<LabeledEdge>,
    pub total_weight: f64,
    pub tree_count: usize,
    pub unreachable: Vec<String>,
}

impl LabeledResult {
    #[must_use]
    pub fn new(graph: &Graph, result: &MstResult) -> Self {
        Self {
            algorithm: result.algorithm.to_string(),
            edges: result
                .edges
                .iter()
                .map(|e| LabeledEdge {
                    from: graph.label_or_index(e.from),
                    to: graph.label_or_index(e.to),
                    weight: e.weight,
                })
                .collect(),
            total_weight: result.total_weight,
            tree_count: result.tree_count,
            unreachable: result
                .unreachable
                .iter()
                .map(|&v| graph.label_or_index(v))
                .collect(),
        }
    }
}

/// Formats a solver result as an edge table followed by the total weight.
#[must_use]
pub fn format_mst(result: &LabeledResult) -> String {
    let mut output = format!("{} minimum spanning tree\n", result.algorithm);

    if result.edges.is_empty() {
        output.push_str("(no edges)\n");
    } else {
        let mut builder = TableBuilder::new();
        builder.add_header(vec!["Edge", "Weight"]);
        for edge in &result.edges {
            builder.add_row(vec![
                format!("{} - {}", edge.from, edge.to),
                edge.weight.to_string(),
            ]);
        }
        output.push_str(&builder.build());
        output.push('\n');
    }

    if !result.unreachable.is_empty() {
        output.push_str(&format!(
            "Unreachable from root: {}\n",
            result.unreachable.join(", ")
        ));
    }
    output.push_str(&format!("Total weight: {}\n", result.total_weight));
    output
}

/// Formats performance reports, one row per scenario and algorithm.
#[must_use]
pub fn format_reports(reports: &[ScenarioReport]) -> String {
    let mut builder = TableBuilder::new();
    builder.add_header(vec![
        "Vertices", "Edges", "Algorithm", "Weight", "Trees", "p50", "max",
    ]);
    for report in reports {
        for alg in [&report.kruskal, &report.prim] {
            builder.add_row(vec![
                report.scenario.vertices.to_string(),
                report.scenario.edges.to_string(),
                alg.algorithm.to_string(),
                alg.total_weight.to_string(),
                alg.tree_count.to_string(),
                format_duration(alg.latency.p50.as_secs_f64()),
                format_duration(alg.latency.max.as_secs_f64()),
            ]);
        }
    }

    let mut output = builder.build();
    let mismatched = reports.iter().filter(|r| !r.weights_agree()).count();
    if mismatched > 0 {
        output.push_str(&format!("\n{mismatched} scenario(s) with differing totals"));
    }
    output
}

/// Formats the outcome of a solver cross-check.
#[must_use]
pub fn format_disagreements(disagreements: &[Disagreement], graphs: usize) -> String {
    if disagreements.is_empty() {
        return format!("Kruskal and Prim agree on all {graphs} graphs");
    }

    let mut builder = TableBuilder::new();
    builder.add_header(vec!["Seed", "Vertices", "Edges", "Kruskal", "Prim"]);
    for d in disagreements {
        builder.add_row(vec![
            d.seed.to_string(),
            d.scenario.vertices.to_string(),
            d.scenario.edges.to_string(),
            d.kruskal_weight.to_string(),
            d.prim_weight.to_string(),
        ]);
    }
    format!(
        "{}\n{} of {graphs} graphs disagree",
        builder.build(),
        disagreements.len()
    )
}
