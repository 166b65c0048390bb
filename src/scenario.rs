//! Baseline and closed-corridor evaluations.
use crate::error::Error;
use crate::graph::Graph;
use crate::maximum_flow::max_flow;
use crate::minimum_cost_flow::demand::Demands;
use crate::minimum_cost_flow::min_cost_flow;
use log::{info, warn};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, NumAssign, ToPrimitive};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::ops::Neg;

pub const BASELINE: &str = "baseline";

/// A named set of edges to close before evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub closed: Vec<(String, String)>,
}

impl Scenario {
    pub fn baseline() -> Self {
        Self { name: BASELINE.to_string(), closed: Vec::new() }
    }

    pub fn closing(name: &str, edges: &[(&str, &str)]) -> Self {
        let closed = edges.iter().map(|&(from, to)| (from.to_string(), to.to_string())).collect();
        Self { name: name.to_string(), closed }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositiveEdge<Flow> {
    pub from: String,
    pub to: String,
    pub flow: Flow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<Flow> {
    pub scenario: String,
    pub flow_value: Flow,
    /// Sum of flow times scaled cost over all edges.
    pub total_cost: Flow,
    pub positive_edges: Vec<PositiveEdge<Flow>>,
}

impl<Flow: fmt::Display> fmt::Display for Report<Flow> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.scenario.to_uppercase())?;
        writeln!(f, "Max evacuated flow (people/min): {}", self.flow_value)?;
        writeln!(f, "Min-cost for that flow (scaled): {}", self.total_cost)?;
        for e in &self.positive_edges {
            writeln!(f, "  {} -> {}: {}", e.from, e.to, e.flow)?;
        }
        Ok(())
    }
}

/// Maximum flow from `source` to `sink`, then the cheapest assignment carrying
/// exactly that flow.
pub fn run_scenario<Flow>(graph: &Graph<Flow>, source: &str, sink: &str) -> Result<Report<Flow>, Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + ToPrimitive + CheckedAdd + CheckedSub + CheckedMul,
{
    let maximum = max_flow(graph, source, sink)?;
    let cheapest = min_cost_flow(graph, &Demands::transfer(source, sink, maximum.value))?;

    let positive_edges = cheapest
        .assignment
        .positive()
        .map(|e| PositiveEdge { from: e.from.clone(), to: e.to.clone(), flow: e.flow })
        .collect();

    Ok(Report { scenario: BASELINE.to_string(), flow_value: maximum.value, total_cost: cheapest.total_cost, positive_edges })
}

/// Runs `scenario` on its own copy of `base`.
pub fn evaluate<Flow>(base: &Graph<Flow>, scenario: &Scenario, source: &str, sink: &str) -> Result<Report<Flow>, Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + ToPrimitive + CheckedAdd + CheckedSub + CheckedMul + fmt::Display,
{
    let mut graph = base.clone();
    for (from, to) in &scenario.closed {
        if !graph.remove_edge(from, to) {
            warn!("scenario {}: edge {} -> {} is not in the graph", scenario.name, from, to);
        }
    }

    let mut report = run_scenario(&graph, source, sink)?;
    report.scenario = scenario.name.clone();
    info!("scenario {}: flow {} at cost {}", scenario.name, report.flow_value, report.total_cost);
    Ok(report)
}

/// Evaluates independent scenarios in parallel. Reports come back in the
/// order of `scenarios`; the first failure, in that order, is returned.
pub fn run_scenarios<Flow>(base: &Graph<Flow>, scenarios: &[Scenario], source: &str, sink: &str) -> Result<Vec<Report<Flow>>, Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + ToPrimitive + CheckedAdd + CheckedSub + CheckedMul + fmt::Display + Send + Sync,
{
    let results: Vec<_> = scenarios.par_iter().map(|scenario| evaluate(base, scenario, source, sink)).collect();
    results.into_iter().collect()
}
