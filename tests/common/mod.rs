#![allow(dead_code)]

use evacuation_flow::building::{build_graph, default_edges};
use evacuation_flow::{EvacuationConfig, FlowAssignment, Graph};

/// Reference building with default cost parameters.
pub fn building() -> Graph<i64> {
    build_graph(&default_edges(), &EvacuationConfig::default()).unwrap()
}

pub fn graph_from(edges: &[(&str, &str, i64, i64)]) -> Graph<i64> {
    let mut graph = Graph::new();
    for &(from, to, capacity, cost) in edges {
        graph.add_edge(from, to, capacity, cost).unwrap();
    }
    graph
}

pub fn assert_within_capacity(assignment: &FlowAssignment<i64>) {
    for e in assignment {
        assert!(0 <= e.flow && e.flow <= e.capacity, "{} -> {} carries {} of {}", e.from, e.to, e.flow, e.capacity);
    }
}

/// inflow - outflow at every node, checked against `expected(node)`.
pub fn assert_balance(graph: &Graph<i64>, assignment: &FlowAssignment<i64>, expected: impl Fn(&str) -> i64) {
    for node in graph.nodes() {
        let balance = assignment.inflow(node) - assignment.outflow(node);
        assert_eq!(balance, expected(node), "balance at {node}");
    }
}

pub fn positive(assignment: &FlowAssignment<i64>) -> Vec<(String, String, i64)> {
    assignment.positive().map(|e| (e.from.clone(), e.to.clone(), e.flow)).collect()
}
