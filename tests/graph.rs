mod common;

use common::{building, graph_from};
use evacuation_flow::{max_flow, EdgeRef, Graph, ValidationError};
use rstest::rstest;

#[rstest]
#[case::negative_capacity("a", "b", -1, 3, ValidationError::NegativeCapacity { from: "a".into(), to: "b".into() })]
#[case::negative_cost("a", "b", 4, -2, ValidationError::NegativeCost { from: "a".into(), to: "b".into() })]
#[case::duplicate("x", "y", 1, 1, ValidationError::DuplicateEdge { from: "x".into(), to: "y".into() })]
fn add_edge_rejects_malformed_edges(#[case] from: &str, #[case] to: &str, #[case] capacity: i64, #[case] cost: i64, #[case] expected: ValidationError) {
    let mut graph = graph_from(&[("x", "y", 5, 5)]);
    assert_eq!(graph.add_edge(from, to, capacity, cost), Err(expected));
    assert_eq!(graph.num_edges(), 1);
}

#[test]
fn reverse_edge_is_a_distinct_edge() {
    let graph = graph_from(&[("B", "C", 20, 67), ("C", "B", 20, 67)]);
    assert_eq!(graph.num_edges(), 2);
    assert!(graph.has_edge("B", "C") && graph.has_edge("C", "B"));
}

#[test]
fn zero_capacity_and_cost_are_legal() {
    let graph = graph_from(&[("a", "b", 0, 0)]);
    assert_eq!(graph.edge("a", "b"), Some(EdgeRef { from: "a", to: "b", capacity: 0, cost: 0 }));
}

#[test]
fn removing_a_missing_edge_is_a_no_op() {
    let mut graph = building();
    assert!(graph.remove_edge("S1", "D"));
    let after_first = graph.clone();

    assert!(!graph.remove_edge("S1", "D"));
    assert_eq!(graph, after_first);
    assert!(!graph.remove_edge("nowhere", "D"));
    assert_eq!(graph, after_first);
}

#[test]
fn removal_keeps_remaining_edges_in_insertion_order() {
    let mut graph = graph_from(&[("a", "b", 1, 0), ("b", "c", 1, 0), ("c", "d", 1, 0)]);
    graph.remove_edge("b", "c");
    let edges: Vec<_> = graph.edges().map(|e| (e.from, e.to)).collect();
    assert_eq!(edges, vec![("a", "b"), ("c", "d")]);
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
}

#[test]
fn clones_are_independent() {
    let original = building();
    let before = max_flow(&original, "N", "S").unwrap();

    let mut copy = original.clone();
    copy.remove_edge("A", "B");
    copy.add_edge("A", "S", 5, 1).unwrap();

    assert!(original.has_edge("A", "B"));
    assert!(!original.has_edge("A", "S"));
    assert_eq!(original.num_edges(), 12);
    assert!(before.assignment.flow("A", "B").is_some());
    assert_eq!(before.assignment.len(), 12);
    assert_eq!(max_flow(&original, "N", "S").unwrap(), before);
}

#[test]
fn without_edges_leaves_the_base_untouched() {
    let base = building();
    let closed = base.without_edges(&[("A", "B"), ("S1", "S2"), ("A", "B")]);
    assert_eq!(closed.num_edges(), 10);
    assert_eq!(base.num_edges(), 12);
}

#[test]
fn empty_graph_has_nothing_to_iterate() {
    let graph: Graph<i64> = Graph::new();
    assert_eq!(graph.nodes().count(), 0);
    assert_eq!(graph.edges().count(), 0);
}
