mod common;

use common::{assert_balance, assert_within_capacity, building, graph_from};
use evacuation_flow::{max_flow, Graph};
use rstest::rstest;

fn source_sink_balance(value: i64) -> impl Fn(&str) -> i64 {
    move |node| match node {
        "N" | "s" => -value,
        "S" | "t" => value,
        _ => 0,
    }
}

#[rstest]
#[case::baseline(&[], 80)]
#[case::a_b_closed(&[("A", "B")], 60)]
#[case::a_c_closed(&[("A", "C")], 60)]
#[case::stairs_s1_closed(&[("S1", "D")], 40)]
#[case::both_crosslinks_closed(&[("A", "B"), ("C", "B")], 40)]
#[case::exit_closed(&[("D", "S")], 0)]
#[case::already_absent(&[("B", "A")], 80)]
fn reference_building(#[case] closed: &[(&str, &str)], #[case] expected: i64) {
    let graph = building().without_edges(closed);
    let result = max_flow(&graph, "N", "S").unwrap();

    assert_eq!(result.value, expected);
    assert_eq!(result.assignment.outflow("N"), expected);
    assert_eq!(result.assignment.inflow("S"), expected);
    assert_within_capacity(&result.assignment);
    assert_balance(&graph, &result.assignment, source_sink_balance(expected));
    assert_eq!(result.cut_capacity(), expected);
}

#[test]
fn textbook_network() {
    let graph = graph_from(&[
        ("s", "v1", 16, 0),
        ("s", "v2", 13, 0),
        ("v1", "v2", 10, 0),
        ("v2", "v1", 4, 0),
        ("v1", "v3", 12, 0),
        ("v3", "v2", 9, 0),
        ("v2", "v4", 14, 0),
        ("v4", "v3", 7, 0),
        ("v3", "t", 20, 0),
        ("v4", "t", 4, 0),
    ]);
    let result = max_flow(&graph, "s", "t").unwrap();

    assert_eq!(result.value, 23);
    assert_within_capacity(&result.assignment);
    assert_balance(&graph, &result.assignment, source_sink_balance(23));
    assert_eq!(result.cut_capacity(), 23);
}

#[test]
fn wing_exits_form_the_minimum_cut() {
    let result = max_flow(&building(), "N", "S").unwrap();
    let cut: Vec<_> = result.minimum_cut().iter().map(|e| (e.from.as_str(), e.to.as_str())).collect();

    // both wing corridors saturate before the stairwells are reached
    assert_eq!(result.source_side, vec!["N", "A", "B", "C"]);
    assert_eq!(cut, vec![("B", "S1"), ("C", "S2")]);
}

#[test]
fn disconnected_sink_gets_nothing() {
    let graph = graph_from(&[("s", "a", 5, 1), ("b", "t", 5, 1)]);
    let result = max_flow(&graph, "s", "t").unwrap();

    assert_eq!(result.value, 0);
    assert!(result.assignment.iter().all(|e| e.flow == 0));
    assert_eq!(result.source_side, vec!["s".to_string(), "a".to_string()]);
}

#[test]
fn zero_capacity_edges_never_carry_flow() {
    let graph = graph_from(&[("s", "a", 0, 1), ("s", "b", 3, 1), ("a", "t", 9, 1), ("b", "t", 9, 1)]);
    let result = max_flow(&graph, "s", "t").unwrap();

    assert_eq!(result.value, 3);
    assert_eq!(result.assignment.flow("s", "a"), Some(0));
    assert_eq!(result.assignment.flow("a", "t"), Some(0));
}

#[test]
fn missing_source_is_a_zero_flow() {
    let result = max_flow(&building(), "X", "S").unwrap();
    assert_eq!(result.value, 0);
    assert!(result.source_side.is_empty());
    assert_eq!(result.assignment.len(), 12);
}

#[test]
fn removing_any_edge_never_increases_flow() {
    let base = building();
    let baseline = max_flow(&base, "N", "S").unwrap().value;

    for edge in base.edges() {
        let reduced = base.without_edges(&[(edge.from, edge.to)]);
        let value = max_flow(&reduced, "N", "S").unwrap().value;
        assert!(value <= baseline, "closing {} -> {} raised the flow to {value}", edge.from, edge.to);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let graph = building();
    let first = max_flow(&graph, "N", "S").unwrap();
    for _ in 0..5 {
        assert_eq!(max_flow(&graph, "N", "S").unwrap(), first);
    }
}

#[test]
fn self_loops_are_ignored() {
    let mut graph: Graph<i64> = graph_from(&[("s", "t", 2, 1)]);
    graph.add_edge("s", "s", 10, 0).unwrap();
    let result = max_flow(&graph, "s", "t").unwrap();
    assert_eq!(result.value, 2);
    assert_eq!(result.assignment.flow("s", "s"), Some(0));
}
