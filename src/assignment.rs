use crate::graph::Graph;
use num_traits::{CheckedAdd, CheckedMul, NumAssign};
use serde::Serialize;

#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct AssignedEdge<Flow> {
    pub from: String,
    pub to: String,
    pub capacity: Flow,
    pub cost: Flow,
    pub flow: Flow,
}

/// Per-edge flow produced by one solver run.
///
/// Entries follow the edge order of the graph the solver ran on and carry
/// their own copies of node names, so the assignment stays valid when that
/// graph is later cloned and modified.
#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct FlowAssignment<Flow> {
    edges: Vec<AssignedEdge<Flow>>,
}

impl<Flow> FlowAssignment<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// `flows[i]` is the flow on the `i`-th edge of `graph`.
    pub(crate) fn from_flows(graph: &Graph<Flow>, flows: impl IntoIterator<Item = Flow>) -> Self {
        let edges = graph
            .edges()
            .zip(flows)
            .map(|(e, flow)| AssignedEdge { from: e.from.to_string(), to: e.to.to_string(), capacity: e.capacity, cost: e.cost, flow })
            .collect();
        Self { edges }
    }

    pub(crate) fn zero(graph: &Graph<Flow>) -> Self {
        Self::from_flows(graph, std::iter::repeat(Flow::zero()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignedEdge<Flow>> {
        self.edges.iter()
    }

    pub fn flow(&self, from: &str, to: &str) -> Option<Flow> {
        self.edges.iter().find(|e| e.from == from && e.to == to).map(|e| e.flow)
    }

    /// Edges carrying a strictly positive flow, in edge order.
    pub fn positive(&self) -> impl Iterator<Item = &AssignedEdge<Flow>> + '_ {
        self.edges.iter().filter(|e| e.flow > Flow::zero())
    }

    pub fn outflow(&self, node: &str) -> Flow {
        self.edges.iter().filter(|e| e.from == node).fold(Flow::zero(), |sum, e| sum + e.flow)
    }

    pub fn inflow(&self, node: &str) -> Flow {
        self.edges.iter().filter(|e| e.to == node).fold(Flow::zero(), |sum, e| sum + e.flow)
    }
}

impl<Flow> FlowAssignment<Flow>
where
    Flow: NumAssign + Ord + Copy + CheckedAdd + CheckedMul,
{
    /// Sum of `flow * cost`, or `None` if it does not fit in `Flow`.
    pub fn total_cost(&self) -> Option<Flow> {
        self.edges.iter().try_fold(Flow::zero(), |cost, e| cost.checked_add(&e.cost.checked_mul(&e.flow)?))
    }
}

impl<'a, Flow> IntoIterator for &'a FlowAssignment<Flow> {
    type Item = &'a AssignedEdge<Flow>;
    type IntoIter = std::slice::Iter<'a, AssignedEdge<Flow>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
