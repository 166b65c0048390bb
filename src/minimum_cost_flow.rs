mod csr;
pub mod demand;
pub mod status;
pub mod successive_shortest_path;

pub use successive_shortest_path::SuccessiveShortestPath;

use crate::assignment::FlowAssignment;
use crate::error::{Error, InfeasibleFlowError, ValidationError};
use crate::graph::Graph;
use crate::minimum_cost_flow::demand::Demands;
use crate::minimum_cost_flow::status::Status;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, NumAssign, ToPrimitive};
use std::ops::Neg;

/// Cheapest assignment satisfying a demand vector.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MinimumCostFlow<Flow> {
    pub total_cost: Flow,
    pub assignment: FlowAssignment<Flow>,
}

fn saturating_i64<Flow: ToPrimitive>(value: Flow) -> i64 {
    value.to_i64().unwrap_or(i64::MAX)
}

/// Minimum cost flow meeting every demand in `demands` within capacities.
///
/// Fails with [`InfeasibleFlowError`] when the demands cannot be met, and with
/// [`ValidationError::Overflow`] when a demand, a path cost or the total cost
/// leaves the range of `Flow`.
pub fn min_cost_flow<Flow>(graph: &Graph<Flow>, demands: &Demands<Flow>) -> Result<MinimumCostFlow<Flow>, Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + ToPrimitive + CheckedAdd + CheckedSub + CheckedMul,
{
    let total = demands.total().ok_or(ValidationError::Overflow { quantity: "demand total" })?;
    if total != Flow::zero() {
        return Err(InfeasibleFlowError::Unbalanced { total: saturating_i64(total) }.into());
    }

    // solver works with supplies, the negation of demands
    let mut excesses = vec![Flow::zero(); graph.num_nodes()];
    for (node, demand) in demands.iter() {
        match graph.node_index(node) {
            Some(u) => excesses[u] = excesses[u].checked_sub(&demand).ok_or(ValidationError::Overflow { quantity: "demand" })?,
            None if demand != Flow::zero() => return Err(InfeasibleFlowError::UnknownNode { node: node.to_string() }.into()),
            None => {}
        }
    }

    let mut solver = SuccessiveShortestPath::default();
    match solver.solve(graph, excesses) {
        Status::Optimal => {
            let assignment = FlowAssignment::from_flows(graph, solver.csr.flows());
            let total_cost = assignment.total_cost().ok_or(ValidationError::Overflow { quantity: "total cost" })?;
            Ok(MinimumCostFlow { total_cost, assignment })
        }
        Status::Overflow => Err(ValidationError::Overflow { quantity: "path cost" }.into()),
        Status::Infeasible => {
            let remaining = solver.csr.excesses.iter().filter(|&&e| e > Flow::zero()).try_fold(Flow::zero(), |sum, e| sum.checked_add(e));
            Err(InfeasibleFlowError::Unsatisfiable { remaining: remaining.map_or(i64::MAX, saturating_i64) }.into())
        }
    }
}

/// Cheapest way to send exactly `amount` units from `source` to `sink`.
pub fn min_cost_flow_for_value<Flow>(graph: &Graph<Flow>, source: &str, sink: &str, amount: Flow) -> Result<MinimumCostFlow<Flow>, Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + ToPrimitive + CheckedAdd + CheckedSub + CheckedMul,
{
    min_cost_flow(graph, &Demands::transfer(source, sink, amount))
}
