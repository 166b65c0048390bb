mod csr;
pub mod edmonds_karp;

pub use edmonds_karp::EdmondsKarp;

use crate::assignment::{AssignedEdge, FlowAssignment};
use crate::error::ValidationError;
use crate::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};

/// Result of a maximum flow computation.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MaximumFlow<Flow> {
    pub value: Flow,
    pub assignment: FlowAssignment<Flow>,
    /// Nodes still reachable from the source in the final residual network.
    pub source_side: Vec<String>,
}

impl<Flow> MaximumFlow<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Declared edges leaving the source side of the minimum cut. Their
    /// capacities sum to `value`.
    pub fn minimum_cut(&self) -> Vec<&AssignedEdge<Flow>> {
        let inside = |name: &str| self.source_side.iter().any(|s| s == name);
        self.assignment.iter().filter(|e| inside(&e.from) && !inside(&e.to)).collect()
    }

    pub fn cut_capacity(&self) -> Flow {
        self.minimum_cut().iter().fold(Flow::zero(), |sum, e| sum + e.capacity)
    }
}

/// Maximum flow from `source` to `sink`.
///
/// A source or sink that is not part of the graph yields a zero flow. A flow
/// value too large for `Flow` is reported as [`ValidationError::Overflow`].
pub fn max_flow<Flow>(graph: &Graph<Flow>, source: &str, sink: &str) -> Result<MaximumFlow<Flow>, ValidationError>
where
    Flow: NumAssign + Ord + Copy + Default + CheckedAdd,
{
    if source == sink {
        return Err(ValidationError::SameSourceAndSink(source.to_string()));
    }

    let (s, t) = match (graph.node_index(source), graph.node_index(sink)) {
        (Some(s), Some(t)) => (s, t),
        (s, _) => {
            let source_side = s.map(|_| vec![source.to_string()]).unwrap_or_default();
            return Ok(MaximumFlow { value: Flow::zero(), assignment: FlowAssignment::zero(graph), source_side });
        }
    };

    let mut solver = EdmondsKarp::default();
    let value = solver.solve(s, t, graph).ok_or(ValidationError::Overflow { quantity: "flow value" })?;

    let reachable = solver.csr.reachable_from(s);
    let source_side = (0..graph.num_nodes()).filter(|&u| reachable[u]).map(|u| graph.node_name(u).to_string()).collect();

    Ok(MaximumFlow { value, assignment: FlowAssignment::from_flows(graph, solver.csr.flows()), source_side })
}
