use crate::graph::Graph;
use num_traits::{CheckedAdd, CheckedSub, NumAssign};
use std::ops::Neg;

impl<Flow> InsideEdge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual network with costs, node excesses and node potentials.
#[derive(Default)]
pub struct CSR<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub edge_index_to_inside_edge_index: Vec<usize>,

    pub excesses: Vec<Flow>,
    pub potentials: Vec<Flow>,

    pub start: Vec<usize>,
    pub inside_edge_list: Vec<InsideEdge<Flow>>,
}

#[derive(Default, Debug)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub cost: Flow,
    pub rev: usize,
}

impl<Flow> CSR<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + CheckedAdd + CheckedSub,
{
    /// `excesses[u]` is the supply at `u` (positive) or its unmet requirement (negative).
    pub fn build(&mut self, graph: &Graph<Flow>, excesses: Vec<Flow>) {
        debug_assert_eq!(excesses.len(), graph.num_nodes());

        self.num_nodes = graph.num_nodes();
        self.num_edges = graph.num_edges();
        self.excesses = excesses;

        // initialize
        self.edge_index_to_inside_edge_index = vec![usize::MAX; self.num_edges];
        self.start = vec![0; self.num_nodes + 1];
        self.inside_edge_list = (0..2 * self.num_edges)
            .map(|_| InsideEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), cost: Flow::zero(), rev: 0 })
            .collect();
        self.potentials = vec![Flow::zero(); self.num_nodes];

        let mut degree = vec![0; self.num_nodes];
        for edge in graph.edges.iter() {
            degree[edge.to] += 1;
            degree[edge.from] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] += self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; self.num_nodes];
        for (edge_index, edge) in graph.edges.iter().enumerate() {
            let (u, v) = (edge.from, edge.to);
            let inside_edge_index_u = self.start[u] + counter[u];
            counter[u] += 1;
            let inside_edge_index_v = self.start[v] + counter[v];
            self.edge_index_to_inside_edge_index[edge_index] = inside_edge_index_u;
            counter[v] += 1;

            debug_assert_ne!(inside_edge_index_u, inside_edge_index_v);
            debug_assert!(edge.cost >= Flow::zero() && edge.upper >= Flow::zero());

            // u -> v
            self.inside_edge_list[inside_edge_index_u] = InsideEdge { to: v, flow: Flow::zero(), upper: edge.upper, cost: edge.cost, rev: inside_edge_index_v };
            // v -> u
            self.inside_edge_list[inside_edge_index_v] = InsideEdge { to: u, flow: edge.upper, upper: edge.upper, cost: -edge.cost, rev: inside_edge_index_u };
        }
    }

    /// Flow on each declared edge, in graph edge order.
    pub fn flows(&self) -> Vec<Flow> {
        self.edge_index_to_inside_edge_index.iter().map(|&i| self.inside_edge_list[i].flow).collect()
    }

    #[inline]
    pub fn push_flow(&mut self, u: usize, edge_id: usize, flow: Flow) {
        let rev = self.inside_edge_list[edge_id].rev;
        let to = self.inside_edge_list[edge_id].to;
        self.inside_edge_list[edge_id].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
        self.excesses[u] -= flow;
        self.excesses[to] += flow;
    }

    // O(nm)
    // Bellman-Ford from a virtual root joined to every node with cost 0.
    // Afterwards every residual arc has a non-negative reduced cost.
    pub fn initialize_potentials(&mut self) {
        let mut dist = vec![Flow::zero(); self.num_nodes];
        for _ in 0..self.num_nodes {
            let mut updated = false;
            for u in 0..self.num_nodes {
                for edge in self.inside_edge_list[self.start[u]..self.start[u + 1]].iter() {
                    if edge.residual_capacity() == Flow::zero() {
                        continue;
                    }
                    match dist[u].checked_add(&edge.cost) {
                        Some(d) if d < dist[edge.to] => {
                            dist[edge.to] = d;
                            updated = true;
                        }
                        _ => {}
                    }
                }
            }
            if !updated {
                break;
            }
        }

        // reduced_cost uses cost - p[u] + p[v]
        self.potentials = dist.into_iter().map(|d| -d).collect();
    }

    // None if the value leaves the range of Flow
    #[inline]
    pub fn reduced_cost(&self, u: usize, e: &InsideEdge<Flow>) -> Option<Flow> {
        e.cost.checked_sub(&self.potentials[u])?.checked_add(&self.potentials[e.to])
    }
}
