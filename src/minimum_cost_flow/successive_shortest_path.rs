use crate::graph::Graph;
use crate::minimum_cost_flow::csr::CSR;
use crate::minimum_cost_flow::status::Status;
use log::debug;
use num_traits::{CheckedAdd, CheckedSub, NumAssign};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Neg;

/// Successive shortest paths with node potentials.
///
/// Potentials start from a Bellman–Ford pass; every later shortest path is
/// found with Dijkstra on reduced costs, which the potential update keeps
/// non-negative.
#[derive(Default)]
pub struct SuccessiveShortestPath<Flow> {
    pub(crate) csr: CSR<Flow>,
}

enum Search<Flow> {
    Found { t: usize, visited: Vec<bool>, dist: Vec<Option<Flow>>, prev: Vec<Option<usize>> },
    Exhausted,
    Overflow,
}

impl<Flow> SuccessiveShortestPath<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + CheckedAdd + CheckedSub,
{
    /// `excesses[u] > 0` is a supply, `excesses[u] < 0` a requirement. The
    /// excesses must sum to zero.
    pub(crate) fn solve(&mut self, graph: &Graph<Flow>, excesses: Vec<Flow>) -> Status {
        self.csr.build(graph, excesses);
        self.csr.initialize_potentials();

        let mut augmentations = 0usize;
        for s in 0..self.csr.num_nodes {
            while self.csr.excesses[s] > Flow::zero() {
                let (t, visited, dist, prev) = match self.calculate_distance(s) {
                    Search::Found { t, visited, dist, prev } => (t, visited, dist, prev),
                    Search::Exhausted => break,
                    Search::Overflow => return Status::Overflow,
                };

                // update potentials
                let dist_t = dist[t].unwrap_or_else(Flow::zero);
                for u in 0..self.csr.num_nodes {
                    if !visited[u] {
                        continue;
                    }
                    let dist_u = dist[u].unwrap_or_else(Flow::zero);
                    match self.csr.potentials[u].checked_sub(&dist_u).and_then(|p| p.checked_add(&dist_t)) {
                        Some(p) => self.csr.potentials[u] = p,
                        None => return Status::Overflow,
                    }
                }
                // update flow
                self.update_flow(s, t, &prev);
                augmentations += 1;
            }
        }
        debug!("successive shortest path finished after {augmentations} augmentations");

        if self.csr.excesses.iter().all(|&e| e == Flow::zero()) {
            Status::Optimal
        } else {
            Status::Infeasible
        }
    }

    // Dijkstra from s on reduced costs, stopping at the first node with unmet requirement.
    fn calculate_distance(&self, s: usize) -> Search<Flow> {
        let mut prev = vec![None; self.csr.num_nodes];
        let mut bh = BinaryHeap::new();
        let mut dist: Vec<Option<Flow>> = vec![None; self.csr.num_nodes];
        let mut visited = vec![false; self.csr.num_nodes];

        bh.push((Reverse(Flow::zero()), Reverse(s)));
        dist[s] = Some(Flow::zero());

        while let Some((Reverse(d), Reverse(u))) = bh.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;

            if self.csr.excesses[u] < Flow::zero() {
                return Search::Found { t: u, visited, dist, prev };
            }

            for edge_id in self.csr.start[u]..self.csr.start[u + 1] {
                let edge = &self.csr.inside_edge_list[edge_id];
                if edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                let Some(new_dist) = self.csr.reduced_cost(u, edge).and_then(|c| d.checked_add(&c)) else {
                    return Search::Overflow;
                };
                if dist[edge.to].map_or(true, |old| old > new_dist) {
                    dist[edge.to] = Some(new_dist);
                    prev[edge.to] = Some(edge_id);
                    bh.push((Reverse(new_dist), Reverse(edge.to)));
                }
            }
        }

        Search::Exhausted
    }

    fn update_flow(&mut self, s: usize, t: usize, prev: &[Option<usize>]) {
        debug_assert!(self.csr.excesses[s] > Flow::zero() && self.csr.excesses[t] < Flow::zero());

        // calculate delta
        let mut delta = self.csr.excesses[s].min(-self.csr.excesses[t]);
        let mut path = Vec::new();
        {
            let mut v = t;
            while let Some(edge_idx) = prev[v] {
                delta = delta.min(self.csr.inside_edge_list[edge_idx].residual_capacity());
                let rev = self.csr.inside_edge_list[edge_idx].rev;
                v = self.csr.inside_edge_list[rev].to;
                path.push((v, edge_idx));
            }
            debug_assert_eq!(s, v);
            debug_assert!(delta > Flow::zero());
        }

        // update flow, intermediate excesses cancel out
        for (u, edge_idx) in path {
            self.csr.push_flow(u, edge_idx, delta);
        }
    }
}
