use crate::maximum_flow::csr::CSR;
use crate::graph::Graph;
use log::debug;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;

/// Shortest augmenting paths (by hop count), found with breadth-first search.
///
/// Arcs are scanned in edge insertion order, so among equally short paths the
/// one using earlier edges is augmented first.
#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    pub(crate) csr: CSR<Flow>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Ord + Copy + CheckedAdd,
{
    /// Saturates the residual network between `source` and `sink` and returns
    /// the flow value, or `None` if the value does not fit in `Flow`.
    pub(crate) fn solve(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Option<Flow> {
        self.csr.build(graph);
        let mut prev = vec![(usize::MAX, usize::MAX); self.csr.num_nodes];
        let mut visited = vec![false; self.csr.num_nodes];
        let mut flow = Flow::zero();
        let mut augmentations = 0usize;

        loop {
            prev.fill((usize::MAX, usize::MAX));
            visited.fill(false);

            // bfs
            let mut queue = VecDeque::from([source]);
            visited[source] = true;
            while let Some(u) = queue.pop_front() {
                if u == sink {
                    break;
                }

                for edge_id in self.csr.start[u]..self.csr.start[u + 1] {
                    let edge = &self.csr.inside_edge_list[edge_id];
                    if visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                        continue;
                    }

                    visited[edge.to] = true;
                    queue.push_back(edge.to);
                    prev[edge.to] = (u, edge_id);
                }
            }

            if !visited[sink] {
                break;
            }

            // calculate delta
            let mut delta = self.csr.inside_edge_list[prev[sink].1].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, edge_id) = prev[v];
                delta = delta.min(self.csr.inside_edge_list[edge_id].residual_capacity());
                v = u;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let (u, edge_id) = prev[v];
                self.csr.push_flow(edge_id, delta);
                v = u;
            }

            flow = flow.checked_add(&delta)?;
            augmentations += 1;
        }

        debug!("edmonds-karp finished after {augmentations} augmenting paths");
        Some(flow)
    }
}
