use crate::maximum_flow::graph::{FlowNetwork, FlowNum};
use crate::maximum_flow::MaximumFlowSolver;
use log::trace;
use std::collections::VecDeque;

/// Shortest (fewest edges) augmenting paths found by breadth-first search.
#[derive(Default)]
pub struct EdmondsKarp {
    // arena index of the edge used to reach each node
    prev: Vec<usize>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl<Flow> MaximumFlowSolver<Flow> for EdmondsKarp
where
    Flow: FlowNum,
{
    fn augment(&mut self, network: &mut FlowNetwork<Flow>, from: usize, to: usize, limit: Flow) -> Flow {
        if limit <= Flow::zero() || from == to {
            return Flow::zero();
        }

        self.prev.clear();
        self.prev.resize(network.num_nodes(), usize::MAX);
        self.visited.clear();
        self.visited.resize(network.num_nodes(), false);
        self.que.clear();

        // bfs
        self.visited[from] = true;
        self.que.push_back(from);
        while let Some(u) = self.que.pop_front() {
            if u == to {
                break;
            }

            for &i in network.adjacency[u].iter() {
                let edge = &network.edges[i];
                if self.visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                self.prev[edge.to] = i;
                self.que.push_back(edge.to);
            }
        }

        if !self.visited[to] {
            return Flow::zero();
        }

        // calculate delta
        let mut delta = limit;
        let mut length = 0;
        let mut v = to;
        while v != from {
            let edge = &network.edges[self.prev[v]];
            delta = delta.min(edge.residual_capacity());
            v = edge.from;
            length += 1;
        }

        // update flow
        let mut v = to;
        while v != from {
            let i = self.prev[v];
            network.push(i, delta);
            v = network.edges[i].from;
        }
        trace!("shortest augmenting path {} -> {} of length {} carries {:?}", from, to, length, delta);

        delta
    }
}
