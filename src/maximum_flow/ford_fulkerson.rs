use crate::maximum_flow::graph::{FlowNetwork, FlowNum};
use crate::maximum_flow::MaximumFlowSolver;
use log::trace;

struct Frame {
    node: usize,
    // position in the adjacency list of `node` to try next
    next: usize,
}

/// Depth-first augmenting paths. The search keeps its own stack so that path length is bounded
/// by the heap instead of the call stack.
#[derive(Default)]
pub struct FordFulkerson {
    visited: Vec<bool>,
    stack: Vec<Frame>,
    path: Vec<usize>,
}

impl<Flow> MaximumFlowSolver<Flow> for FordFulkerson
where
    Flow: FlowNum,
{
    fn augment(&mut self, network: &mut FlowNetwork<Flow>, from: usize, to: usize, limit: Flow) -> Flow {
        if limit <= Flow::zero() || from == to {
            return Flow::zero();
        }

        self.visited.clear();
        self.visited.resize(network.num_nodes(), false);
        self.stack.clear();
        self.path.clear();

        self.visited[from] = true;
        self.stack.push(Frame { node: from, next: 0 });

        // path.len() == stack.len() - 1 holds after every step
        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;
            if u == to {
                break;
            }

            match network.adjacency[u].get(frame.next) {
                Some(&i) => {
                    frame.next += 1;
                    let edge = &network.edges[i];
                    if !self.visited[edge.to] && edge.residual_capacity() > Flow::zero() {
                        self.visited[edge.to] = true;
                        self.path.push(i);
                        self.stack.push(Frame { node: edge.to, next: 0 });
                    }
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }

        if self.stack.is_empty() {
            return Flow::zero();
        }

        let delta = self.path.iter().fold(limit, |delta, &i| delta.min(network.edges[i].residual_capacity()));
        for &i in self.path.iter() {
            network.push(i, delta);
        }
        trace!("augmenting path {} -> {} of length {} carries {:?}", from, to, self.path.len(), delta);

        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_is_augmented_once() {
        let mut network = FlowNetwork::<i32>::new(3);
        let a = network.add_edge(0, 1, 5).unwrap();
        let b = network.add_edge(1, 2, 5).unwrap();

        let mut solver = FordFulkerson::default();
        assert_eq!(solver.augment(&mut network, 0, 2, 100), 5);
        assert_eq!(solver.augment(&mut network, 0, 2, 100), 0);
        assert_eq!(network.flow(a), 5);
        assert_eq!(network.flow(b), 5);
    }

    #[test]
    fn limit_caps_the_bottleneck() {
        let mut network = FlowNetwork::<i32>::new(2);
        let e = network.add_edge(0, 1, 5).unwrap();

        let mut solver = FordFulkerson::default();
        assert_eq!(solver.augment(&mut network, 0, 1, 1), 1);
        assert_eq!(network.flow(e), 1);
        assert_eq!(solver.augment(&mut network, 0, 1, 0), 0);
        assert_eq!(network.flow(e), 1);
    }

    #[test]
    fn search_uses_reverse_edges() {
        // 0 -> 1 -> 2 -> 3 gets saturated first, then 0 -> 2 -> 1 -> 3 needs to undo 1 -> 2
        let mut network = FlowNetwork::<i32>::new(4);
        network.add_edge(0, 1, 1).unwrap();
        let middle = network.add_edge(1, 2, 1).unwrap();
        network.add_edge(2, 3, 1).unwrap();
        network.add_edge(0, 2, 1).unwrap();
        network.add_edge(1, 3, 1).unwrap();

        assert_eq!(FordFulkerson::default().solve(&mut network, 0, 3), Ok(2));
        assert_eq!(network.flow(middle), 0);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 200_000;
        let mut network = FlowNetwork::<i64>::new(n);
        for u in 0..n - 1 {
            network.add_edge(u, u + 1, 3).unwrap();
        }
        assert_eq!(network.max_flow(0, n - 1), Ok(3));
    }
}
