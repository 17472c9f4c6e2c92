pub mod edmonds_karp;
pub mod ford_fulkerson;
pub mod graph;

use crate::error::{FlowError, Result};
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::ford_fulkerson::FordFulkerson;
use crate::maximum_flow::graph::{FlowNetwork, FlowNum};
use log::debug;

/// An augmenting path strategy. `solve` keeps augmenting until no path is left.
pub trait MaximumFlowSolver<Flow>
where
    Flow: FlowNum,
{
    /// Pushes the bottleneck of one augmenting path `from -> to`, capped at `limit`.
    /// Returns zero and leaves the network untouched when no path exists.
    fn augment(&mut self, network: &mut FlowNetwork<Flow>, from: usize, to: usize, limit: Flow) -> Flow;

    /// Augments from the flow already present in `network` and returns the flow added.
    fn solve(&mut self, network: &mut FlowNetwork<Flow>, source: usize, sink: usize) -> Result<Flow> {
        network.check_node(source)?;
        network.check_node(sink)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }

        // each path is already capped by its bottleneck
        let upper = Flow::max_value();
        let mut flow = Flow::zero();
        let mut paths = 0usize;
        loop {
            let delta = self.augment(network, source, sink, upper);
            if delta == Flow::zero() {
                break;
            }
            flow += delta;
            paths += 1;
        }

        debug!("maximum flow {} -> {}: added {:?} over {} augmenting paths ({} nodes, {} edges)", source, sink, flow, paths, network.num_nodes(), network.num_edges());
        Ok(flow)
    }
}

/// Which augmenting path search to run.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchOrder {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl SearchOrder {
    pub fn solver<Flow>(self) -> Box<dyn MaximumFlowSolver<Flow>>
    where
        Flow: FlowNum + 'static,
    {
        match self {
            SearchOrder::DepthFirst => Box::new(FordFulkerson::default()),
            SearchOrder::BreadthFirst => Box::new(EdmondsKarp::default()),
        }
    }
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: FlowNum,
{
    /// Maximum flow with depth-first augmenting paths.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> Result<Flow> {
        FordFulkerson::default().solve(self, source, sink)
    }
}
