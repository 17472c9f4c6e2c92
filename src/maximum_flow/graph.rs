use crate::error::{FlowError, Result};
use num_traits::{Bounded, NumAssign, Signed};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Number type a network can carry: any bounded signed integer.
pub trait FlowNum: NumAssign + Signed + Bounded + Ord + Copy + Debug {}

impl<T> FlowNum for T where T: NumAssign + Signed + Bounded + Ord + Copy + Debug {}

/// One arc of the residual graph.
///
/// A forward edge carries the capacity given to [`FlowNetwork::add_edge`]; its reverse edge has
/// capacity zero and always holds the negated flow of the forward edge.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
    pub rev: usize,
}

impl<Flow> Edge<Flow>
where
    Flow: FlowNum,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }
}

/// Handle of a forward edge.
///
/// Edges live in one arena: the forward edge at position `2k` is paired with its reverse edge at
/// `2k + 1`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Insertion ordinal of the edge (0 for the first `add_edge` call, 1 for the second, ...).
    #[inline]
    pub fn index(self) -> usize {
        self.0 / 2
    }
}

#[derive(Default, Clone, Debug)]
pub struct FlowNetwork<Flow> {
    num_nodes: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: FlowNum,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, edges: Vec::new(), adjacency: vec![Vec::new(); num_nodes] }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of forward edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.adjacency.extend((0..num_nodes).map(|_| Vec::new()));
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<EdgeId> {
        self.check_node(from)?;
        self.check_node(to)?;
        if capacity < Flow::zero() {
            return Err(FlowError::NegativeCapacity { from, to });
        }

        let forward = self.edges.len();
        self.edges.push(Edge { from, to, flow: Flow::zero(), capacity, rev: forward + 1 });
        self.edges.push(Edge { from: to, to: from, flow: Flow::zero(), capacity: Flow::zero(), rev: forward });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(forward + 1);

        Ok(EdgeId(forward))
    }

    #[inline]
    pub(crate) fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.num_nodes {
            return Err(FlowError::NodeOutOfRange { node, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    fn check_edge(&self, edge: EdgeId) -> Result<usize> {
        if edge.0 % 2 != 0 || edge.0 >= self.edges.len() {
            return Err(FlowError::EdgeOutOfRange { edge: edge.0 });
        }
        Ok(edge.0)
    }

    /// Panics if `edge` was not returned by this network.
    #[inline]
    pub fn edge(&self, edge: EdgeId) -> &Edge<Flow> {
        &self.edges[edge.0]
    }

    pub fn get_edge(&self, edge: EdgeId) -> Option<&Edge<Flow>> {
        self.check_edge(edge).ok().map(|i| &self.edges[i])
    }

    /// Panics if `edge` was not returned by this network.
    #[inline]
    pub fn flow(&self, edge: EdgeId) -> Flow {
        self.edges[edge.0].flow
    }

    /// Panics if `edge` was not returned by this network.
    #[inline]
    pub fn capacity(&self, edge: EdgeId) -> Flow {
        self.edges[edge.0].capacity
    }

    /// Panics if `edge` was not returned by this network.
    #[inline]
    pub fn residual_capacity(&self, edge: EdgeId) -> Flow {
        self.edges[edge.0].residual_capacity()
    }

    /// The reverse edge paired with `edge`. Panics if `edge` was not returned by this network.
    #[inline]
    pub fn reverse(&self, edge: EdgeId) -> &Edge<Flow> {
        &self.edges[self.edges[edge.0].rev]
    }

    /// Forward edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<Flow>)> + '_ {
        self.edges.iter().enumerate().step_by(2).map(|(i, e)| (EdgeId(i), e))
    }

    /// Every residual arc leaving `u`, forward and reverse.
    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = &Edge<Flow>> + '_ {
        self.adjacency[u].iter().map(move |&i| &self.edges[i])
    }

    /// Forward edges leaving `u`.
    pub fn out_edges(&self, u: usize) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency[u].iter().filter(|&&i| i % 2 == 0).map(|&i| EdgeId(i))
    }

    /// Changes the capacity of a forward edge by `delta`.
    ///
    /// The new capacity must stay non-negative and at least the current flow.
    pub fn adjust_capacity(&mut self, edge: EdgeId, delta: Flow) -> Result<()> {
        let i = self.check_edge(edge)?;
        let capacity = self.edges[i].capacity + delta;
        if capacity < Flow::zero() || capacity < self.edges[i].flow {
            return Err(FlowError::CapacityBelowFlow { edge: edge.0 });
        }
        self.edges[i].capacity = capacity;
        Ok(())
    }

    /// Moves `delta` units (possibly negative) along a forward edge, keeping its pair in sync.
    pub fn push_flow(&mut self, edge: EdgeId, delta: Flow) -> Result<()> {
        let i = self.check_edge(edge)?;
        let flow = self.edges[i].flow + delta;
        if flow < Flow::zero() || flow > self.edges[i].capacity {
            return Err(FlowError::FlowOutOfBounds { edge: edge.0 });
        }
        self.push(i, delta);
        Ok(())
    }

    // works on both forward and reverse arcs
    #[inline]
    pub(crate) fn push(&mut self, arena_index: usize, delta: Flow) {
        let rev = self.edges[arena_index].rev;
        self.edges[arena_index].flow += delta;
        self.edges[rev].flow -= delta;
    }

    pub fn reset_flow(&mut self) {
        self.edges.iter_mut().for_each(|e| e.flow = Flow::zero());
    }

    /// Net flow leaving `source`.
    pub fn flow_value(&self, source: usize) -> Flow {
        self.neighbors(source).fold(Flow::zero(), |sum, e| sum + e.flow)
    }

    /// Inflow minus outflow at `u`.
    pub fn excess(&self, u: usize) -> Flow {
        -self.flow_value(u)
    }

    /// Nodes reachable from `source` in the residual network.
    pub fn reachable(&self, source: usize) -> Vec<bool> {
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            for e in self.neighbors(u) {
                if !visited[e.to] && e.residual_capacity() > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }
        visited
    }

    /// Source side of a minimum cut as sorted node ids, valid once a maximum flow has been
    /// computed. Same set as the `true` entries of [`FlowNetwork::reachable`].
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let reachable = self.reachable(source);
        (0..self.num_nodes).filter(|&u| reachable[u]).collect()
    }

    /// Forward edges leaving the source side of the minimum cut.
    pub fn cut_edges(&self, source: usize) -> Vec<EdgeId> {
        let reachable = self.reachable(source);
        self.edges().filter(|(_, e)| reachable[e.from] && !reachable[e.to]).map(|(id, _)| id).collect()
    }

    pub fn cut_capacity(&self, source: usize) -> Flow {
        self.cut_edges(source).into_iter().fold(Flow::zero(), |sum, id| sum + self.capacity(id))
    }
}
