use crate::bipartite::graph::BipartiteGraph;
use crate::error::Result;
use crate::maximum_flow::graph::FlowNetwork;
use crate::maximum_flow::SearchOrder;
use log::debug;

/// A set of vertex-disjoint edges of a bipartite graph.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Matching {
    pairs: Vec<(usize, usize)>,
    left_mate: Vec<Option<usize>>,
    right_mate: Vec<Option<usize>>,
}

impl Matching {
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Matched `(left, right)` pairs ordered by left vertex.
    #[inline]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Panics if `left` is not a left vertex of the matched graph.
    #[inline]
    pub fn left_mate(&self, left: usize) -> Option<usize> {
        self.left_mate[left]
    }

    /// Panics if `right` is not a right vertex of the matched graph.
    #[inline]
    pub fn right_mate(&self, right: usize) -> Option<usize> {
        self.right_mate[right]
    }
}

impl BipartiteGraph {
    /// Maximum matching from a unit-capacity flow network:
    /// source -> every left vertex, every edge left -> right, every right vertex -> sink.
    pub fn maximum_matching(&self, order: SearchOrder) -> Result<Matching> {
        let (n, m) = (self.num_left(), self.num_right());
        let source = n + m;
        let sink = n + m + 1;

        let mut network = FlowNetwork::<i32>::new(n + m + 2);
        for l in 0..n {
            network.add_edge(source, l, 1)?;
        }
        for r in 0..m {
            network.add_edge(n + r, sink, 1)?;
        }
        let edge_ids = self.edges().iter().map(|&(l, r)| network.add_edge(l, n + r, 1)).collect::<Result<Vec<_>>>()?;

        order.solver::<i32>().solve(&mut network, source, sink)?;

        let mut matching = Matching { pairs: Vec::new(), left_mate: vec![None; n], right_mate: vec![None; m] };
        for (&(l, r), &id) in self.edges().iter().zip(edge_ids.iter()) {
            if network.flow(id) > 0 {
                matching.pairs.push((l, r));
                matching.left_mate[l] = Some(r);
                matching.right_mate[r] = Some(l);
            }
        }
        matching.pairs.sort_unstable();

        debug!("maximum matching of size {} ({} left, {} right, {} edges)", matching.len(), n, m, self.edges().len());
        Ok(matching)
    }
}
