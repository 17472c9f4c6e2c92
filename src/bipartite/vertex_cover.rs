use crate::bipartite::graph::{BipartiteGraph, Vertex};
use crate::bipartite::matching::Matching;
use crate::error::Result;
use crate::maximum_flow::SearchOrder;
use log::debug;

/// A set of vertices touching every edge of a bipartite graph.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct VertexCover {
    left: Vec<usize>,
    right: Vec<usize>,
}

impl VertexCover {
    /// Covered left vertices in increasing order.
    #[inline]
    pub fn left(&self) -> &[usize] {
        &self.left
    }

    /// Covered right vertices in increasing order.
    #[inline]
    pub fn right(&self) -> &[usize] {
        &self.right
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        match vertex {
            Vertex::Left(l) => self.left.binary_search(&l).is_ok(),
            Vertex::Right(r) => self.right.binary_search(&r).is_ok(),
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.left.iter().map(|&l| Vertex::Left(l)).chain(self.right.iter().map(|&r| Vertex::Right(r)))
    }

    /// Whether every edge of `graph` has an endpoint in the cover.
    pub fn covers(&self, graph: &BipartiteGraph) -> bool {
        graph.edges().iter().all(|&(l, r)| self.contains(Vertex::Left(l)) || self.contains(Vertex::Right(r)))
    }
}

impl BipartiteGraph {
    /// Minimum vertex cover by König's theorem; its size equals the maximum matching size.
    pub fn minimum_vertex_cover(&self, order: SearchOrder) -> Result<VertexCover> {
        let matching = self.maximum_matching(order)?;
        Ok(self.vertex_cover_from_matching(&matching))
    }

    /// König construction from a maximum matching: mark everything reachable from unmatched left
    /// vertices by alternating paths, then take the unmarked left and the marked right vertices.
    pub fn vertex_cover_from_matching(&self, matching: &Matching) -> VertexCover {
        let (n, m) = (self.num_left(), self.num_right());
        let mut left_marked = vec![false; n];
        let mut right_marked = vec![false; m];

        let mut stack = (0..n).filter(|&l| matching.left_mate(l).is_none() && !self.neighbors(l).is_empty()).collect::<Vec<_>>();
        stack.iter().for_each(|&l| left_marked[l] = true);

        while let Some(l) = stack.pop() {
            // non-matching edges to the right, matching edges back to the left
            for &r in self.neighbors(l) {
                if right_marked[r] || matching.left_mate(l) == Some(r) {
                    continue;
                }
                right_marked[r] = true;
                if let Some(next) = matching.right_mate(r) {
                    if !left_marked[next] {
                        left_marked[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        let cover = VertexCover {
            left: (0..n).filter(|&l| !left_marked[l] && !self.neighbors(l).is_empty()).collect(),
            right: (0..m).filter(|&r| right_marked[r]).collect(),
        };
        debug!("vertex cover of size {} ({} left, {} right) from a matching of size {}", cover.len(), cover.left.len(), cover.right.len(), matching.len());
        cover
    }
}
