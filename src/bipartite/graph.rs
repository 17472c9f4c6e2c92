use crate::error::{FlowError, Result};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

/// A vertex of a bipartite graph, numbered within its side.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Vertex {
    Left(usize),
    Right(usize),
}

/// Undirected bipartite graph; edges only join a left vertex to a right vertex.
#[derive(Default, Clone, Debug)]
pub struct BipartiteGraph {
    num_left: usize,
    num_right: usize,
    edges: Vec<(usize, usize)>,
    // right neighbours of every left vertex
    adjacency: Vec<Vec<usize>>,
}

impl BipartiteGraph {
    pub fn new(num_left: usize, num_right: usize) -> Self {
        Self { num_left, num_right, edges: Vec::new(), adjacency: vec![Vec::new(); num_left] }
    }

    #[inline]
    pub fn num_left(&self) -> usize {
        self.num_left
    }

    #[inline]
    pub fn num_right(&self) -> usize {
        self.num_right
    }

    pub fn add_edge(&mut self, left: usize, right: usize) -> Result<()> {
        if left >= self.num_left {
            return Err(FlowError::VertexOutOfRange { side: Side::Left, index: left, size: self.num_left });
        }
        if right >= self.num_right {
            return Err(FlowError::VertexOutOfRange { side: Side::Right, index: right, size: self.num_right });
        }

        self.edges.push((left, right));
        self.adjacency[left].push(right);
        Ok(())
    }

    /// Edges as `(left, right)` pairs in insertion order.
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn neighbors(&self, left: usize) -> &[usize] {
        &self.adjacency[left]
    }

    pub fn has_edge(&self, vertex: Vertex) -> bool {
        match vertex {
            Vertex::Left(l) => self.adjacency.get(l).is_some_and(|rs| !rs.is_empty()),
            Vertex::Right(r) => self.edges.iter().any(|&(_, x)| x == r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_checks_both_sides() {
        let mut graph = BipartiteGraph::new(2, 1);
        assert!(graph.add_edge(1, 0).is_ok());
        assert_eq!(graph.add_edge(2, 0), Err(FlowError::VertexOutOfRange { side: Side::Left, index: 2, size: 2 }));
        assert_eq!(graph.add_edge(0, 1), Err(FlowError::VertexOutOfRange { side: Side::Right, index: 1, size: 1 }));
        assert_eq!(graph.edges(), &[(1, 0)]);
        assert!(graph.has_edge(Vertex::Left(1)));
        assert!(!graph.has_edge(Vertex::Left(0)));
        assert!(graph.has_edge(Vertex::Right(0)));
    }
}
