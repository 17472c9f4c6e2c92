use crate::bipartite::graph::BipartiteGraph;
use crate::error::{FlowError, Result};
use crate::maximum_flow::SearchOrder;
use log::debug;
use std::collections::VecDeque;

/// Vertex-disjoint paths of a DAG that together visit every node.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct PathCover {
    paths: Vec<Vec<usize>>,
}

impl PathCover {
    /// Paths ordered by their first node.
    #[inline]
    pub fn paths(&self) -> &[Vec<usize>] {
        &self.paths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Minimum path cover of a directed acyclic graph.
///
/// Every node `u` is split into an outgoing copy (left) and an incoming copy (right); each matched
/// pair `u -> v` glues two paths together, so the cover has `num_nodes - |matching|` paths.
pub fn minimum_path_cover(num_nodes: usize, edges: &[(usize, usize)], order: SearchOrder) -> Result<PathCover> {
    let mut graph = BipartiteGraph::new(num_nodes, num_nodes);
    for &(u, v) in edges {
        for node in [u, v] {
            if node >= num_nodes {
                return Err(FlowError::NodeOutOfRange { node, num_nodes });
            }
        }
        graph.add_edge(u, v)?;
    }
    check_acyclic(num_nodes, edges)?;

    let matching = graph.maximum_matching(order)?;

    let mut paths = Vec::with_capacity(num_nodes - matching.len());
    for start in (0..num_nodes).filter(|&v| matching.right_mate(v).is_none()) {
        let mut path = vec![start];
        let mut u = start;
        while let Some(next) = matching.left_mate(u) {
            path.push(next);
            u = next;
        }
        paths.push(path);
    }

    debug!("path cover of {} nodes uses {} paths", num_nodes, paths.len());
    Ok(PathCover { paths })
}

// Kahn's algorithm
fn check_acyclic(num_nodes: usize, edges: &[(usize, usize)]) -> Result<()> {
    let mut in_degree = vec![0usize; num_nodes];
    let mut out = vec![Vec::new(); num_nodes];
    for &(u, v) in edges {
        in_degree[v] += 1;
        out[u].push(v);
    }

    let mut que = (0..num_nodes).filter(|&u| in_degree[u] == 0).collect::<VecDeque<_>>();
    while let Some(u) = que.pop_front() {
        for &v in out[u].iter() {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                que.push_back(v);
            }
        }
    }

    match (0..num_nodes).find(|&u| in_degree[u] > 0) {
        Some(u) => Err(FlowError::NotAcyclic(u)),
        None => Ok(()),
    }
}
