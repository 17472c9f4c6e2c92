use thiserror::Error;

use crate::bipartite::graph::Side;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("node {node} is out of range for a network with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("edge {edge} is not a forward edge of this network")]
    EdgeOutOfRange { edge: usize },

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("source and sink are the same node {0}")]
    SourceIsSink(usize),

    #[error("capacity of edge {edge} cannot drop below its flow or zero")]
    CapacityBelowFlow { edge: usize },

    #[error("flow on edge {edge} would leave [0, capacity]")]
    FlowOutOfBounds { edge: usize },

    #[error("{side:?} vertex {index} is out of range for a side of size {size}")]
    VertexOutOfRange { side: Side, index: usize, size: usize },

    #[error("graph contains a cycle through node {0}")]
    NotAcyclic(usize),

    #[error("expected a {expected_rows}x{expected_cols} grid, got {rows}x{cols}")]
    ShapeMismatch { expected_rows: usize, expected_cols: usize, rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is blocked")]
    BlockedCell { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, FlowError>;
