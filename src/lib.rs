//! Augmenting-path maximum flow on residual graphs, with two post-processing layers built on it:
//! König minimum vertex cover for bipartite graphs and greedy lexicographic adjustment of 0/1
//! grid flows.

pub mod bipartite;
pub mod error;
pub mod lexicographic_flow;
pub mod maximum_flow;

pub use error::{FlowError, Result};
pub use maximum_flow::graph::{EdgeId, FlowNetwork};
pub use maximum_flow::{MaximumFlowSolver, SearchOrder};
