pub mod graph;
pub mod matching;
pub mod path_cover;
pub mod vertex_cover;

pub use graph::{BipartiteGraph, Side, Vertex};
pub use matching::Matching;
pub use path_cover::{minimum_path_cover, PathCover};
pub use vertex_cover::VertexCover;
