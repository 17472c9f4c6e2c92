//! Reconstruction of 0/1 grids with prescribed row and column sums, and greedy selection of the
//! lexicographically extremal grid among all maximum flows.

pub mod adjuster;
pub mod grid;

pub use adjuster::{Assignment, LexicographicAdjuster, Preference, ScanOrder};
pub use grid::{BinaryGrid, GridFlow};
