use crate::bipartite::graph::Side;
use crate::error::{FlowError, Result};
use crate::lexicographic_flow::adjuster::Assignment;
use crate::maximum_flow::graph::{EdgeId, FlowNetwork};
use crate::maximum_flow::SearchOrder;
use log::debug;

/// A `rows x cols` grid of 0/1 cells whose row and column sums are prescribed.
/// Blocked cells must stay 0.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct BinaryGrid {
    row_sums: Vec<i64>,
    col_sums: Vec<i64>,
    blocked: Vec<bool>,
}

impl BinaryGrid {
    pub fn new(row_sums: Vec<i64>, col_sums: Vec<i64>) -> Self {
        let blocked = vec![false; row_sums.len() * col_sums.len()];
        Self { row_sums, col_sums, blocked }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.row_sums.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.col_sums.len()
    }

    #[inline]
    pub fn row_sums(&self) -> &[i64] {
        &self.row_sums
    }

    #[inline]
    pub fn col_sums(&self) -> &[i64] {
        &self.col_sums
    }

    pub fn block(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_cell(row, col)?;
        let cols = self.cols();
        self.blocked[row * cols + col] = true;
        Ok(())
    }

    /// Panics if the cell lies outside the grid.
    #[inline]
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        assert!(row < self.rows() && col < self.cols(), "cell ({}, {}) is outside the {}x{} grid", row, col, self.rows(), self.cols());
        self.blocked[row * self.cols() + col]
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() {
            return Err(FlowError::VertexOutOfRange { side: Side::Left, index: row, size: self.rows() });
        }
        if col >= self.cols() {
            return Err(FlowError::VertexOutOfRange { side: Side::Right, index: col, size: self.cols() });
        }
        Ok(())
    }

    /// Same grid with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.col_sums.clone(), self.row_sums.clone());
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.is_blocked(r, c) {
                    transposed.blocked[c * self.rows() + r] = true;
                }
            }
        }
        transposed
    }

    /// Builds the grid network and runs maximum flow on it.
    ///
    /// The result may fall short of the row sums; check [`GridFlow::is_feasible`].
    pub fn solve(&self, order: SearchOrder) -> Result<GridFlow> {
        let mut grid_flow = GridFlow::build(self)?;
        grid_flow.value = order.solver::<i64>().solve(&mut grid_flow.network, grid_flow.source, grid_flow.sink)?;

        debug!("grid {}x{}: maximum flow {} of required {}", self.rows(), self.cols(), grid_flow.value, grid_flow.required);
        Ok(grid_flow)
    }
}

/// The flow network of a [`BinaryGrid`] together with its current flow.
///
/// Node layout: rows `0..rows`, columns `rows..rows + cols`, then source and sink.
#[derive(Clone, Debug)]
pub struct GridFlow {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) network: FlowNetwork<i64>,
    pub(crate) source: usize,
    pub(crate) sink: usize,
    pub(crate) row_edges: Vec<EdgeId>,
    pub(crate) col_edges: Vec<EdgeId>,
    // None for blocked cells
    pub(crate) cells: Vec<Option<EdgeId>>,
    value: i64,
    required: i64,
    balanced: bool,
}

impl GridFlow {
    fn build(grid: &BinaryGrid) -> Result<Self> {
        let (rows, cols) = (grid.rows(), grid.cols());
        let source = rows + cols;
        let sink = source + 1;
        let mut network = FlowNetwork::new(rows + cols + 2);

        let row_edges = grid.row_sums.iter().enumerate().map(|(r, &sum)| network.add_edge(source, r, sum)).collect::<Result<Vec<_>>>()?;
        let col_edges = grid.col_sums.iter().enumerate().map(|(c, &sum)| network.add_edge(rows + c, sink, sum)).collect::<Result<Vec<_>>>()?;

        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let cell = if grid.is_blocked(r, c) { None } else { Some(network.add_edge(r, rows + c, 1)?) };
                cells.push(cell);
            }
        }

        let required = grid.row_sums.iter().sum::<i64>();
        let balanced = required == grid.col_sums.iter().sum::<i64>();
        Ok(Self { rows, cols, network, source, sink, row_edges, col_edges, cells, value: 0, required, balanced })
    }

    /// Loads an existing assignment as the flow instead of searching for one.
    pub fn from_assignment(grid: &BinaryGrid, assignment: &Assignment) -> Result<Self> {
        if assignment.rows() != grid.rows() || assignment.cols() != grid.cols() {
            return Err(FlowError::ShapeMismatch { expected_rows: grid.rows(), expected_cols: grid.cols(), rows: assignment.rows(), cols: assignment.cols() });
        }

        let mut grid_flow = Self::build(grid)?;
        for r in 0..grid_flow.rows {
            for c in 0..grid_flow.cols {
                if !assignment.get(r, c) {
                    continue;
                }
                let cell = grid_flow.cell(r, c).ok_or(FlowError::BlockedCell { row: r, col: c })?;
                grid_flow.network.push_flow(grid_flow.row_edges[r], 1)?;
                grid_flow.network.push_flow(cell, 1)?;
                grid_flow.network.push_flow(grid_flow.col_edges[c], 1)?;
                grid_flow.value += 1;
            }
        }
        Ok(grid_flow)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total flow, i.e. the number of selected cells.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Sum of the row sums.
    #[inline]
    pub fn required(&self) -> i64 {
        self.required
    }

    /// Row and column sums agree and the flow meets them.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.balanced && self.value == self.required
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<EdgeId> {
        self.cells[row * self.cols + col]
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|id| self.network.flow(id) > 0)
    }

    /// Cells currently carrying flow.
    pub fn assignment(&self) -> Assignment {
        let mut assignment = Assignment::new(self.rows, self.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                assignment.set(r, c, self.is_selected(r, c));
            }
        }
        assignment
    }

    /// Takes the unit of a selected cell out of the flow: row edge, cell edge and column edge.
    pub(crate) fn withdraw(&mut self, row: usize, col: usize, cell: EdgeId) -> Result<()> {
        self.network.push_flow(self.row_edges[row], -1)?;
        self.network.push_flow(cell, -1)?;
        self.network.push_flow(self.col_edges[col], -1)
    }

    /// Fixes a withdrawn cell as selected: the cell leaves the network and its row and column
    /// give up the unit it used.
    pub(crate) fn lock_selected(&mut self, row: usize, col: usize, cell: EdgeId) -> Result<()> {
        let capacity = self.network.capacity(cell);
        self.network.adjust_capacity(cell, -capacity)?;
        self.network.adjust_capacity(self.row_edges[row], -1)?;
        self.network.adjust_capacity(self.col_edges[col], -1)
    }

    /// Fixes an unselected cell as empty.
    pub(crate) fn lock_empty(&mut self, cell: EdgeId) -> Result<()> {
        let capacity = self.network.capacity(cell);
        self.network.adjust_capacity(cell, -capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbalanced_sums_are_infeasible() {
        let grid = BinaryGrid::new(vec![1, 1], vec![1]);
        let flow = grid.solve(SearchOrder::default()).unwrap();
        assert_eq!(flow.value(), 1);
        assert_eq!(flow.required(), 2);
        assert!(!flow.is_feasible());
    }

    #[test]
    fn blocked_cells_never_carry_flow() {
        let mut grid = BinaryGrid::new(vec![1, 1], vec![1, 1]);
        grid.block(0, 0).unwrap();
        let flow = grid.solve(SearchOrder::default()).unwrap();
        assert!(flow.is_feasible());
        assert!(!flow.is_selected(0, 0));
        assert!(flow.is_selected(0, 1));
        assert!(flow.is_selected(1, 0));
    }

    #[test]
    fn block_checks_range() {
        let mut grid = BinaryGrid::new(vec![0], vec![0, 0]);
        assert_eq!(grid.block(1, 0), Err(FlowError::VertexOutOfRange { side: Side::Left, index: 1, size: 1 }));
        assert_eq!(grid.block(0, 2), Err(FlowError::VertexOutOfRange { side: Side::Right, index: 2, size: 2 }));
    }

    #[test]
    fn negative_sums_are_rejected() {
        let grid = BinaryGrid::new(vec![-1], vec![1]);
        assert_eq!(grid.solve(SearchOrder::default()).unwrap_err(), FlowError::NegativeCapacity { from: 2, to: 0 });
    }

    #[test]
    fn from_assignment_loads_the_cells() {
        let grid = BinaryGrid::new(vec![1, 1], vec![1, 1]);
        let mut assignment = Assignment::new(2, 2);
        assignment.set(0, 1, true);
        assignment.set(1, 0, true);

        let flow = GridFlow::from_assignment(&grid, &assignment).unwrap();
        assert!(flow.is_feasible());
        assert_eq!(flow.assignment(), assignment);
    }

    #[test]
    fn from_assignment_rejects_overfull_rows() {
        let grid = BinaryGrid::new(vec![1, 1], vec![2, 2]);
        let mut assignment = Assignment::new(2, 2);
        assignment.set(0, 0, true);
        assignment.set(0, 1, true);
        assert_eq!(GridFlow::from_assignment(&grid, &assignment).unwrap_err(), FlowError::FlowOutOfBounds { edge: 0 });
    }

    #[test]
    fn from_assignment_rejects_blocked_cells_and_shapes() {
        let mut grid = BinaryGrid::new(vec![1], vec![1]);
        grid.block(0, 0).unwrap();
        let mut assignment = Assignment::new(1, 1);
        assignment.set(0, 0, true);
        assert_eq!(GridFlow::from_assignment(&grid, &assignment).unwrap_err(), FlowError::BlockedCell { row: 0, col: 0 });
        assert_eq!(
            GridFlow::from_assignment(&grid, &Assignment::new(2, 1)).unwrap_err(),
            FlowError::ShapeMismatch { expected_rows: 1, expected_cols: 1, rows: 2, cols: 1 }
        );
    }

    #[test]
    fn transpose_swaps_blocks() {
        let mut grid = BinaryGrid::new(vec![1, 0, 0], vec![1, 0]);
        grid.block(2, 0).unwrap();
        let transposed = grid.transpose();
        assert_eq!(transposed.rows(), 2);
        assert!(transposed.is_blocked(0, 2));
        assert!(!transposed.is_blocked(1, 2));
    }

    #[test]
    #[should_panic]
    fn is_blocked_outside_the_grid_panics() {
        BinaryGrid::new(vec![1, 1], vec![1, 1]).is_blocked(0, 2);
    }
}
