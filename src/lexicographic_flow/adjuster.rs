use crate::error::{FlowError, Result};
use crate::lexicographic_flow::grid::GridFlow;
use crate::maximum_flow::graph::EdgeId;
use crate::maximum_flow::{MaximumFlowSolver, SearchOrder};
use log::{debug, trace};
use std::fmt;

/// Which cell value sorts first.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Preference {
    /// Empty cells first: the lexicographically smallest grid.
    #[default]
    Absent,
    /// Selected cells first: the lexicographically largest grid.
    Present,
}

/// Order in which cells are decided, which is also the order the result is compared in.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScanOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

impl ScanOrder {
    fn cells(self, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        match self {
            ScanOrder::RowMajor => (0..rows).flat_map(|r| (0..cols).map(move |c| (r, c))).collect(),
            ScanOrder::ColumnMajor => (0..cols).flat_map(|c| (0..rows).map(move |r| (r, c))).collect(),
        }
    }
}

/// A 0/1 value per grid cell.
#[derive(Default, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Assignment {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Assignment {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![false; rows * cols] }
    }

    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if let Some(row) = rows.iter().find(|row| row.len() != cols) {
            return Err(FlowError::ShapeMismatch { expected_rows: rows.len(), expected_cols: cols, rows: rows.len(), cols: row.len() });
        }
        Ok(Self { rows: rows.len(), cols, cells: rows.concat() })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.cells[row * self.cols + col] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of selected cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&x| x).count()
    }

    pub fn row_sums(&self) -> Vec<i64> {
        (0..self.rows).map(|r| self.row(r).iter().filter(|&&x| x).count() as i64).collect()
    }

    pub fn col_sums(&self) -> Vec<i64> {
        (0..self.cols).map(|c| (0..self.rows).filter(|&r| self.get(r, c)).count() as i64).collect()
    }

    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                transposed.set(c, r, self.get(r, c));
            }
        }
        transposed
    }

    /// One line per row, `present`/`absent` per cell.
    pub fn render(&self, present: char, absent: char) -> String {
        (0..self.rows).map(|r| self.row(r).iter().map(|&x| if x { present } else { absent }).collect::<String>()).collect::<Vec<_>>().join("\n")
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('1', '0'))
    }
}

/// Turns a maximum grid flow into the lexicographically extremal assignment of the same value.
///
/// Cells are decided one at a time in scan order and every decision is fixed in the residual
/// network before the next one, so the result depends on the scan order.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct LexicographicAdjuster {
    pub preference: Preference,
    pub scan: ScanOrder,
    pub search: SearchOrder,
}

impl LexicographicAdjuster {
    pub fn new(preference: Preference, scan: ScanOrder) -> Self {
        Self { preference, scan, search: SearchOrder::default() }
    }

    pub fn with_search_order(mut self, search: SearchOrder) -> Self {
        self.search = search;
        self
    }

    /// `grid` must hold a maximum flow (as returned by [`BinaryGrid::solve`]).
    ///
    /// [`BinaryGrid::solve`]: crate::lexicographic_flow::grid::BinaryGrid::solve
    pub fn adjust(&self, mut grid: GridFlow) -> Result<Assignment> {
        let mut solver = self.search.solver::<i64>();
        let mut assignment = Assignment::new(grid.rows(), grid.cols());
        let mut flipped = 0usize;

        for (r, c) in self.scan.cells(grid.rows(), grid.cols()) {
            let Some(cell) = grid.cell(r, c) else {
                continue;
            };
            let selected = grid.network.flow(cell) > 0;
            let present = match self.preference {
                Preference::Absent => clear_cell(&mut grid, solver.as_mut(), r, c, cell)?,
                Preference::Present => fill_cell(&mut grid, solver.as_mut(), r, c, cell)?,
            };
            if present != selected {
                flipped += 1;
                trace!("cell ({}, {}) moved to {}", r, c, present);
            }
            assignment.set(r, c, present);
        }

        debug!("adjusted {}x{} grid with {} selected cells, {} cells changed", grid.rows(), grid.cols(), assignment.count(), flipped);
        Ok(assignment)
    }
}

// Tries to leave the cell empty; returns whether it has to stay selected.
fn clear_cell(grid: &mut GridFlow, solver: &mut dyn MaximumFlowSolver<i64>, r: usize, c: usize, cell: EdgeId) -> Result<bool> {
    if grid.network.flow(cell) == 0 {
        grid.lock_empty(cell)?;
        return Ok(false);
    }

    grid.withdraw(r, c, cell)?;
    grid.lock_empty(cell)?;
    let (source, sink) = (grid.source, grid.sink);
    if solver.augment(&mut grid.network, source, sink, 1) == 1 {
        return Ok(false);
    }

    // no other way to route the unit: the cell keeps it
    grid.lock_selected(r, c, cell)?;
    Ok(true)
}

// Tries to select the cell; returns whether it ended up selected.
fn fill_cell(grid: &mut GridFlow, solver: &mut dyn MaximumFlowSolver<i64>, r: usize, c: usize, cell: EdgeId) -> Result<bool> {
    if grid.network.flow(cell) == 0 {
        // a residual path column -> row closes a cycle through the cell
        let column = grid.rows() + c;
        if solver.augment(&mut grid.network, column, r, 1) == 0 {
            grid.lock_empty(cell)?;
            return Ok(false);
        }
        grid.network.push_flow(cell, 1)?;
    }

    grid.withdraw(r, c, cell)?;
    grid.lock_selected(r, c, cell)?;
    Ok(true)
}
