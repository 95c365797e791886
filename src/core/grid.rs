//! Grid of optional values layered over [`SquareGrid`] geometry.
//!
//! Every cell starts empty. Writes are single-cell only and the width is
//! fixed for the grid's lifetime.
//!
//! Predicates passed to `find`, `filter`, `any` and `all` receive the
//! cell's `Option<&T>`, so callers can match on emptiness itself:
//!
//! ```
//! use grid_puzzles::core::ValuedGrid;
//!
//! let mut grid = ValuedGrid::<u32>::new(2).unwrap();
//! let corner = grid.cell(1, 1).unwrap();
//! grid.set(corner, Some(2)).unwrap();
//!
//! assert_eq!(grid.find(|v| v.is_none()), grid.cell_at(1, 2));
//! assert_eq!(grid.filter(|v| v.is_none()).len(), 3);
//! assert!(grid.any(|v| v == Some(&2)));
//! ```

use rustc_hash::FxHashMap;

use super::{Cell, Direction, GridError, Span, SquareGrid};

/// Mutable mapping from every cell of a square grid to an optional value.
#[derive(Clone, Debug)]
pub struct ValuedGrid<T> {
    geometry: SquareGrid,
    values: FxHashMap<Cell, Option<T>>,
}

impl<T> ValuedGrid<T> {
    /// Create a grid with every cell empty.
    pub fn new(width: i32) -> Result<Self, GridError> {
        let geometry = SquareGrid::new(width)?;
        let values = geometry.cells().iter().map(|&cell| (cell, None)).collect();
        Ok(Self { geometry, values })
    }

    /// The underlying geometry.
    #[must_use]
    pub fn geometry(&self) -> &SquareGrid {
        &self.geometry
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.geometry.width()
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.geometry.cells()
    }

    #[must_use]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        self.geometry.cell_at(row, col)
    }

    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        self.geometry.cell(row, col)
    }

    #[must_use]
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.geometry.neighbor(cell, direction)
    }

    pub fn row(&self, row: i32, cols: impl Into<Span>) -> Result<Vec<Cell>, GridError> {
        self.geometry.row(row, cols)
    }

    pub fn column(&self, rows: impl Into<Span>, col: i32) -> Result<Vec<Cell>, GridError> {
        self.geometry.column(rows, col)
    }

    /// Value stored at `cell`. Cells off the grid read as empty.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.values.get(&cell).and_then(Option::as_ref)
    }

    /// Overwrite the value at `cell`; `None` clears it.
    pub fn set(&mut self, cell: Cell, value: Option<T>) -> Result<(), GridError> {
        match self.values.get_mut(&cell) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GridError::UnknownCell(cell)),
        }
    }

    /// Values along a line of cells, in the line's order.
    #[must_use]
    pub fn values_along(&self, line: &[Cell]) -> Vec<Option<&T>> {
        line.iter().map(|&cell| self.get(cell)).collect()
    }

    /// Values of every cell, row-major.
    #[must_use]
    pub fn values_row_major(&self) -> Vec<Option<&T>> {
        self.values_along(self.geometry.cells())
    }

    /// First cell (row-major) whose value satisfies `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Option<Cell> {
        self.cells()
            .iter()
            .copied()
            .find(|&cell| predicate(self.get(cell)))
    }

    /// All cells (row-major) whose value satisfies `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Vec<Cell> {
        self.cells()
            .iter()
            .copied()
            .filter(|&cell| predicate(self.get(cell)))
            .collect()
    }

    /// Whether any cell's value satisfies `predicate`.
    pub fn any(&self, predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.find(predicate).is_some()
    }

    /// Whether every cell's value satisfies `predicate`.
    ///
    /// Defined as "no cell fails the predicate", so an empty grid is `true`.
    pub fn all(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        !self.any(|value| !predicate(value))
    }
}
