//! Square grid geometry.
//!
//! `SquareGrid` pre-enumerates every cell of a `width x width` grid in
//! row-major order and answers coordinate questions about it. It holds no
//! values; see [`ValuedGrid`](super::ValuedGrid) for that.
//!
//! ## Lookups
//!
//! - `cell_at`: returns `None` off the grid (used for neighbor probing)
//! - `cell`: strict variant, returns [`GridError::InvalidCoordinate`]
//! - `row` / `column`: extract a line over a [`Span`], clamped to the grid
//!
//! ```
//! use grid_puzzles::core::{Cell, Direction, Span, SquareGrid};
//!
//! let grid = SquareGrid::new(4).unwrap();
//! assert_eq!(grid.cell_at(1, 1), Some(Cell::new(1, 1)));
//! assert_eq!(grid.cell_at(5, 1), None);
//! assert_eq!(grid.neighbor(Cell::new(1, 1), Direction::Up), None);
//!
//! let right_to_left = grid.row(2, Span::down(4, 1)).unwrap();
//! assert_eq!(right_to_left.first(), Some(&Cell::new(2, 4)));
//! ```

use super::{Cell, Direction, GridError, Span};

/// Immutable geometry of a square grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    width: i32,
    cells: Vec<Cell>,
}

impl SquareGrid {
    /// Enumerate all cells of a `width x width` grid.
    ///
    /// A width of zero yields an empty grid.
    pub fn new(width: i32) -> Result<Self, GridError> {
        if width < 0 {
            return Err(GridError::InvalidWidth(width));
        }

        let cells = (1..=width)
            .flat_map(|row| (1..=width).map(move |col| Cell::new(row, col)))
            .collect();

        Ok(Self { width, cells })
    }

    /// Side length of the grid.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn in_range(&self, index: i32) -> bool {
        (1..=self.width).contains(&index)
    }

    /// Row-major position of a cell, if it is on the grid.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.in_range(cell.row) && self.in_range(cell.col) {
            Some(((cell.row - 1) * self.width + (cell.col - 1)) as usize)
        } else {
            None
        }
    }

    /// Look up a cell, or `None` if either coordinate is off the grid.
    #[must_use]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        self.index_of(Cell::new(row, col)).map(|index| self.cells[index])
    }

    /// Look up a cell, failing for coordinates off the grid.
    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        self.cell_at(row, col)
            .ok_or(GridError::InvalidCoordinate { row, col })
    }

    /// The cell one step away in `direction`, or `None` at the edge.
    #[must_use]
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = cell.shifted(direction);
        self.cell_at(next.row, next.col)
    }

    /// Cells of row `row` over `cols`, in the span's traversal order.
    ///
    /// The span is clamped to `[1, width]` first.
    pub fn row(&self, row: i32, cols: impl Into<Span>) -> Result<Vec<Cell>, GridError> {
        if !self.in_range(row) {
            return Err(GridError::InvalidRow(row));
        }
        let cols: Span = cols.into();
        cols.clamped(self.width)
            .iter()
            .map(|col| self.cell(row, col))
            .collect()
    }

    /// Cells of column `col` over `rows`, in the span's traversal order.
    ///
    /// The span is clamped to `[1, width]` first.
    pub fn column(&self, rows: impl Into<Span>, col: i32) -> Result<Vec<Cell>, GridError> {
        if !self.in_range(col) {
            return Err(GridError::InvalidColumn(col));
        }
        let rows: Span = rows.into();
        rows.clamped(self.width)
            .iter()
            .map(|row| self.cell(row, col))
            .collect()
    }

    /// Every full row (for horizontal travel) or column (vertical travel),
    /// each ordered so its front lies at the far edge in `direction`.
    pub fn lines_toward(&self, direction: Direction) -> Result<Vec<Vec<Cell>>, GridError> {
        let full = Span::up(1, self.width);
        let span = match direction {
            Direction::Up | Direction::Left => full,
            Direction::Down | Direction::Right => full.reversed(),
        };

        (1..=self.width)
            .map(|index| {
                if direction.is_vertical() {
                    self.column(span, index)
                } else {
                    self.row(index, span)
                }
            })
            .collect()
    }
}
