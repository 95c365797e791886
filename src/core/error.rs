//! Error type shared by the grid and the games built on it.

use super::Cell;

/// Errors raised by strict grid lookups, construction, and game moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// Grid width was negative.
    #[display("grid width must be non-negative, got {_0}")]
    InvalidWidth(i32),

    /// A strict cell lookup fell outside `[1, width]`.
    #[display("illegal cell coordinates i={row}, j={col}")]
    InvalidCoordinate { row: i32, col: i32 },

    /// A requested row index is off the grid.
    #[display("invalid requested row number {_0}")]
    InvalidRow(i32),

    /// A requested column index is off the grid.
    #[display("invalid requested column number {_0}")]
    InvalidColumn(i32),

    /// A write targeted a cell that this grid does not contain.
    #[display("cell {_0} is not on this grid")]
    UnknownCell(Cell),

    /// A spawn targeted a cell that already holds a tile.
    #[display("cell {_0} is already occupied")]
    OccupiedCell(Cell),

    /// The sliding puzzle lost its vacant cell.
    #[display("board doesn't have a vacant cell")]
    NoVacantCell,

    /// An initial permutation had the wrong number of tiles.
    #[display("initial permutation has {actual} values, expected {expected}")]
    PermutationLength { expected: usize, actual: usize },
}

impl std::error::Error for GridError {}
