//! Cell coordinates, move directions, and coordinate spans.
//!
//! Cells are addressed with 1-based `(row, col)` pairs. Row 1 is the top of
//! the grid and column 1 is its left edge.
//!
//! ```
//! use grid_puzzles::core::{Cell, Direction, Span};
//!
//! let cell = Cell::new(2, 3);
//! assert_eq!(cell.shifted(Direction::Up), Cell::new(1, 3));
//!
//! let down: Vec<i32> = Span::down(4, 1).iter().collect();
//! assert_eq!(down, vec![4, 3, 2, 1]);
//! ```

use serde::{Deserialize, Serialize};

/// A single grid position, identified by 1-based row and column.
///
/// Equality is structural: two cells with the same coordinates are the
/// same cell regardless of which grid produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row, 1 at the top.
    pub row: i32,
    /// Column, 1 at the left.
    pub col: i32,
}

impl Cell {
    /// Create a cell. No bounds are checked; grids decide what is on them.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinates one step away in `direction`.
    ///
    /// The result may lie off any particular grid. Use
    /// [`SquareGrid::neighbor`](super::SquareGrid::neighbor) for a
    /// bounds-aware lookup.
    #[must_use]
    pub const fn shifted(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.row - 1, self.col),
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Left => Self::new(self.row, self.col - 1),
            Direction::Right => Self::new(self.row, self.col + 1),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Up` and `Down`, which travel along columns.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// An inclusive range of coordinates, walked either ascending or descending.
///
/// An ascending span with `first > last` (or a descending one with
/// `first < last`) is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub first: i32,
    pub last: i32,
    pub descending: bool,
}

impl Span {
    /// Ascending span `first..=last`.
    #[must_use]
    pub const fn up(first: i32, last: i32) -> Self {
        Self { first, last, descending: false }
    }

    /// Descending span from `first` down to `last`.
    #[must_use]
    pub const fn down(first: i32, last: i32) -> Self {
        Self { first, last, descending: true }
    }

    /// The same coordinates walked the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            first: self.last,
            last: self.first,
            descending: !self.descending,
        }
    }

    /// Restrict the span to `[1, width]` without changing its direction.
    #[must_use]
    pub fn clamped(self, width: i32) -> Self {
        if self.descending {
            Self::down(self.first.min(width), self.last.max(1))
        } else {
            Self::up(self.first.max(1), self.last.min(width))
        }
    }

    /// Coordinates in traversal order.
    pub fn iter(self) -> impl Iterator<Item = i32> {
        let (step, len) = if self.descending {
            (-1, self.first - self.last + 1)
        } else {
            (1, self.last - self.first + 1)
        };
        let first = self.first;
        (0..len.max(0)).map(move |i| first + step * i)
    }
}

impl From<std::ops::RangeInclusive<i32>> for Span {
    fn from(range: std::ops::RangeInclusive<i32>) -> Self {
        Self::up(*range.start(), *range.end())
    }
}
