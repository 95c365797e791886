//! 15-puzzle-style sliding game.

use tracing::{debug, instrument, warn};

use crate::core::{Cell, Direction, GameRng, GridError, Span, ValuedGrid};
use crate::games::{Game, GameStatus};

use super::{PermutationSource, RandomPermutation, SlidingConfig};

/// Sliding puzzle state: numbered tiles and exactly one vacant cell.
pub struct SlidingGame<P> {
    grid: ValuedGrid<u32>,
    source: P,
    tile_count: usize,
}

impl<P: PermutationSource> SlidingGame<P> {
    /// Create an empty puzzle. Call [`Game::initialize`] to lay out tiles.
    pub fn new(config: &SlidingConfig, source: P) -> Result<Self, GridError> {
        Ok(Self {
            grid: ValuedGrid::new(config.width)?,
            source,
            tile_count: config.tile_count(),
        })
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &ValuedGrid<u32> {
        &self.grid
    }

    /// The vacant cell.
    pub fn vacant_cell(&self) -> Result<Cell, GridError> {
        self.grid
            .find(|v| v.is_none())
            .ok_or(GridError::NoVacantCell)
    }

    /// Line through the vacant cell, ordered so values travel toward its end.
    fn line_through(&self, vacant: Cell, direction: Direction) -> Result<Vec<Cell>, GridError> {
        let full = Span::up(1, self.grid.width());
        let span = match direction {
            Direction::Down | Direction::Right => full,
            Direction::Up | Direction::Left => full.reversed(),
        };

        if direction.is_vertical() {
            self.grid.column(span, vacant.col)
        } else {
            self.grid.row(vacant.row, span)
        }
    }
}

impl SlidingGame<RandomPermutation> {
    /// Puzzle with a seeded, always-solvable random start.
    pub fn random(config: &SlidingConfig, seed: u64) -> Result<Self, GridError> {
        let rng = GameRng::new(seed).for_context("shuffle");
        Self::new(config, RandomPermutation::new(rng))
    }
}

impl<P: PermutationSource> Game for SlidingGame<P> {
    /// Lay the permutation row-major into the grid, leaving the last cell
    /// vacant.
    #[instrument(skip(self))]
    fn initialize(&mut self) -> Result<(), GridError> {
        let tiles = self.source.initial_permutation(self.tile_count);
        if tiles.len() != self.tile_count {
            return Err(GridError::PermutationLength {
                expected: self.tile_count,
                actual: tiles.len(),
            });
        }

        let cells = self.grid.cells().to_vec();
        let mut values = tiles.into_iter().map(Some).chain(std::iter::repeat(None));
        for cell in cells {
            self.grid.set(cell, values.next().flatten())?;
        }
        debug!(tiles = self.tile_count, "laid out puzzle");
        Ok(())
    }

    fn can_move(&self) -> bool {
        true
    }

    /// Tiles read `1..=n` row-major with the vacant cell last.
    fn has_won(&self) -> bool {
        let values = self.grid.values_row_major();
        let Some((last, tiles)) = values.split_last() else {
            return false;
        };

        last.is_none()
            && tiles
                .iter()
                .zip(1u32..)
                .all(|(value, expected)| *value == Some(&expected))
    }

    /// Slide the tile on the far side of the vacant cell (opposite to
    /// `direction`) into it. At an edge with no such tile nothing happens.
    #[instrument(skip(self))]
    fn process_move(&mut self, direction: Direction) -> Result<(), GridError> {
        let vacant = self.vacant_cell()?;
        let line = self.line_through(vacant, direction)?;

        let Some(position) = line.iter().position(|&cell| cell == vacant) else {
            return Err(GridError::NoVacantCell);
        };
        let Some(&mover) = position.checked_sub(1).and_then(|i| line.get(i)) else {
            warn!(%direction, %vacant, "no tile to slide");
            return Ok(());
        };

        let value = self.grid.get(mover).copied();
        self.grid.set(vacant, value)?;
        self.grid.set(mover, None)?;
        debug!(%direction, from = %mover, to = %vacant, ?value, "slid tile");
        Ok(())
    }

    fn value_at(&self, row: i32, col: i32) -> Result<Option<u32>, GridError> {
        let cell = self.grid.cell(row, col)?;
        Ok(self.grid.get(cell).copied())
    }

    fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else {
            GameStatus::Active
        }
    }
}
