//! 2048-style merging game.

use tracing::{debug, instrument, trace};

use crate::algo::{move_and_merge, pad_line};
use crate::core::{Cell, Direction, GameRng, GridError, ValuedGrid};
use crate::games::{Game, GameStatus};

use super::{MergingConfig, RandomTileSpawner, TileSpawner};

/// Merging game state: a grid of power-of-two tiles plus a spawn policy.
pub struct MergingGame<S> {
    grid: ValuedGrid<u32>,
    spawner: S,
    winning_value: u32,
    status: GameStatus,
}

impl<S: TileSpawner> MergingGame<S> {
    /// Create an empty game. Call [`Game::initialize`] to place the
    /// starting tiles.
    pub fn new(config: &MergingConfig, spawner: S) -> Result<Self, GridError> {
        Ok(Self {
            grid: ValuedGrid::new(config.width)?,
            spawner,
            winning_value: config.winning_value,
            status: GameStatus::Active,
        })
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &ValuedGrid<u32> {
        &self.grid
    }

    /// Ask the spawner for one tile and place it on `grid`.
    ///
    /// The proposed cell must be on the grid and empty. Returns the placed
    /// tile, or `None` if the spawner declined.
    fn add_new_value(
        spawner: &mut S,
        grid: &mut ValuedGrid<u32>,
    ) -> Result<Option<(Cell, u32)>, GridError> {
        let Some((cell, value)) = spawner.next_value(grid) else {
            debug!("spawner produced no tile");
            return Ok(None);
        };
        if grid.geometry().index_of(cell).is_none() {
            return Err(GridError::UnknownCell(cell));
        }
        if grid.get(cell).is_some() {
            return Err(GridError::OccupiedCell(cell));
        }
        grid.set(cell, Some(value))?;
        debug!(%cell, value, "spawned tile");
        Ok(Some((cell, value)))
    }

    /// Compact and merge one line toward its front.
    ///
    /// Returns whether any cell of the line changed.
    fn move_line(grid: &mut ValuedGrid<u32>, line: &[Cell]) -> Result<bool, GridError> {
        let current: Vec<Option<u32>> = grid
            .values_along(line)
            .into_iter()
            .map(Option::<&u32>::copied)
            .collect();
        let moved = pad_line(move_and_merge(&current, |v| v * 2), line.len());

        if moved == current {
            return Ok(false);
        }

        trace!(?current, ?moved, "line changed");
        for (&cell, value) in line.iter().zip(moved) {
            grid.set(cell, value)?;
        }
        Ok(true)
    }

    /// Move every line of `grid` toward `direction`. Returns whether
    /// anything moved.
    fn move_values(grid: &mut ValuedGrid<u32>, direction: Direction) -> Result<bool, GridError> {
        let lines = grid.geometry().lines_toward(direction)?;
        let mut changed = false;
        for line in &lines {
            changed |= Self::move_line(grid, line)?;
        }
        Ok(changed)
    }
}

impl MergingGame<RandomTileSpawner> {
    /// Game with a seeded random spawner.
    pub fn random(config: &MergingConfig, seed: u64) -> Result<Self, GridError> {
        let rng = GameRng::new(seed).for_context("spawn");
        let spawner = RandomTileSpawner::new(rng, config.four_probability);
        Self::new(config, spawner)
    }
}

impl<S: TileSpawner> Game for MergingGame<S> {
    #[instrument(skip(self))]
    fn initialize(&mut self) -> Result<(), GridError> {
        let mut staged = self.grid.clone();
        for _ in 0..2 {
            Self::add_new_value(&mut self.spawner, &mut staged)?;
        }
        self.grid = staged;
        Ok(())
    }

    /// Coarse liveness: any empty cell. A full grid that could still merge
    /// reports `false`.
    fn can_move(&self) -> bool {
        self.grid.any(|v| v.is_none())
    }

    fn has_won(&self) -> bool {
        let target = self.winning_value;
        self.grid.any(|v| v == Some(&target))
    }

    #[instrument(skip(self))]
    fn process_move(&mut self, direction: Direction) -> Result<(), GridError> {
        // Stage on a copy; commit only once the spawn is accepted.
        let mut staged = self.grid.clone();
        let changed = Self::move_values(&mut staged, direction)?;
        if changed {
            Self::add_new_value(&mut self.spawner, &mut staged)?;
        } else {
            debug!(%direction, "move changed nothing");
        }
        self.grid = staged;

        self.status = if self.status == GameStatus::Won || self.has_won() {
            GameStatus::Won
        } else if !changed && !self.can_move() {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };
        Ok(())
    }

    fn value_at(&self, row: i32, col: i32) -> Result<Option<u32>, GridError> {
        let cell = self.grid.cell(row, col)?;
        Ok(self.grid.get(cell).copied())
    }

    fn status(&self) -> GameStatus {
        self.status
    }
}
