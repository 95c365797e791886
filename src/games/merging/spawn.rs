//! Tile-spawn policies for the merging game.
//!
//! A spawner looks at the grid and proposes one `(cell, value)` to place,
//! or `None` when there is nowhere to put it. The game writes the tile;
//! the spawner never mutates the grid itself. A proposed cell that is off
//! the grid or already occupied fails the whole call.
//!
//! Any closure `FnMut(&ValuedGrid<u32>) -> Option<(Cell, u32)>` is a
//! spawner, which makes scripted spawns in tests a one-liner.

use tracing::trace;

use crate::core::{Cell, GameRng, ValuedGrid};

/// Source of new tiles.
pub trait TileSpawner {
    /// Propose the next tile, or `None` to skip spawning.
    fn next_value(&mut self, grid: &ValuedGrid<u32>) -> Option<(Cell, u32)>;
}

impl<F> TileSpawner for F
where
    F: FnMut(&ValuedGrid<u32>) -> Option<(Cell, u32)>,
{
    fn next_value(&mut self, grid: &ValuedGrid<u32>) -> Option<(Cell, u32)> {
        self(grid)
    }
}

/// Spawns a 2 (or, with some probability, a 4) on a uniformly random
/// empty cell.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: GameRng,
    four_probability: f64,
}

impl RandomTileSpawner {
    /// Create a spawner drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng, four_probability: f64) -> Self {
        Self { rng, four_probability }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn next_value(&mut self, grid: &ValuedGrid<u32>) -> Option<(Cell, u32)> {
        let empty = grid.filter(|v| v.is_none());
        let cell = *self.rng.choose(&empty)?;
        let value = if self.rng.gen_bool(self.four_probability) { 4 } else { 2 };
        trace!(%cell, value, "proposed tile");
        Some((cell, value))
    }
}
