//! Puzzle games built on [`ValuedGrid`](crate::core::ValuedGrid).
//!
//! Both games expose the same [`Game`] facade so a single driving loop can
//! play either one:
//!
//! 1. `initialize()` once
//! 2. repeatedly `process_move(direction)`
//! 3. re-query `has_won()` / `can_move()` (or `status()`) after each move

pub mod merging;
pub mod sliding;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Direction, GridError};

/// Where a game currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being played.
    Active,
    /// The winning condition was reached.
    Won,
    /// No further progress is possible.
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Facade shared by every grid puzzle.
pub trait Game {
    /// Place the starting tiles.
    fn initialize(&mut self) -> Result<(), GridError>;

    /// Whether the game still offers a move.
    fn can_move(&self) -> bool;

    /// Whether the winning condition holds right now.
    fn has_won(&self) -> bool;

    /// Apply one move. A failed move leaves the grid unchanged.
    fn process_move(&mut self, direction: Direction) -> Result<(), GridError>;

    /// Value at `(row, col)`; fails for coordinates off the grid.
    fn value_at(&self, row: i32, col: i32) -> Result<Option<u32>, GridError>;

    /// Current position in the game's state machine.
    fn status(&self) -> GameStatus;
}

/// Apply `moves` in order, stopping early once the game is terminal.
///
/// Returns the status after the last applied move.
#[instrument(skip(game, moves))]
pub fn run_moves<G, I>(game: &mut G, moves: I) -> Result<GameStatus, GridError>
where
    G: Game + ?Sized,
    I: IntoIterator<Item = Direction>,
{
    for direction in moves {
        if game.status().is_terminal() {
            break;
        }
        game.process_move(direction)?;
    }
    Ok(game.status())
}

pub use merging::{MergingConfig, MergingGame, RandomTileSpawner, TileSpawner};
pub use sliding::{FixedPermutation, PermutationSource, RandomPermutation, SlidingConfig, SlidingGame};
