//! # grid-puzzles
//!
//! A square-grid engine and two puzzle games built on it: a 2048-style
//! merging game and a 15-puzzle-style sliding game.
//!
//! ## Design Principles
//!
//! 1. **Composition**: Each game owns one `ValuedGrid`. Geometry questions
//!    (neighbors, rows, columns) are answered by `SquareGrid` and never by
//!    the games themselves.
//!
//! 2. **Injected Randomness**: Tile spawning and puzzle shuffling are
//!    collaborators passed in at construction. With a scripted collaborator
//!    every game is fully deterministic.
//!
//! 3. **One Facade**: Both games implement `Game`, so one driving loop can
//!    play either.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, spans, geometry, valued grids, errors, RNG
//! - `algo`: Compaction-with-merge and permutation parity
//! - `games`: The `Game` facade, the merging game, the sliding game
//!
//! ```
//! use grid_puzzles::{Direction, Game, GameStatus, SlidingConfig, SlidingGame};
//! use grid_puzzles::games::FixedPermutation;
//!
//! let config = SlidingConfig::default();
//! let mut game = SlidingGame::new(&config, FixedPermutation::solved(15)).unwrap();
//! game.initialize().unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//!
//! game.process_move(Direction::Down).unwrap();
//! assert!(!game.has_won());
//! ```

pub mod algo;
pub mod core;
pub mod games;

// Re-export commonly used types
pub use crate::core::{Cell, Direction, GameRng, GridError, Span, SquareGrid, ValuedGrid};

pub use crate::algo::{inversions, is_even, make_even, move_and_merge, pad_line};

pub use crate::games::{
    run_moves, Game, GameStatus,
    MergingConfig, MergingGame, RandomTileSpawner, TileSpawner,
    FixedPermutation, PermutationSource, RandomPermutation, SlidingConfig, SlidingGame,
};
