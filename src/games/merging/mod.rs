//! 2048-style merging game.
//!
//! Tiles slide toward the edge named by the move, equal neighbors merge
//! into their double, and every move that changes the grid spawns one new
//! tile. The game is won once a tile reaches the winning value and reports
//! no move once the grid has no empty cell.

mod config;
mod game;
mod spawn;

pub use config::MergingConfig;
pub use game::MergingGame;
pub use spawn::{RandomTileSpawner, TileSpawner};
