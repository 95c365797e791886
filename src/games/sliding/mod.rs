//! 15-puzzle-style sliding game.
//!
//! Tiles `1..=n` fill every cell but one. Each move slides the tile next to
//! the vacant cell into it. The puzzle is won when the tiles read in order
//! row-major with the vacant cell last.
//!
//! Only even starting permutations are solvable; [`RandomPermutation`]
//! guarantees one, other sources are trusted.

mod config;
mod game;
mod permutation;

pub use config::SlidingConfig;
pub use game::SlidingGame;
pub use permutation::{FixedPermutation, PermutationSource, RandomPermutation};
