//! Initial permutations for the sliding puzzle.
//!
//! Sources hand out `len` distinct tiles `1..=len` in the order they are
//! laid onto the grid. The game does not check parity: an odd permutation
//! gives a valid but unsolvable puzzle.

use tracing::debug;

use crate::algo::{is_even, make_even};
use crate::core::GameRng;

/// Source of the starting tile order.
pub trait PermutationSource {
    /// Tiles `1..=len` in row-major placement order.
    fn initial_permutation(&mut self, len: usize) -> Vec<u32>;
}

impl<F> PermutationSource for F
where
    F: FnMut(usize) -> Vec<u32>,
{
    fn initial_permutation(&mut self, len: usize) -> Vec<u32> {
        self(len)
    }
}

/// Shuffled start, repaired to even parity so the puzzle is solvable.
#[derive(Clone, Debug)]
pub struct RandomPermutation {
    rng: GameRng,
}

impl RandomPermutation {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl PermutationSource for RandomPermutation {
    fn initial_permutation(&mut self, len: usize) -> Vec<u32> {
        let mut tiles: Vec<u32> = (1..=len as u32).collect();
        self.rng.shuffle(&mut tiles);
        if make_even(&mut tiles) {
            debug!("swapped one pair to make the permutation even");
        }
        debug_assert!(is_even(&tiles));
        tiles
    }
}

/// Replays a caller-supplied permutation, ignoring the requested length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPermutation(pub Vec<u32>);

impl FixedPermutation {
    /// The solved order `1..=len`.
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self((1..=len as u32).collect())
    }
}

impl PermutationSource for FixedPermutation {
    fn initial_permutation(&mut self, _len: usize) -> Vec<u32> {
        self.0.clone()
    }
}
