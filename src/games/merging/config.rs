//! Merging game configuration.

use serde::{Deserialize, Serialize};

/// Merging game parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergingConfig {
    /// Side length of the square grid (default: 4).
    pub width: i32,

    /// Tile value that wins the game (default: 2048).
    pub winning_value: u32,

    /// Chance that a spawned tile is a 4 rather than a 2 (default: 0.1).
    /// Only used by [`RandomTileSpawner`](super::RandomTileSpawner).
    pub four_probability: f64,
}

impl Default for MergingConfig {
    fn default() -> Self {
        Self {
            width: 4,
            winning_value: 2048,
            four_probability: 0.1,
        }
    }
}

impl MergingConfig {
    /// Set the grid width.
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    /// Set the winning tile value.
    pub fn with_winning_value(mut self, value: u32) -> Self {
        self.winning_value = value;
        self
    }

    /// Set the probability of spawning a 4.
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }
}
