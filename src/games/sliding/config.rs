//! Sliding puzzle configuration.

use serde::{Deserialize, Serialize};

/// Sliding puzzle parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingConfig {
    /// Side length of the square grid (default: 4, the 15-puzzle).
    pub width: i32,
}

impl Default for SlidingConfig {
    fn default() -> Self {
        Self { width: 4 }
    }
}

impl SlidingConfig {
    /// Set the grid width.
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    /// Number of tiles: every cell but the vacant one.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let width = self.width.max(0) as usize;
        (width * width).saturating_sub(1)
    }
}
