//! Line algorithms shared by the games.
//!
//! - `merge`: compaction with merging of equal neighbors (merging game moves)
//! - `parity`: inversion-count parity of permutations (sliding puzzle starts)

pub mod merge;
pub mod parity;

pub use merge::{move_and_merge, pad_line};
pub use parity::{inversions, is_even, make_even};
