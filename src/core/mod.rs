//! Core grid types: cells, directions, geometry, valued grids, errors, RNG.
//!
//! This module knows nothing about any particular game. Games own a
//! [`ValuedGrid`] and drive it through point writes and line extraction.

pub mod cell;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod rng;

pub use cell::{Cell, Direction, Span};
pub use error::GridError;
pub use geometry::SquareGrid;
pub use grid::ValuedGrid;
pub use rng::GameRng;
