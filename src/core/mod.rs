//! Core types for the maze grid.
//!
//! - [`CellCoord`]: integer grid coordinates with direction stepping
//! - [`Cell`] and [`Walls`]: grid cell with four wall flags
//! - [`Direction`]: the four cardinal directions

mod cell;
mod coord;

pub use cell::{Cell, Direction, Walls};
pub use coord::CellCoord;
