//! Error types for vyuha-maze

use crate::core::CellCoord;
use thiserror::Error;

/// Crate error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Width or height of zero at construction
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// Coordinate access outside [0, width) x [0, height).
    /// Always an explicit failure, never a silent clamp.
    #[error("coordinate {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: CellCoord,
        width: usize,
        height: usize,
    },

    /// The search frontier emptied before the goal was reached.
    /// No path reconstruction is attempted in this case.
    #[error("no path exists between {from} and {to}")]
    NoPath { from: CellCoord, to: CellCoord },

    /// The search expanded more nodes than its configured budget
    #[error("search expanded {expanded} nodes without reaching the goal")]
    IterationLimit { expanded: usize },

    /// Configuration error: invalid values, YAML parse or I/O failure
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for MazeError {
    fn from(e: serde_yaml::Error) -> Self {
        MazeError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
