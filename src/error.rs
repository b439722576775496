//! Error types for mission construction.
//!
//! Moves never fail: a rejected move is recorded as [`Status::Blocked`] on the
//! rover. These errors only cover invalid configuration and unknown symbols.
//!
//! [`Status::Blocked`]: crate::types::Status::Blocked

use thiserror::Error;

use crate::types::Coordinates;

/// Errors raised while building a plateau or a rover.
#[derive(Debug, Error)]
pub enum MarsRoverError {
    /// An obstacle lies outside the inclusive plateau bounds.
    #[error("obstacle {obstacle} is outside the plateau bounds (0..={max_x}, 0..={max_y})")]
    ObstacleOutOfBounds {
        obstacle: Coordinates,
        max_x: usize,
        max_y: usize,
    },

    /// The rover start position lies outside the inclusive plateau bounds.
    #[error("start position {position} is outside the plateau bounds (0..={max_x}, 0..={max_y})")]
    StartOutOfBounds {
        position: Coordinates,
        max_x: usize,
        max_y: usize,
    },

    /// The rover would start on an obstacle cell.
    #[error("start position {0} is occupied by an obstacle")]
    StartOnObstacle(Coordinates),

    #[error("unknown command symbol '{0}'")]
    UnknownCommand(char),

    #[error("unknown direction symbol '{0}'")]
    UnknownDirection(char),

    /// Malformed configuration or snapshot document.
    #[error("invalid mission document: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for mission construction.
pub type Result<T> = std::result::Result<T, MarsRoverError>;
