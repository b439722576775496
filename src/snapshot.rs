//! # Mission Snapshot Module
//!
//! Serializable projections of the plateau and rover state, for callers
//! that log, store or ship the outcome of a command sequence.
//!
//! ## Data Structures
//!
//! - [`PlateauData`]: bounds and obstacle cells
//! - [`RoverData`]: position, heading and status of the rover
//! - [`MissionState`]: both of the above plus the number of commands executed
//!
//! Snapshots are plain data: building one never mutates the rover.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::map::Plateau;
use crate::robot::Rover;
use crate::types::{Coordinates, Direction, Status};

/// Serializable view of a plateau.
///
/// # Examples
///
/// ```rust
/// use marsrover::{Coordinates, Plateau, create_plateau_data};
///
/// let plateau = Plateau::new(5, 5, [Coordinates::new(0, 2)]);
/// let data = create_plateau_data(&plateau);
/// assert_eq!(data.obstacles, vec![Coordinates::new(0, 2)]);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlateauData {
    /// Inclusive upper bound on x
    pub max_x: usize,

    /// Inclusive upper bound on y
    pub max_y: usize,

    /// Obstacle cells, sorted by x then y
    pub obstacles: Vec<Coordinates>,
}

/// Serializable view of the rover.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoverData {
    pub x: usize,
    pub y: usize,

    /// Heading, written as its symbol (`"N"`, `"E"`, `"S"`, `"W"`)
    pub heading: Direction,

    /// `Blocked` once a move was rejected by an obstacle
    pub status: Status,
}

/// Complete state after a command sequence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MissionState {
    pub plateau: PlateauData,
    pub rover: RoverData,

    /// Commands actually applied; lower than the sequence length when the
    /// rover was blocked part-way.
    pub commands_executed: usize,
}

impl MissionState {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }
}

pub fn create_plateau_data(plateau: &Plateau) -> PlateauData {
    PlateauData {
        max_x: plateau.max_x(),
        max_y: plateau.max_y(),
        obstacles: plateau.obstacles().collect(),
    }
}

pub fn create_rover_data(rover: &Rover) -> RoverData {
    let position = rover.coordinates();
    RoverData {
        x: position.x,
        y: position.y,
        heading: rover.heading(),
        status: rover.status(),
    }
}

/// Assemble l'état complet de la mission
pub fn create_mission_state(rover: &Rover, commands_executed: usize) -> MissionState {
    MissionState {
        plateau: create_plateau_data(rover.plateau()),
        rover: create_rover_data(rover),
        commands_executed,
    }
}
