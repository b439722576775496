//! # Rover Types Module
//!
//! Core value types shared by the plateau, the rover and the renderer.
//!
//! ## Key Components
//!
//! - **Coordinates**: a cell on the plateau
//! - **Direction**: compass heading, also used as a movement vector selector
//! - **Command**: one instruction for the rover
//! - **Status**: outcome of the last move attempt
//!
//! Every enum maps to a one-letter symbol through `Display`, and the input
//! symbols convert back through `TryFrom<char>`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MarsRoverError;

/// A cell on the plateau. Both axes start at zero.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coordinates {
    pub x: usize,
    pub y: usize,
}

impl Coordinates {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass heading of the rover.
///
/// Cyclic order is North → East → South → West → North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Next heading clockwise.
    pub fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Next heading counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Direction {
    type Error = MarsRoverError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            _ => Err(MarsRoverError::UnknownDirection(symbol)),
        }
    }
}

impl From<Direction> for char {
    fn from(direction: Direction) -> Self {
        direction.symbol()
    }
}

/// Instruction accepted by the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Command {
    Backward,  // B - recule d'une case, cap inchangé
    Forward,   // F - avance d'une case
    TurnLeft,  // L - quart de tour anti-horaire
    TurnRight, // R - quart de tour horaire
}

impl Command {
    pub fn symbol(self) -> char {
        match self {
            Command::Backward => 'B',
            Command::Forward => 'F',
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Command {
    type Error = MarsRoverError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'B' => Ok(Command::Backward),
            'F' => Ok(Command::Forward),
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            _ => Err(MarsRoverError::UnknownCommand(symbol)),
        }
    }
}

impl From<Command> for char {
    fn from(command: Command) -> Self {
        command.symbol()
    }
}

/// Outcome of the last move attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Last move succeeded, or no move was attempted yet.
    #[default]
    Ok,
    /// Last move targeted an obstacle and was rejected.
    Blocked,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Blocked => write!(f, "NOK"),
        }
    }
}
