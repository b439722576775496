use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{MarsRoverError, Result};
use crate::map::Plateau;
use crate::types::{Command, Coordinates, Direction, Status};

/// A single rover on a shared, read-only plateau.
///
/// Turning and moving mutate the rover in place. A move into an obstacle is
/// rejected and recorded as [`Status::Blocked`]; once blocked, the rover
/// ignores every further command sequence.
#[derive(Clone, Debug)]
pub struct Rover {
    plateau: Arc<Plateau>,
    heading: Direction,
    position: Coordinates,
    status: Status,
}

impl Rover {
    /// Places the rover without checking the start cell.
    ///
    /// `position` must lie within the plateau bounds (debug-asserted). Use
    /// [`Rover::validated`] for untrusted input.
    pub fn new(plateau: Arc<Plateau>, heading: Direction, position: Coordinates) -> Self {
        debug_assert!(
            plateau.in_bounds(position),
            "start position {position} is outside the plateau"
        );
        Self {
            plateau,
            heading,
            position,
            status: Status::Ok,
        }
    }

    /// Places the rover, rejecting a start outside the bounds or on an obstacle.
    pub fn validated(
        plateau: Arc<Plateau>,
        heading: Direction,
        position: Coordinates,
    ) -> Result<Self> {
        if !plateau.in_bounds(position) {
            return Err(MarsRoverError::StartOutOfBounds {
                position,
                max_x: plateau.max_x(),
                max_y: plateau.max_y(),
            });
        }
        if plateau.contains_obstacle(position) {
            return Err(MarsRoverError::StartOnObstacle(position));
        }
        Ok(Self::new(plateau, heading, position))
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn coordinates(&self) -> Coordinates {
        self.position
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_blocked(&self) -> bool {
        self.status == Status::Blocked
    }

    /// Position and heading as `"<x> <y> <heading>"`, e.g. `"0 1 N"`.
    pub fn current_location(&self) -> String {
        format!("{} {} {}", self.position.x, self.position.y, self.heading)
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
        debug!(heading = %self.heading, "rover turned left");
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
        debug!(heading = %self.heading, "rover turned right");
    }

    /// Attempts one step along `direction`, wrapping at the plateau edges.
    pub fn move_towards(&mut self, direction: Direction) {
        let max_x = self.plateau.max_x();
        let max_y = self.plateau.max_y();
        let mut target = self.position;

        match direction {
            Direction::North => {
                target.y = if self.position.y == max_y { 0 } else { self.position.y + 1 };
            }
            Direction::South => {
                target.y = if self.position.y == 0 { max_y } else { self.position.y - 1 };
            }
            Direction::East => {
                target.x = if self.position.x == max_x { 0 } else { self.position.x + 1 };
            }
            Direction::West => {
                target.x = if self.position.x == 0 { max_x } else { self.position.x - 1 };
            }
        }

        if self.plateau.contains_obstacle(target) {
            // Le rover reste sur place
            self.status = Status::Blocked;
            info!(x = target.x, y = target.y, direction = %direction, "move blocked by obstacle");
            return;
        }

        self.position = target;
        self.status = Status::Ok;
        debug!(x = target.x, y = target.y, heading = %self.heading, "rover moved");
    }

    pub fn forward(&mut self) {
        self.move_towards(self.heading);
    }

    /// Steps to the rear; heading is unchanged.
    pub fn backward(&mut self) {
        self.move_towards(self.heading.opposite());
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Backward => self.backward(),
            Command::Forward => self.forward(),
            Command::TurnLeft => self.turn_left(),
            Command::TurnRight => self.turn_right(),
        }
    }

    /// Runs `commands` in order, stopping before the first command issued
    /// while blocked. Returns the number of commands executed.
    pub fn accept_commands(&mut self, commands: &[Command]) -> usize {
        let mut executed = 0;
        for &command in commands {
            if self.is_blocked() {
                debug!(executed, requested = commands.len(), "command processing halted");
                break;
            }
            self.execute(command);
            executed += 1;
        }
        executed
    }
}
