//! # Mission configuration
//!
//! Serializable description of a plateau and a rover start. Parsing a
//! document and building from it are separate steps, so callers can
//! construct a [`MissionConfig`] in code as well.
//!
//! ```json
//! {
//!   "plateau": { "max_x": 5, "max_y": 5, "obstacles": [{ "x": 0, "y": 2 }] },
//!   "rover": { "x": 0, "y": 0, "heading": "N" }
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::map::Plateau;
use crate::robot::Rover;
use crate::types::{Coordinates, Direction};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateauConfig {
    pub max_x: usize,
    pub max_y: usize,
    #[serde(default)]
    pub obstacles: Vec<Coordinates>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverConfig {
    pub x: usize,
    pub y: usize,
    pub heading: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionConfig {
    pub plateau: PlateauConfig,
    pub rover: RoverConfig,
}

impl MissionConfig {
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates bounds and builds the rover on a fresh plateau.
    pub fn build(&self) -> Result<Rover> {
        let plateau = Plateau::validated(
            self.plateau.max_x,
            self.plateau.max_y,
            self.plateau.obstacles.iter().copied(),
        )?;

        let start = Coordinates::new(self.rover.x, self.rover.y);
        Rover::validated(Arc::new(plateau), self.rover.heading, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarsRoverError;

    fn config(obstacles: Vec<Coordinates>, x: usize, y: usize) -> MissionConfig {
        MissionConfig {
            plateau: PlateauConfig {
                max_x: 5,
                max_y: 5,
                obstacles,
            },
            rover: RoverConfig {
                x,
                y,
                heading: Direction::North,
            },
        }
    }

    #[test]
    fn test_from_json() {
        let document = r#"{
            "plateau": { "max_x": 5, "max_y": 5, "obstacles": [{ "x": 0, "y": 2 }] },
            "rover": { "x": 0, "y": 0, "heading": "N" }
        }"#;
        let parsed = MissionConfig::from_json(document).unwrap();
        assert_eq!(parsed, config(vec![Coordinates::new(0, 2)], 0, 0));
    }

    #[test]
    fn test_obstacles_default_to_empty() {
        let document = r#"{
            "plateau": { "max_x": 3, "max_y": 3 },
            "rover": { "x": 1, "y": 1, "heading": "e" }
        }"#;
        let parsed = MissionConfig::from_json(document).unwrap();
        assert!(parsed.plateau.obstacles.is_empty());
        assert_eq!(parsed.rover.heading, Direction::East);
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            MissionConfig::from_json("{"),
            Err(MarsRoverError::Config(_))
        ));

        let bad_heading = r#"{
            "plateau": { "max_x": 3, "max_y": 3 },
            "rover": { "x": 1, "y": 1, "heading": "Q" }
        }"#;
        assert!(MissionConfig::from_json(bad_heading).is_err());

        let negative = r#"{
            "plateau": { "max_x": -1, "max_y": 3 },
            "rover": { "x": 0, "y": 0, "heading": "N" }
        }"#;
        assert!(MissionConfig::from_json(negative).is_err());
    }

    #[test]
    fn test_build() {
        let rover = config(vec![Coordinates::new(0, 2)], 0, 0).build().unwrap();
        assert_eq!(rover.coordinates(), Coordinates::new(0, 0));
        assert_eq!(rover.heading(), Direction::North);
        assert!(rover.plateau().contains_obstacle(Coordinates::new(0, 2)));
    }

    #[test]
    fn test_build_rejects_invalid_start() {
        assert!(matches!(
            config(vec![], 6, 0).build(),
            Err(MarsRoverError::StartOutOfBounds { .. })
        ));
        assert!(matches!(
            config(vec![Coordinates::new(1, 1)], 1, 1).build(),
            Err(MarsRoverError::StartOnObstacle(_))
        ));
        assert!(matches!(
            config(vec![Coordinates::new(9, 9)], 0, 0).build(),
            Err(MarsRoverError::ObstacleOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let original = config(vec![Coordinates::new(3, 4)], 2, 2);
        let json = original.to_json().unwrap();
        assert_eq!(MissionConfig::from_json(&json).unwrap(), original);
    }
}
