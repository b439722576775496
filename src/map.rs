use std::collections::BTreeSet;

use noise::{NoiseFn, Perlin};
use rand::prelude::*;
use tracing::info;

use crate::error::{MarsRoverError, Result};
use crate::types::Coordinates;

/// Noise value above which a generated cell becomes an obstacle.
pub const OBSTACLE_THRESHOLD: f64 = 0.5;

/// Rectangular wrap-around plateau.
///
/// `max_x` and `max_y` are inclusive, so the plateau spans
/// `[0, max_x] × [0, max_y]`. Obstacles are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plateau {
    max_x: usize,
    max_y: usize,
    obstacles: BTreeSet<Coordinates>,
}

impl Plateau {
    /// Builds a plateau without checking that obstacles lie within bounds.
    pub fn new(max_x: usize, max_y: usize, obstacles: impl IntoIterator<Item = Coordinates>) -> Self {
        Self {
            max_x,
            max_y,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Builds a plateau, rejecting obstacles outside the bounds.
    pub fn validated(
        max_x: usize,
        max_y: usize,
        obstacles: impl IntoIterator<Item = Coordinates>,
    ) -> Result<Self> {
        let plateau = Self::new(max_x, max_y, obstacles);
        if let Some(&obstacle) = plateau.obstacles.iter().find(|o| !plateau.in_bounds(**o)) {
            return Err(MarsRoverError::ObstacleOutOfBounds {
                obstacle,
                max_x,
                max_y,
            });
        }
        Ok(plateau)
    }

    /// Procedural plateau with a random seed. `keep_clear` never holds an obstacle.
    pub fn generate(max_x: usize, max_y: usize, keep_clear: Coordinates) -> Self {
        let seed: u32 = rand::thread_rng().r#gen();
        Self::generate_with_seed(max_x, max_y, keep_clear, seed)
    }

    /// Deterministic procedural plateau: Perlin noise over normalized
    /// coordinates, thresholded at [`OBSTACLE_THRESHOLD`].
    pub fn generate_with_seed(
        max_x: usize,
        max_y: usize,
        keep_clear: Coordinates,
        seed: u32,
    ) -> Self {
        let perlin = Perlin::new(seed);
        let width = (max_x + 1) as f64;
        let height = (max_y + 1) as f64;

        let mut obstacles = BTreeSet::new();
        for y in 0..=max_y {
            for x in 0..=max_x {
                let nx = x as f64 / width;
                let ny = y as f64 / height;
                let value = perlin.get([nx * 4.0, ny * 4.0]);

                let cell = Coordinates::new(x, y);
                if value > OBSTACLE_THRESHOLD && cell != keep_clear {
                    obstacles.insert(cell);
                }
            }
        }

        info!(max_x, max_y, seed, obstacles = obstacles.len(), "plateau generated");

        Self {
            max_x,
            max_y,
            obstacles,
        }
    }

    pub fn max_x(&self) -> usize {
        self.max_x
    }

    pub fn max_y(&self) -> usize {
        self.max_y
    }

    /// True iff an obstacle sits exactly on `position`.
    pub fn contains_obstacle(&self, position: Coordinates) -> bool {
        self.obstacles.contains(&position)
    }

    /// True iff `position` is a valid cell (inclusive bounds).
    pub fn in_bounds(&self, position: Coordinates) -> bool {
        position.x <= self.max_x && position.y <= self.max_y
    }

    /// Obstacles in (x, y) order.
    pub fn obstacles(&self) -> impl Iterator<Item = Coordinates> + '_ {
        self.obstacles.iter().copied()
    }
}
