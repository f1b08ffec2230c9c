//! Spatial and clock primitives shared by every crate in the workspace.

use serde::{Deserialize, Serialize};

/// 3D position in world space (world units, Cartesian).
/// x = East, y = North, z = Up (altitude above ground level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in world space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Fixed-step simulation clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Ticks completed since the world was created.
    pub tick: u64,
    /// Simulated seconds elapsed.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared horizontal distance from the world origin. Squared so the
    /// per-tick bounds check can compare against a squared radius.
    pub fn horizontal_range_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A zero velocity (dead stop).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl SimTime {
    /// Advance by one fixed tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += crate::constants::DT;
    }
}
