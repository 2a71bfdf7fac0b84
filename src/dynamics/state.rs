use std::fmt;

use crate::error::{Error, Result};
use crate::frame::Vector3;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Downward gravity used by the golf ball demo (m/s^2).
pub const DEMO_GRAVITY: f64 = 9.8;

/// Gravity vector of magnitude `g` pointing down the Up axis.
pub fn gravity(g: f64) -> Vector3 {
    Vector3::new(0.0, 0.0, -g)
}

// ---------------------------------------------------------------------------
// Kinematic state
// ---------------------------------------------------------------------------

/// Kinematic state of a point mass at a single instant.
/// All three vectors share the ENU frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    position: Vector3,     // m
    velocity: Vector3,     // m/s
    acceleration: Vector3, // m/s^2
}

impl State {
    pub fn new(position: Vector3, velocity: Vector3, acceleration: Vector3) -> Self {
        Self { position, velocity, acceleration }
    }

    /// State with zero velocity.
    pub fn at_rest(position: Vector3, acceleration: Vector3) -> Self {
        Self::new(position, Vector3::zeros(), acceleration)
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector3 {
        self.acceleration
    }

    /// Height above the ground plane (Up component of position).
    pub fn altitude(&self) -> f64 {
        self.position.z()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos={} vel={} acc={}",
            self.position, self.velocity, self.acceleration
        )
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // clock timestep, s
    pub max_time: f64, // hard stop, s
}

impl SimConfig {
    /// Reject timesteps the clock cannot advance with and unusable stop times.
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::InvalidTimestep(self.dt));
        }
        if !self.max_time.is_finite() || self.max_time < 0.0 {
            return Err(Error::InvalidParam(format!(
                "max_time must be finite and >= 0, got {}",
                self.max_time
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,         // 100 Hz
            max_time: 100.0,
        }
    }
}
