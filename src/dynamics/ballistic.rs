use log::trace;

use super::history::{Sample, StateTable};
use super::state::State;
use super::Dynamics;
use crate::error::{Error, Result};
use crate::frame::Vector3;

// ---------------------------------------------------------------------------
// Ballistic point mass
// ---------------------------------------------------------------------------

/// Point mass under constant gravity. No drag, no wind, no other forces.
///
/// Keeps every computed state, starting with the `t = 0` state it was built
/// with. The body does not detect ground contact: it keeps integrating below
/// the ground plane if asked.
#[derive(Debug, Clone)]
pub struct Ballistic {
    state: State,
    gravity: Vector3,
    time: f64,
    states: Vec<Sample>,
}

impl Ballistic {
    /// Build a body whose acceleration is the given gravity vector.
    pub fn new(position: Vector3, velocity: Vector3, gravity: Vector3) -> Self {
        Self::from_state(State::new(position, velocity, gravity))
    }

    /// Build a body from a full initial state; its acceleration is taken as
    /// the constant gravity for the whole run.
    pub fn from_state(initial: State) -> Self {
        Self {
            state: initial,
            gravity: initial.acceleration(),
            time: 0.0,
            states: vec![Sample { time: 0.0, state: initial }],
        }
    }

    /// Advance by `dt` seconds with constant-acceleration kinematics:
    ///
    ///   v' = v + a·dt
    ///   p' = p + v·dt + ½·a·dt²
    ///
    /// Negative or non-finite `dt` is rejected and leaves the body untouched.
    pub fn update(&mut self, dt: f64) -> Result<()> {
        self.update_at(dt, self.time + dt)
    }

    /// Same as [`update`](Self::update), but stamps the new sample with an
    /// externally kept `time` (the clock's) instead of accumulating `dt`.
    /// `time` must be finite and not earlier than the latest sample.
    pub fn update_at(&mut self, dt: f64, time: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::InvalidTimestep(dt));
        }
        if !time.is_finite() || time < self.time {
            return Err(Error::InvalidParam(format!(
                "sample time {} precedes t={}",
                time, self.time
            )));
        }

        let a = self.gravity;
        let p = self.state.position();
        let v = self.state.velocity();

        let next = State::new(p + v * dt + a * (0.5 * dt * dt), v + a * dt, a);

        self.time = time;
        self.state = next;
        self.states.push(Sample { time: self.time, state: next });

        trace!("t={:.4}s {}", self.time, next);
        Ok(())
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Elapsed time of the latest recorded state.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn gravity(&self) -> Vector3 {
        self.gravity
    }

    /// Every recorded sample, oldest first.
    pub fn states(&self) -> &[Sample] {
        &self.states
    }

    /// History as a flat labeled table.
    pub fn table(&self) -> StateTable {
        StateTable::from_samples(&self.states)
    }
}

impl Dynamics for Ballistic {
    fn update(&mut self, dt: f64, time: f64) -> Result<()> {
        self.update_at(dt, time)
    }

    fn altitude(&self) -> f64 {
        self.state.altitude()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
