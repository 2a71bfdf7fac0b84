use log::{debug, trace};

use crate::dynamics::{Ballistic, Dynamics};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Fixed-timestep simulation clock
// ---------------------------------------------------------------------------

/// Owns simulation time and the ordered set of bodies fired on every tick.
///
/// The clock only triggers updates; each body keeps its own state and
/// history. There is no stop condition here, the caller decides when to quit.
#[derive(Debug)]
pub struct SimClock<M = Ballistic> {
    timestep: f64,
    steps: usize,
    bodies: Vec<(String, M)>,
}

impl<M: Dynamics> SimClock<M> {
    /// Create a clock at `t = 0`. The timestep must be finite and positive.
    pub fn new(timestep: f64) -> Result<Self> {
        if !timestep.is_finite() || timestep <= 0.0 {
            return Err(Error::InvalidTimestep(timestep));
        }
        Ok(Self { timestep, steps: 0, bodies: Vec::new() })
    }

    /// Register a body to be updated on every tick, after those already
    /// registered. Names must be unique.
    pub fn register(&mut self, name: impl Into<String>, body: M) -> Result<()> {
        let name = name.into();
        if self.bodies.iter().any(|(n, _)| *n == name) {
            return Err(Error::DuplicateName(name));
        }
        debug!("registered '{}' on timestep event", name);
        self.bodies.push((name, body));
        Ok(())
    }

    /// Unregister a body and hand it back.
    pub fn remove(&mut self, name: &str) -> Result<M> {
        let idx = self
            .bodies
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| Error::UnknownName(name.to_string()))?;
        debug!("removed '{}' from timestep event", name);
        Ok(self.bodies.remove(idx).1)
    }

    /// Advance time by one timestep, then update every body in registration
    /// order. The first failing body aborts the tick.
    pub fn advance(&mut self) -> Result<()> {
        self.steps += 1;
        let time = self.time();
        trace!("Timestep: {}, Time: {} sec", self.timestep, time);

        for (_, body) in self.bodies.iter_mut() {
            body.update(self.timestep, time)?;
        }
        Ok(())
    }

    /// Elapsed time, `steps · timestep`. Computed rather than accumulated
    /// so it lands exactly on multiples of the timestep.
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.timestep
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Number of completed `advance` calls.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Registered names, in update order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|(n, _)| n.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&M> {
        self.bodies.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }

    /// Registered bodies with their names, in update order.
    pub fn bodies(&self) -> impl Iterator<Item = (&str, &M)> {
        self.bodies.iter().map(|(n, b)| (n.as_str(), b))
    }

    /// Consume the clock, returning the bodies in registration order.
    pub fn into_bodies(self) -> Vec<(String, M)> {
        self.bodies
    }
}
