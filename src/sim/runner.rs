use log::{debug, info};

use super::clock::SimClock;
use crate::dynamics::state::SimConfig;
use crate::dynamics::{Ballistic, Dynamics};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Run outcome
// ---------------------------------------------------------------------------

/// Why the driver loop stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Simulation time reached `max_time` with every body still airborne.
    MaxTime,
    /// The named body (first in registration order) reached altitude <= 0.
    GroundContact { name: String },
}

/// Bodies returned by a finished run, in registration order.
#[derive(Debug)]
pub struct Run<M = Ballistic> {
    pub bodies: Vec<(String, M)>,
    pub outcome: Outcome,
    pub steps: usize,
    pub time: f64,
}

impl<M> Run<M> {
    pub fn get(&self, name: &str) -> Option<&M> {
        self.bodies.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }
}

// ---------------------------------------------------------------------------
// Driver loop
// ---------------------------------------------------------------------------

/// First body (in registration order) at or below the ground plane.
fn grounded<M: Dynamics>(clock: &SimClock<M>) -> Option<String> {
    clock
        .bodies()
        .find(|(_, b)| b.altitude() <= 0.0)
        .map(|(n, _)| n.to_string())
}

/// Register the given bodies on a fresh clock and advance until
/// `max_time` is reached or any body touches the ground.
pub fn simulate<M: Dynamics>(config: &SimConfig, bodies: Vec<(String, M)>) -> Result<Run<M>> {
    config.validate()?;

    let mut clock = SimClock::new(config.dt)?;
    for (name, body) in bodies {
        clock.register(name, body)?;
    }
    info!(
        "simulating {} bodies, dt={} s, max_time={} s",
        clock.len(),
        config.dt,
        config.max_time
    );

    let outcome = loop {
        if let Some(name) = grounded(&clock) {
            break Outcome::GroundContact { name };
        }
        if clock.time() >= config.max_time {
            break Outcome::MaxTime;
        }
        clock.advance()?;
    };

    match &outcome {
        Outcome::MaxTime => info!("stopped at max time t={:.2} s", clock.time()),
        Outcome::GroundContact { name } => {
            info!("'{}' reached the ground at t={:.2} s", name, clock.time())
        }
    }
    debug!("{} steps", clock.steps());

    let steps = clock.steps();
    let time = clock.time();
    Ok(Run { bodies: clock.into_bodies(), outcome, steps, time })
}

/// Run the two-golf-ball demo and return both balls.
pub fn run(config: &SimConfig) -> Result<(Ballistic, Ballistic)> {
    let result = simulate(config, presets::golf_balls())?;
    let mut balls = result.bodies.into_iter().map(|(_, b)| b);
    let one = balls.next().ok_or_else(|| Error::UnknownName("golf_ball_one".into()))?;
    let two = balls.next().ok_or_else(|| Error::UnknownName("golf_ball_two".into()))?;
    Ok((one, two))
}

// ---------------------------------------------------------------------------
// Preset bodies
// ---------------------------------------------------------------------------

pub mod presets {
    use crate::dynamics::state::{gravity, DEMO_GRAVITY};
    use crate::dynamics::Ballistic;
    use crate::frame::Vector3;

    /// Hit from a 15 m tee, climbing slightly.
    pub fn golf_ball_one() -> Ballistic {
        Ballistic::new(
            Vector3::new(0.0, 0.0, 15.0),
            Vector3::new(10.0, 10.0, 1.0),
            gravity(DEMO_GRAVITY),
        )
    }

    /// Thrown level from a 100 m cliff.
    pub fn golf_ball_two() -> Ballistic {
        Ballistic::new(
            Vector3::new(-100.0, 100.0, 100.0),
            Vector3::new(-12.5, 10.0, 0.0),
            gravity(DEMO_GRAVITY),
        )
    }

    /// Both demo balls, named, in registration order.
    pub fn golf_balls() -> Vec<(String, Ballistic)> {
        vec![
            ("golf_ball_one".into(), golf_ball_one()),
            ("golf_ball_two".into(), golf_ball_two()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
