pub mod ballistic;
pub mod history;
pub mod state;

pub use ballistic::Ballistic;
pub use history::{Sample, StateRecord, StateTable, COLUMNS};
pub use state::{SimConfig, State};

use crate::error::Result;

/// Anything the simulation clock can advance.
///
/// Implement this to plug a new kind of body into
/// [`SimClock`](crate::sim::SimClock).
pub trait Dynamics {
    /// Advance internal state by `dt` seconds and record the result at
    /// simulation time `time`.
    fn update(&mut self, dt: f64, time: f64) -> Result<()>;

    /// Current height above the ground plane (m).
    fn altitude(&self) -> f64;
}
