pub mod clock;
pub mod event;
pub mod runner;

pub use clock::SimClock;
pub use runner::{presets, run, simulate, Outcome, Run};
