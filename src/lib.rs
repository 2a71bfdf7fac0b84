pub mod dynamics;
pub mod error;
pub mod frame;
pub mod io;
pub mod sim;

pub use dynamics::{Ballistic, Dynamics, SimConfig, State};
pub use error::{Error, Result};
pub use frame::Vector3;
pub use sim::{run, simulate, SimClock};
