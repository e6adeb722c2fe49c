pub mod cell;
pub mod config;
pub mod distance;
pub mod error;
pub mod grid;
pub mod heat;
pub mod movement;
pub mod random;
pub mod runner;
pub mod simulation;
pub mod snapshot;
pub mod swarm;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::BeeClustConfig;
pub use error::{BuildError, ConfigurationError, InvalidCellCodeError};
pub use simulation::Simulation;
