//! Construction-time errors. Nothing after a successful construction can fail.

use thiserror::Error;

/// A grid or configuration that cannot describe a valid simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("grid must be 2-dimensional with at least one row and column, got {rows} rows")]
    EmptyGrid { rows: usize },
    #[error("grid must be 2-dimensional: row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("probability {name} must be between 0 and 1, is {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("{name} must not be negative, is {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be a finite number, is {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("t_heater ({t_heater}) is colder than the environment ({t_env})")]
    HeaterColderThanEnvironment { t_heater: f64, t_env: f64 },
    #[error("t_cooler ({t_cooler}) is hotter than the environment ({t_env})")]
    CoolerHotterThanEnvironment { t_cooler: f64, t_env: f64 },
}

/// A raw grid code outside the known cell encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown cell code {code} at ({row}, {column})")]
pub struct InvalidCellCodeError {
    pub row: usize,
    pub column: usize,
    pub code: i64,
}

/// Any reason a [`crate::simulation::Simulation`] could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidCellCode(#[from] InvalidCellCodeError),
    #[error("snapshot lists {listed} bees but its grid holds {occupied} bee cells")]
    SnapshotBeesMismatch { listed: usize, occupied: usize },
}
