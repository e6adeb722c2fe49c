//! Serializable picture of a simulation at one point in time.

use serde::{Deserialize, Serialize};

use crate::config::BeeClustConfig;
use crate::grid::Position;
use crate::swarm::Swarm;

/// Everything a renderer or exporter needs, in plain data.
///
/// `grid` uses the numeric cell encoding; `heat` holds `None` for walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub config: BeeClustConfig,
    pub grid: Vec<Vec<i64>>,
    pub heat: Vec<Vec<Option<f64>>>,
    pub bees: Vec<Position>,
    pub swarms: Vec<Swarm>,
    pub score: f64,
    pub ticks: u64,
}

impl SimulationSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
