//! Metrics extraction from simulation results.
//!
//! Summarises one finished run: where the bees ended up (score, swarms) and
//! how much they moved along the way.

use beeclust_core::random::RandomSource;
use beeclust_core::simulation::Simulation;
use beeclust_core::telemetry::SimTelemetry;
use serde::{Deserialize, Serialize};

/// Aggregated metrics from a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Score after the last tick.
    pub final_score: f64,
    /// Mean of the per-tick scores.
    pub mean_score: f64,
    /// Distance of the final score from the configured ideal temperature.
    pub ideal_gap: f64,
    /// Bees that changed cell, summed over all ticks.
    pub total_moves: usize,
    /// Number of swarms after the last tick.
    pub swarm_count: usize,
    /// Size of the biggest swarm after the last tick.
    pub largest_swarm: usize,
    pub bee_count: usize,
    pub ticks: u64,
}

impl ExperimentResult {
    /// Share of the bees sitting in the largest swarm, 0 with no bees.
    pub fn clustering_ratio(&self) -> f64 {
        if self.bee_count == 0 {
            return 0.0;
        }
        self.largest_swarm as f64 / self.bee_count as f64
    }
}

/// Extract metrics from a finished simulation and its telemetry.
pub fn extract_metrics<R: RandomSource>(
    sim: &Simulation<R>,
    telemetry: &SimTelemetry,
) -> ExperimentResult {
    ExperimentResult {
        final_score: sim.score(),
        mean_score: telemetry.mean_score(),
        ideal_gap: (sim.config().t_ideal - sim.score()).abs(),
        total_moves: telemetry.total_moves,
        swarm_count: sim.swarms().len(),
        largest_swarm: sim.largest_swarm(),
        bee_count: sim.bees().len(),
        ticks: sim.ticks(),
    }
}
