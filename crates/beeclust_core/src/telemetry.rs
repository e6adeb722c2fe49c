//! Telemetry / KPIs: one record per tick for later analysis.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::simulation::Simulation;

/// State of the swarm right after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub moved: usize,
    pub swarm_count: usize,
    pub largest_swarm: usize,
    pub score: f64,
}

impl TickRecord {
    /// Capture the record for the tick that just finished.
    pub fn capture<R: RandomSource>(sim: &Simulation<R>, moved: usize) -> Self {
        Self {
            tick: sim.ticks(),
            moved,
            swarm_count: sim.swarms().len(),
            largest_swarm: sim.largest_swarm(),
            score: sim.score(),
        }
    }
}

/// Collects tick records. Feed it from a runner hook.
#[derive(Debug, Default, Clone)]
pub struct SimTelemetry {
    pub records: Vec<TickRecord>,
    pub total_moves: usize,
}

impl SimTelemetry {
    pub fn record(&mut self, record: TickRecord) {
        self.total_moves += record.moved;
        self.records.push(record);
    }

    pub fn last(&self) -> Option<&TickRecord> {
        self.records.last()
    }

    /// Mean score across recorded ticks, 0 when nothing was recorded.
    pub fn mean_score(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().map(|r| r.score).sum::<f64>() / self.records.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tick: u64, moved: usize, score: f64) -> TickRecord {
        TickRecord {
            tick,
            moved,
            swarm_count: 1,
            largest_swarm: 1,
            score,
        }
    }

    #[test]
    fn totals_accumulate() {
        let mut telemetry = SimTelemetry::default();
        assert_eq!(telemetry.mean_score(), 0.0);
        telemetry.record(record(1, 3, 20.0));
        telemetry.record(record(2, 1, 30.0));
        assert_eq!(telemetry.total_moves, 4);
        assert_eq!(telemetry.mean_score(), 25.0);
        assert_eq!(telemetry.last().map(|r| r.tick), Some(2));
    }
}
