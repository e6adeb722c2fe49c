//! Simulation driver: owns the grid, heat field, bee list and swarms.
//!
//! Construction validates the configuration, builds the heat field once and
//! derives the initial bee list, swarms and score. [`Simulation::tick`] then
//! runs the movement engine over the captured bee list and re-derives swarms
//! and score from the result.

use std::collections::HashSet;

use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::cell::{Cell, Device};
use crate::config::BeeClustConfig;
use crate::error::BuildError;
use crate::grid::{Grid, Position};
use crate::heat::HeatField;
use crate::movement::{advance_all, MoveContext};
use crate::random::RandomSource;
use crate::snapshot::SimulationSnapshot;
use crate::swarm::{detect_swarms, Swarm};

#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = StdRng> {
    grid: Grid,
    config: BeeClustConfig,
    heat: HeatField,
    bees: Vec<Position>,
    swarms: Vec<Swarm>,
    score: f64,
    ticks: u64,
    rng: R,
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(grid: Grid, config: BeeClustConfig, rng: R) -> Result<Self, BuildError> {
        config.validate()?;

        let heat = HeatField::build(&grid, &config);
        let bees = grid.bee_positions();
        let swarms = detect_swarms(&bees, grid.rows(), grid.columns());
        let score = mean_heat(&heat, &bees);

        debug!(
            rows = grid.rows(),
            columns = grid.columns(),
            bees = bees.len(),
            heaters = grid.devices(Device::Heater).len(),
            coolers = grid.devices(Device::Cooler).len(),
            swarms = swarms.len(),
            score,
            "simulation built"
        );

        Ok(Self {
            grid,
            config,
            heat,
            bees,
            swarms,
            score,
            ticks: 0,
            rng,
        })
    }

    /// Build from the numeric cell encoding.
    pub fn from_codes(codes: &[Vec<i64>], config: BeeClustConfig, rng: R) -> Result<Self, BuildError> {
        let grid = Grid::from_codes(codes)?;
        Self::new(grid, config, rng)
    }

    /// Rebuild from a snapshot, keeping its bee order and tick count.
    ///
    /// The heat field is recomputed from the grid, so it matches the
    /// snapshot's as long as the configuration is unchanged.
    pub fn from_snapshot(snapshot: &SimulationSnapshot, rng: R) -> Result<Self, BuildError> {
        let mut sim = Self::from_codes(&snapshot.grid, snapshot.config, rng)?;

        let occupied: HashSet<Position> = sim.bees.iter().copied().collect();
        let listed: HashSet<Position> = snapshot.bees.iter().copied().collect();
        if listed.len() != snapshot.bees.len() || listed != occupied {
            return Err(BuildError::SnapshotBeesMismatch {
                listed: snapshot.bees.len(),
                occupied: occupied.len(),
            });
        }

        sim.bees = snapshot.bees.clone();
        // Summation order follows the bee list.
        sim.score = mean_heat(&sim.heat, &sim.bees);
        sim.ticks = snapshot.ticks;
        Ok(sim)
    }

    /// Advance every bee once. Returns how many bees changed cell.
    pub fn tick(&mut self) -> usize {
        let bees = std::mem::take(&mut self.bees);
        let mut ctx = MoveContext {
            grid: &mut self.grid,
            heat: &self.heat,
            config: &self.config,
            rng: &mut self.rng,
        };
        let (next, moved) = advance_all(&mut ctx, &bees);

        self.bees = next;
        self.swarms = detect_swarms(&self.bees, self.grid.rows(), self.grid.columns());
        self.score = mean_heat(&self.heat, &self.bees);
        self.ticks += 1;

        trace!(
            tick = self.ticks,
            moved,
            swarms = self.swarms.len(),
            score = self.score,
            "tick"
        );
        moved
    }

    /// Make every bee ready to pick a fresh direction on the next tick.
    pub fn forget(&mut self) {
        for &bee in &self.bees {
            self.grid.set_cell(bee, Cell::Waiting { remaining: 0 });
        }
    }

    /// Mean temperature over the bee positions, 0 with no bees.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn heat_field(&self) -> &HeatField {
        &self.heat
    }

    /// Bee positions in processing order.
    pub fn bees(&self) -> &[Position] {
        &self.bees
    }

    pub fn swarms(&self) -> &[Swarm] {
        &self.swarms
    }

    pub fn config(&self) -> &BeeClustConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Size of the biggest swarm, 0 with no bees.
    pub fn largest_swarm(&self) -> usize {
        self.swarms.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            config: self.config,
            grid: self.grid.to_codes(),
            heat: self.heat.to_rows(),
            bees: self.bees.clone(),
            swarms: self.swarms.clone(),
            score: self.score,
            ticks: self.ticks,
        }
    }
}

fn mean_heat(heat: &HeatField, bees: &[Position]) -> f64 {
    if bees.is_empty() {
        return 0.0;
    }
    let total: f64 = bees.iter().filter_map(|&bee| heat.at(bee)).sum();
    total / bees.len() as f64
}
