#![allow(dead_code)]

use beeclust_core::config::BeeClustConfig;
use beeclust_core::grid::Grid;
use beeclust_core::random::seeded;
use beeclust_core::simulation::Simulation;
use beeclust_core::test_helpers::{grid_from_str, ScriptedRandom};

/// Builder for reproducible test simulations.
#[derive(Clone, Debug)]
pub struct TestSimBuilder {
    grid: Grid,
    config: BeeClustConfig,
    seed: u64,
}

impl TestSimBuilder {
    /// Start from a text layout (see `grid_from_str`).
    pub fn layout(layout: &str) -> Self {
        Self::from_grid(grid_from_str(layout))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            config: BeeClustConfig::default(),
            seed: 42,
        }
    }

    pub fn with_config(mut self, config: BeeClustConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Simulation {
        Simulation::new(self.grid, self.config, seeded(self.seed)).expect("valid test simulation")
    }

    /// Build with a scripted random source instead of a seeded one.
    pub fn build_scripted(self, ints: Vec<i64>, choices: Vec<usize>) -> Simulation<ScriptedRandom> {
        let rng = ScriptedRandom::new(ints).with_choices(choices);
        Simulation::new(self.grid, self.config, rng).expect("valid test simulation")
    }
}

/// A `rows` x `columns` arena with a wall ring, a heater and a cooler, and
/// bees on every `spacing`-th inner cell.
pub fn arena(rows: usize, columns: usize, spacing: usize) -> Grid {
    use beeclust_core::cell::{Cell, Direction};

    let mut grid = Grid::empty(rows, columns).expect("non-empty arena");
    for pos in grid.positions().collect::<Vec<_>>() {
        let (row, column) = pos;
        if row == 0 || column == 0 || row == rows - 1 || column == columns - 1 {
            grid.set_cell(pos, Cell::Wall);
        } else if (row * columns + column) % spacing == 0 {
            let facing = Direction::ALL[(row + column) % 4];
            grid.set_cell(pos, Cell::Bee { facing });
        }
    }
    grid.set_cell((rows / 2, columns / 4), Cell::Heater);
    grid.set_cell((rows / 2, 3 * columns / 4), Cell::Cooler);
    grid
}
