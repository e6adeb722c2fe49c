//! Static heat field derived from heater and cooler distances.
//!
//! Devices never move, so the field is built once per simulation and only
//! read afterwards. Walls carry no temperature (`None`).

use pathfinding::matrix::Matrix;

use crate::cell::{Cell, Device};
use crate::config::BeeClustConfig;
use crate::distance::distance_map;
use crate::grid::{Grid, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct HeatField {
    values: Matrix<Option<f64>>,
}

impl HeatField {
    pub fn build(grid: &Grid, config: &BeeClustConfig) -> Self {
        let heater_distances = distance_map(grid, &grid.devices(Device::Heater));
        let cooler_distances = distance_map(grid, &grid.devices(Device::Cooler));

        let mut values = Matrix::new(grid.rows(), grid.columns(), None);
        for pos in grid.positions() {
            values[pos] = match grid.cell_at(pos) {
                Some(Cell::Wall) | None => None,
                Some(Cell::Heater) => Some(config.t_heater),
                Some(Cell::Cooler) => Some(config.t_cooler),
                Some(_) => Some(heat(
                    config,
                    cooler_distances[pos],
                    heater_distances[pos],
                )),
            };
        }
        Self { values }
    }

    /// Temperature at `pos`; `None` for walls and positions outside the grid.
    pub fn at(&self, pos: Position) -> Option<f64> {
        self.values.get(pos).copied().flatten()
    }

    pub fn rows(&self) -> usize {
        self.values.rows
    }

    pub fn columns(&self) -> usize {
        self.values.columns
    }

    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        (0..self.rows())
            .map(|row| (0..self.columns()).map(|column| self.values[(row, column)]).collect())
            .collect()
    }
}

/// Temperature of a non-device cell from its device distances.
///
/// An absent distance is replaced by -1, which makes that device's term
/// negative so `max(_, 0)` drops it.
pub fn heat(config: &BeeClustConfig, dist_cooler: Option<u32>, dist_heater: Option<u32>) -> f64 {
    if dist_cooler.is_none() && dist_heater.is_none() {
        return config.t_env;
    }
    let dist_cooler = dist_cooler.map_or(-1.0, f64::from);
    let dist_heater = dist_heater.map_or(-1.0, f64::from);

    let cooling = (1.0 / dist_cooler) * (config.t_env - config.t_cooler);
    let heating = (1.0 / dist_heater) * (config.t_heater - config.t_env);
    config.t_env + config.k_temp * (heating.max(0.0) - cooling.max(0.0))
}
