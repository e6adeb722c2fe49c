//! Movement engine: the per-bee transition applied once per tick.
//!
//! Each bee's next state is driven by the cell at its recorded position:
//!
//! - `Waiting { remaining > 0 }` counts down and stays.
//! - `Waiting { 0 }` draws a uniform direction (integer draw in `1..=4`) and moves.
//! - `Bee { facing }` keeps its heading, or with `p_changedir` picks one of
//!   the three other directions, and moves.
//!
//! A move either advances into an empty cell, or resolves a collision. Writes
//! go straight to the grid, so a bee processed later in the same tick sees
//! every earlier bee's new state.

use crate::cell::{Cell, Direction};
use crate::config::BeeClustConfig;
use crate::grid::{Grid, Position};
use crate::heat::HeatField;
use crate::random::RandomSource;

/// Everything a single transition reads or writes.
pub struct MoveContext<'a, R: RandomSource + ?Sized> {
    pub grid: &'a mut Grid,
    pub heat: &'a HeatField,
    pub config: &'a BeeClustConfig,
    pub rng: &'a mut R,
}

impl<R: RandomSource + ?Sized> MoveContext<'_, R> {
    /// Advance the bee at `pos` by one tick and return where it ends up.
    pub fn step_bee(&mut self, pos: Position) -> Position {
        match self.grid.cell_at(pos) {
            Some(Cell::Waiting { remaining }) if remaining > 0 => {
                self.grid.set_cell(
                    pos,
                    Cell::Waiting {
                        remaining: remaining - 1,
                    },
                );
                pos
            }
            Some(Cell::Waiting { .. }) => {
                let index = self.rng.int_in_range(1, 4);
                let direction = Direction::from_index(index).unwrap_or(Direction::Up);
                self.move_bee(pos, direction)
            }
            Some(Cell::Bee { facing }) => {
                let direction = if self.rng.chance(self.config.p_changedir) {
                    self.rng.choose_direction(&facing.others())
                } else {
                    facing
                };
                self.move_bee(pos, direction)
            }
            // Not a bee: nothing to move.
            _ => pos,
        }
    }

    /// Try to move the bee at `pos` one cell in `direction`.
    pub fn move_bee(&mut self, pos: Position, direction: Direction) -> Position {
        let target = self.grid.step(pos, direction);
        let target_cell = target.and_then(|t| self.grid.cell_at(t));

        match (target, target_cell) {
            (Some(target), Some(Cell::Empty)) => {
                self.grid.set_cell(target, Cell::Bee { facing: direction });
                self.grid.set_cell(pos, Cell::Empty);
                target
            }
            (Some(_), Some(cell)) if cell.is_bee() => {
                if self.rng.chance(self.config.p_meet) {
                    self.stop(pos);
                }
                // Otherwise the bee keeps its cell untouched, facing the same way.
                pos
            }
            // Off the grid, a wall, or a device.
            _ => {
                if self.rng.chance(self.config.p_wall) {
                    self.stop(pos);
                } else {
                    self.grid.set_cell(
                        pos,
                        Cell::Bee {
                            facing: direction.opposite(),
                        },
                    );
                }
                pos
            }
        }
    }

    fn stop(&mut self, pos: Position) {
        let local = self.heat.at(pos).unwrap_or(self.config.t_env);
        let remaining = self.config.wait_ticks(local);
        self.grid.set_cell(pos, Cell::Waiting { remaining });
    }
}

/// Apply the transition to every bee in `bees`, in order.
///
/// Returns the new bee positions (same order) and how many bees changed cell.
pub fn advance_all<R: RandomSource + ?Sized>(
    ctx: &mut MoveContext<'_, R>,
    bees: &[Position],
) -> (Vec<Position>, usize) {
    let mut moved = 0;
    let next = bees
        .iter()
        .map(|&bee| {
            let after = ctx.step_bee(bee);
            if after != bee {
                moved += 1;
            }
            after
        })
        .collect();
    (next, moved)
}
