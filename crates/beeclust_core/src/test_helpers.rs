//! Test helpers: scripted random draws and a compact grid notation.
//!
//! Shared by the unit tests, the integration tests and the experiments crate.

use std::collections::VecDeque;

use crate::cell::{Cell, Direction};
use crate::grid::Grid;
use crate::random::RandomSource;

/// Replays a fixed list of draws.
///
/// `int_in_range` pops from the integer script (values are clamped into the
/// requested range); `choose_direction` pops an index into the offered set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<i64>,
    choices: VecDeque<usize>,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<i64>) -> Self {
        Self {
            ints: ints.into(),
            choices: VecDeque::new(),
            draws: 0,
        }
    }

    pub fn with_choices(mut self, choices: Vec<usize>) -> Self {
        self.choices = choices.into();
        self
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Draws still queued (integers plus choices).
    pub fn remaining(&self) -> usize {
        self.ints.len() + self.choices.len()
    }
}

impl RandomSource for ScriptedRandom {
    /// # Panics
    ///
    /// Panics when the integer script is exhausted.
    fn int_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.draws += 1;
        let value = self
            .ints
            .pop_front()
            .expect("scripted random source ran out of integers");
        value.clamp(low, high)
    }

    /// # Panics
    ///
    /// Panics when the choice script is exhausted.
    fn choose_direction(&mut self, options: &[Direction]) -> Direction {
        self.draws += 1;
        let index = self
            .choices
            .pop_front()
            .expect("scripted random source ran out of choices");
        options[index % options.len()]
    }
}

/// Parse a grid drawn as text, one row per line.
///
/// `.` empty, `#` wall, `H` heater, `C` cooler, `^ > v <` bees facing
/// up/right/down/left, and a digit `n` a bee waiting `n` more ticks.
/// Surrounding whitespace on each line is ignored.
///
/// # Panics
///
/// Panics on an unknown character or a ragged layout.
pub fn grid_from_str(layout: &str) -> Grid {
    let rows: Vec<Vec<Cell>> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(cell_from_char).collect())
        .collect();
    Grid::from_rows(rows).expect("layout should be rectangular")
}

fn cell_from_char(ch: char) -> Cell {
    match ch {
        '.' => Cell::Empty,
        '#' => Cell::Wall,
        'H' => Cell::Heater,
        'C' => Cell::Cooler,
        '^' => Cell::Bee {
            facing: Direction::Up,
        },
        '>' => Cell::Bee {
            facing: Direction::Right,
        },
        'v' => Cell::Bee {
            facing: Direction::Down,
        },
        '<' => Cell::Bee {
            facing: Direction::Left,
        },
        d if d.is_ascii_digit() => Cell::Waiting {
            remaining: d.to_digit(10).unwrap_or(0),
        },
        other => panic!("unknown layout character {other:?}"),
    }
}
