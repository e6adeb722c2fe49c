//! Simulation runner: drives repeated ticks, optionally observing each one.

use crate::random::RandomSource;
use crate::simulation::Simulation;
use crate::telemetry::TickRecord;

/// Runs one tick and returns its record.
pub fn run_next_tick<R: RandomSource>(sim: &mut Simulation<R>) -> TickRecord {
    let moved = sim.tick();
    TickRecord::capture(sim, moved)
}

/// Runs `max_ticks` ticks. Returns the total number of moves.
pub fn run_ticks<R: RandomSource>(sim: &mut Simulation<R>, max_ticks: usize) -> usize {
    run_ticks_with_hook(sim, max_ticks, |_, _| {})
}

/// Runs `max_ticks` ticks and invokes `hook` after each one.
pub fn run_ticks_with_hook<R, F>(sim: &mut Simulation<R>, max_ticks: usize, mut hook: F) -> usize
where
    R: RandomSource,
    F: FnMut(&Simulation<R>, &TickRecord),
{
    let mut total_moves = 0;
    for _ in 0..max_ticks {
        let record = run_next_tick(sim);
        total_moves += record.moved;
        hook(sim, &record);
    }
    total_moves
}
