//! Run a seeded arena for a few thousand ticks and print how the swarms form.
//!
//! Run with: cargo run -p beeclust_core --example scenario_run

use beeclust_core::cell::{Cell, Direction};
use beeclust_core::config::BeeClustConfig;
use beeclust_core::grid::Grid;
use beeclust_core::random::seeded;
use beeclust_core::runner::run_ticks_with_hook;
use beeclust_core::simulation::Simulation;
use beeclust_core::telemetry::SimTelemetry;

fn main() {
    const ROWS: usize = 30;
    const COLUMNS: usize = 40;
    const NUM_BEES: usize = 60;
    const TICKS: usize = 2_000;
    const SEED: u64 = 123;

    let mut grid = Grid::empty(ROWS, COLUMNS).expect("non-empty grid");
    grid.set_cell((ROWS / 2, COLUMNS / 4), Cell::Heater);
    grid.set_cell((ROWS / 2, 3 * COLUMNS / 4), Cell::Cooler);
    for i in 0..NUM_BEES {
        let pos = ((i * 7) % ROWS, (i * 13) % COLUMNS);
        if grid.cell_at(pos) == Some(Cell::Empty) {
            grid.set_cell(
                pos,
                Cell::Bee {
                    facing: Direction::ALL[i % 4],
                },
            );
        }
    }

    let mut sim = Simulation::new(grid, BeeClustConfig::default(), seeded(SEED))
        .expect("default configuration is valid");
    let mut telemetry = SimTelemetry::default();
    let total_moves = run_ticks_with_hook(&mut sim, TICKS, |_, record| telemetry.record(*record));

    println!(
        "--- Scenario run ({}x{} grid, {} bees, {} ticks, seed {}) ---",
        ROWS,
        COLUMNS,
        sim.bees().len(),
        TICKS,
        SEED
    );
    println!("Total moves: {}", total_moves);
    println!("Mean score: {:.2}", telemetry.mean_score());
    println!("Final score: {:.2}", sim.score());
    println!(
        "Final swarms: {} (largest {})",
        sim.swarms().len(),
        sim.largest_swarm()
    );

    println!("\nEvery 250th tick:");
    for record in telemetry.records.iter().filter(|r| r.tick % 250 == 0) {
        println!(
            "  tick={:>5}  moved={:>3}  swarms={:>3}  largest={:>3}  score={:.2}",
            record.tick, record.moved, record.swarm_count, record.largest_swarm, record.score
        );
    }
}
