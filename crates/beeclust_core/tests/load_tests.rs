//! Load tests for beeclust_core: tick throughput on large arenas.

mod support;

use std::time::Instant;

use beeclust_core::runner::run_ticks;
use support::sim::{arena, TestSimBuilder};

#[test]
#[ignore] // Only run explicitly: cargo test --package beeclust_core --test load_tests -- --ignored
fn test_sustained_load() {
    let mut sim = TestSimBuilder::from_grid(arena(200, 200, 7)).build();
    let bees = sim.bees().len();

    let start = Instant::now();
    let moves = run_ticks(&mut sim, 1_000);
    let duration = start.elapsed();

    let ticks_per_sec = 1_000.0 / duration.as_secs_f64();
    println!(
        "Sustained load test: {} bees, {} moves in {:.2}s ({:.0} ticks/sec)",
        bees,
        moves,
        duration.as_secs_f64(),
        ticks_per_sec
    );

    assert!(
        ticks_per_sec > 50.0,
        "Should process >50 ticks/sec, got {:.0}",
        ticks_per_sec
    );
}

#[test]
#[ignore]
fn test_dense_construction() {
    // Heat field construction dominates for large, dense grids.
    let start = Instant::now();
    let sim = TestSimBuilder::from_grid(arena(500, 500, 2)).build();
    let duration = start.elapsed();
    println!(
        "Dense construction: {} bees, {} swarms in {:.2}s",
        sim.bees().len(),
        sim.swarms().len(),
        duration.as_secs_f64()
    );
    assert!(duration.as_secs_f64() < 10.0);
}
