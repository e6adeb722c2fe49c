mod support;

use beeclust_core::random::seeded;
use beeclust_core::simulation::Simulation;
use beeclust_core::snapshot::SimulationSnapshot;
use support::sim::{arena, TestSimBuilder};

#[test]
fn rebuilt_simulation_matches_snapshot() {
    let mut sim = TestSimBuilder::from_grid(arena(14, 18, 4)).with_seed(3).build();
    for _ in 0..30 {
        sim.tick();
    }
    let snapshot = sim.snapshot();

    let rebuilt = Simulation::from_snapshot(&snapshot, seeded(99)).unwrap();
    assert_eq!(rebuilt.heat_field().to_rows(), snapshot.heat);
    assert_eq!(rebuilt.bees(), snapshot.bees.as_slice());
    assert_eq!(rebuilt.grid().to_codes(), snapshot.grid);
    assert_eq!(rebuilt.ticks(), 30);
    assert_eq!(rebuilt.score(), snapshot.score);
    assert_eq!(rebuilt.swarms(), snapshot.swarms.as_slice());
}

#[test]
fn rebuilt_simulation_continues_like_the_original_given_same_draws() {
    let mut original = TestSimBuilder::from_grid(arena(10, 10, 3)).with_seed(8).build();
    for _ in 0..15 {
        original.tick();
    }
    let snapshot = original.snapshot();

    let mut a = Simulation::from_snapshot(&snapshot, seeded(1234)).unwrap();
    let mut b = Simulation::from_snapshot(&snapshot, seeded(1234)).unwrap();
    for _ in 0..50 {
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn snapshot_survives_json() {
    let sim = TestSimBuilder::from_grid(arena(8, 9, 2)).build();
    let snapshot = sim.snapshot();
    let json = snapshot.to_json().unwrap();
    let back = SimulationSnapshot::from_json(&json).unwrap();
    assert_eq!(back.grid, snapshot.grid);
    assert_eq!(back.bees, snapshot.bees);
    assert_eq!(back.swarms, snapshot.swarms);
    let rebuilt = Simulation::from_snapshot(&back, seeded(0)).unwrap();
    assert_eq!(rebuilt.bees(), sim.bees());
}
