use std::path::PathBuf;

use beeclust_core::cell::Device;
use beeclust_experiments::runner::run_parallel_experiments_with_progress;
use beeclust_experiments::{
    export_to_csv, export_to_json, find_best_parameters, load_grid, ExperimentResult,
    ParameterSpace,
};
use tempfile::tempdir;

fn arena_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/arena.txt")
}

#[test]
fn bundled_arena_loads() {
    let grid = load_grid(arena_path()).unwrap();
    assert_eq!((grid.rows(), grid.columns()), (16, 24));
    assert_eq!(grid.bee_positions().len(), 30);
    assert_eq!(grid.devices(Device::Heater), vec![(4, 5)]);
    assert_eq!(grid.devices(Device::Cooler), vec![(12, 18)]);
}

#[test]
fn sweep_runs_and_exports() {
    let grid = load_grid(arena_path()).unwrap();
    let sets = ParameterSpace::grid()
        .p_meet(vec![0.2, 1.0])
        .k_stay(vec![20.0, 80.0])
        .with_ticks(200)
        .with_runs_per_point(2)
        .generate();
    assert_eq!(sets.len(), 8);

    let results = run_parallel_experiments_with_progress(&grid, &sets, Some(4), false).unwrap();
    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r.bee_count == 30 && r.ticks == 200));

    // Same seed, same parameters: identical metrics regardless of thread count.
    let again = run_parallel_experiments_with_progress(&grid, &sets, Some(1), false).unwrap();
    assert_eq!(results, again);

    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out/results.csv");
    let json_path = dir.path().join("results.json");
    export_to_csv(&results, &sets, &csv_path).unwrap();
    export_to_json(&results, &json_path).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 9);
    let json: Vec<ExperimentResult> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json.len(), results.len());
    for (read, written) in json.iter().zip(&results) {
        assert_eq!(read.total_moves, written.total_moves);
        assert!((read.final_score - written.final_score).abs() < 1e-9);
    }

    assert!(find_best_parameters(&results, &sets).is_some());
}
