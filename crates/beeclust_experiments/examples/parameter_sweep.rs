//! Example: parameter sweep over the collision probabilities.
//!
//! This example demonstrates how to:
//! 1. Select a pre-defined parameter space
//! 2. Run multiple simulations in parallel
//! 3. Find the best parameter combination
//! 4. Export results to CSV and JSON
//!
//! To use a different parameter space, change the function call in main().

use beeclust_core::cell::{Cell, Direction};
use beeclust_core::grid::Grid;
use beeclust_experiments::{
    export_to_csv, export_to_json, find_best_parameters, find_best_result_index,
    run_parallel_experiments,
};

/// 20x30 arena with a wall ring, one heater, one cooler and 40 bees.
fn arena() -> Result<Grid, Box<dyn std::error::Error>> {
    const ROWS: usize = 20;
    const COLUMNS: usize = 30;
    let mut grid = Grid::empty(ROWS, COLUMNS)?;
    for row in 0..ROWS {
        for column in 0..COLUMNS {
            if row == 0 || column == 0 || row == ROWS - 1 || column == COLUMNS - 1 {
                grid.set_cell((row, column), Cell::Wall);
            }
        }
    }
    grid.set_cell((ROWS / 2, COLUMNS / 4), Cell::Heater);
    grid.set_cell((ROWS / 2, 3 * COLUMNS / 4), Cell::Cooler);
    for i in 0..40 {
        let pos = (1 + (i * 7) % (ROWS - 2), 1 + (i * 11) % (COLUMNS - 2));
        if grid.cell_at(pos) == Some(Cell::Empty) {
            grid.set_cell(pos, Cell::Bee { facing: Direction::ALL[i % 4] });
        }
    }
    Ok(grid)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting parameter sweep experiment...");

    // Select which parameter space to use:
    // - comprehensive_space(): every dimension at a few levels
    // - collision_focused_space(): p_changedir / p_wall / p_meet
    // - temperature_focused_space(): k_temp / k_stay / t_ideal
    // - minimal_space(): quick testing
    let space = beeclust_experiments::parameter_spaces::collision_focused_space()
        .with_ticks(1_500)
        .with_runs_per_point(2);

    println!("Generating parameter sets...");
    let parameter_sets = space.generate();
    println!("Generated {} parameter sets (invalid combinations filtered out)", parameter_sets.len());

    let grid = arena()?;
    println!("Running simulations in parallel...");
    let results = run_parallel_experiments(&grid, &parameter_sets, None)?;
    println!("Completed {} simulations", results.len());

    let best_idx = find_best_result_index(&results).ok_or("No results to analyze")?;

    println!("\n=== Best Run ===");
    let best_result = &results[best_idx];
    println!("Final score: {:.2}", best_result.final_score);
    println!("Mean score: {:.2}", best_result.mean_score);
    println!("Largest swarm: {} of {} bees", best_result.largest_swarm, best_result.bee_count);

    if let Some(best_params) = find_best_parameters(&results, &parameter_sets) {
        println!("\n=== Best Parameters ===");
        println!("p_changedir: {:.2}", best_params.config.p_changedir);
        println!("p_wall: {:.2}", best_params.config.p_wall);
        println!("p_meet: {:.2}", best_params.config.p_meet);
        println!("Seed: {}", best_params.seed);
    }

    println!("\nExporting results...");
    export_to_json(&results, "experiment_results.json")?;
    println!("Exported to experiment_results.json");

    export_to_csv(&results, &parameter_sets, "experiment_results.csv")?;
    println!("Exported to experiment_results.csv");

    println!("\nExperiment complete!");

    Ok(())
}
