//! Parallel simulation execution using rayon.
//!
//! This module provides functions to run single simulations and execute
//! multiple simulations in parallel for parameter sweeps. Every run owns its
//! own grid copy and seeded random source, so runs share nothing.

use beeclust_core::error::BuildError;
use beeclust_core::grid::Grid;
use beeclust_core::random::{seeded, RandomSource};
use beeclust_core::runner::run_next_tick;
use beeclust_core::simulation::Simulation;
use beeclust_core::telemetry::SimTelemetry;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::metrics::{extract_metrics, ExperimentResult};
use crate::parameters::ParameterSet;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("simulation could not be built: {0}")]
    Build(#[from] BuildError),
    #[error("failed to create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Tick `sim` `ticks` times, collecting one record per tick.
///
/// With `forget_every = Some(k)` (k > 0) every bee is reset to `Waiting{0}`
/// after each k-th tick.
pub fn drive_simulation<R: RandomSource>(
    sim: &mut Simulation<R>,
    ticks: usize,
    forget_every: Option<usize>,
) -> SimTelemetry {
    let mut telemetry = SimTelemetry::default();
    for tick in 1..=ticks {
        telemetry.record(run_next_tick(sim));
        if let Some(every) = forget_every.filter(|&every| every > 0) {
            if tick % every == 0 {
                sim.forget();
            }
        }
    }
    telemetry
}

/// Run a single simulation with the given parameter set.
///
/// Builds a fresh simulation on a copy of `grid`, runs it for the set's tick
/// count and extracts metrics from the result.
pub fn run_single_simulation(
    grid: &Grid,
    param_set: &ParameterSet,
) -> Result<ExperimentResult, ExperimentError> {
    let mut sim = Simulation::new(grid.clone(), param_set.config, seeded(param_set.seed))?;
    let telemetry = drive_simulation(&mut sim, param_set.ticks, param_set.forget_every);
    let result = extract_metrics(&sim, &telemetry);
    debug!(
        experiment = %param_set.experiment_id,
        run = param_set.run_id,
        score = result.final_score,
        swarms = result.swarm_count,
        "run finished"
    );
    Ok(result)
}

/// Run multiple simulations in parallel.
///
/// Uses rayon to execute simulations concurrently across available CPU cores.
/// Results come back in the same order as `parameter_sets`.
pub fn run_parallel_experiments(
    grid: &Grid,
    parameter_sets: &[ParameterSet],
    num_threads: Option<usize>,
) -> Result<Vec<ExperimentResult>, ExperimentError> {
    run_parallel_experiments_with_progress(grid, parameter_sets, num_threads, true)
}

/// Run multiple simulations in parallel with optional progress bar.
pub fn run_parallel_experiments_with_progress(
    grid: &Grid,
    parameter_sets: &[ParameterSet],
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<ExperimentResult>, ExperimentError> {
    let total = parameter_sets.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;
    info!(runs = total, threads = pool.current_num_threads(), "starting sweep");

    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_simulation(grid, param_set);
                if let Some(ref progress_bar) = pb {
                    progress_bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results
}
