//! Parallel experimentation framework for BeeClust parameter sweeps.
//!
//! This crate runs many independent simulations over one grid with varying
//! model parameters, extracts per-run metrics and exports them for analysis.
//! It also loads grid files and hosts the `beeclust` command-line binary.
//!
//! # Quick Start
//!
//! ```no_run
//! use beeclust_experiments::{find_best_result_index, load_grid, run_parallel_experiments, ParameterSpace};
//!
//! let grid = load_grid("arena.txt").unwrap();
//!
//! // Define parameter space (grid search)
//! let space = ParameterSpace::grid()
//!     .p_meet(vec![0.5, 0.8, 1.0])
//!     .t_ideal(vec![30.0, 35.0])
//!     .with_ticks(2_000)
//!     .with_runs_per_point(4);
//!
//! // Generate parameter sets and run them in parallel
//! let parameter_sets = space.generate();
//! let results = run_parallel_experiments(&grid, &parameter_sets, None).unwrap();
//!
//! let best_idx = find_best_result_index(&results).unwrap();
//! ```
//!
//! # Architecture
//!
//! - [`grid_io`]: grid and configuration file loading
//! - [`parameters`]: parameter variation framework (grid search, random sampling)
//! - [`parameter_spaces`]: ready-made spaces
//! - [`runner`]: parallel simulation execution using rayon
//! - [`metrics`]: metrics extraction from finished runs
//! - [`export`]: CSV/JSON export and ranking

pub mod export;
pub mod grid_io;
pub mod metrics;
pub mod parameter_spaces;
pub mod parameters;
pub mod runner;

pub use export::{
    export_tick_records_csv, export_to_csv, export_to_json, find_best_parameters,
    find_best_result_index,
};
pub use grid_io::{load_config, load_grid, GridError};
pub use metrics::ExperimentResult;
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_parallel_experiments, run_single_simulation, ExperimentError};
