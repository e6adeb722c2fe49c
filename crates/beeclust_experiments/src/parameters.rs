//! Parameter variation framework for exploring the BeeClust parameter space.
//!
//! This module provides tools for defining parameter spaces and generating
//! parameter sets for parallel experimentation. Supports grid search and
//! random sampling strategies.

use beeclust_core::config::BeeClustConfig;
use serde::Serialize;

mod combinations;
mod constraints;
mod sampling;

/// Seed multiplier shared by grid search and random sampling.
const SEED_MIX: u64 = 0x9e37_79b9;

/// A single parameter configuration for a simulation run.
///
/// Wraps a [`BeeClustConfig`] with the run length and experiment metadata for
/// tracking and reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Model parameters for this run.
    pub config: BeeClustConfig,
    /// Number of ticks to simulate.
    pub ticks: usize,
    /// Reset every bee to `Waiting{0}` after every this many ticks.
    pub forget_every: Option<usize>,
    /// Unique experiment ID for this parameter configuration.
    pub experiment_id: String,
    /// Run ID within the experiment (for multiple runs with same params).
    pub run_id: usize,
    /// Seed used for this run (ensures reproducibility).
    pub seed: u64,
}

impl ParameterSet {
    pub fn new(
        config: BeeClustConfig,
        ticks: usize,
        experiment_id: String,
        run_id: usize,
        seed: u64,
    ) -> Self {
        Self {
            config,
            ticks,
            forget_every: None,
            experiment_id,
            run_id,
            seed,
        }
    }

    pub fn with_forget_every(mut self, forget_every: Option<usize>) -> Self {
        self.forget_every = forget_every;
        self
    }
}

/// Defines a parameter space for exploration.
///
/// Every dimension left empty falls back to the value in the base
/// configuration. Combinations that fail validation are dropped.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    base: BeeClustConfig,
    ticks: usize,
    runs_per_point: usize,
    forget_every: Option<usize>,
    p_changedir: Vec<f64>,
    p_wall: Vec<f64>,
    p_meet: Vec<f64>,
    k_temp: Vec<f64>,
    k_stay: Vec<f64>,
    t_ideal: Vec<f64>,
    min_wait: Vec<i64>,
}

impl ParameterSpace {
    /// Create a new parameter space with the default model configuration.
    pub fn new() -> Self {
        Self {
            base: BeeClustConfig::default(),
            ticks: 1_000,
            runs_per_point: 1,
            forget_every: None,
            p_changedir: vec![],
            p_wall: vec![],
            p_meet: vec![],
            k_temp: vec![],
            k_stay: vec![],
            t_ideal: vec![],
            min_wait: vec![],
        }
    }

    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::new()
    }

    pub fn p_changedir(mut self, values: Vec<f64>) -> Self {
        self.p_changedir = values;
        self
    }

    pub fn p_wall(mut self, values: Vec<f64>) -> Self {
        self.p_wall = values;
        self
    }

    pub fn p_meet(mut self, values: Vec<f64>) -> Self {
        self.p_meet = values;
        self
    }

    pub fn k_temp(mut self, values: Vec<f64>) -> Self {
        self.k_temp = values;
        self
    }

    pub fn k_stay(mut self, values: Vec<f64>) -> Self {
        self.k_stay = values;
        self
    }

    pub fn t_ideal(mut self, values: Vec<f64>) -> Self {
        self.t_ideal = values;
        self
    }

    pub fn min_wait(mut self, values: Vec<i64>) -> Self {
        self.min_wait = values;
        self
    }

    /// Set base configuration (used as defaults).
    pub fn with_base(mut self, base: BeeClustConfig) -> Self {
        self.base = base;
        self
    }

    /// Ticks simulated per run.
    pub fn with_ticks(mut self, ticks: usize) -> Self {
        self.ticks = ticks;
        self
    }

    /// Independent seeded runs per parameter combination.
    pub fn with_runs_per_point(mut self, runs: usize) -> Self {
        self.runs_per_point = runs.max(1);
        self
    }

    pub fn with_forget_every(mut self, forget_every: Option<usize>) -> Self {
        self.forget_every = forget_every;
        self
    }

    /// Generate all parameter sets using grid search (Cartesian product).
    ///
    /// Each valid combination yields `runs_per_point` sets that share an
    /// experiment id and differ in run id and seed.
    pub fn generate(&self) -> Vec<ParameterSet> {
        let runs = self.runs_per_point as u64;
        combinations::cartesian_product(self)
            .into_iter()
            .filter(constraints::is_valid_config)
            .enumerate()
            .flat_map(|(experiment, config)| {
                (0..self.runs_per_point).map(move |run_id| {
                    let seed = (experiment as u64 * runs + run_id as u64).wrapping_mul(SEED_MIX);
                    ParameterSet::new(
                        config,
                        self.ticks,
                        format!("exp_{}", experiment),
                        run_id,
                        seed,
                    )
                    .with_forget_every(self.forget_every)
                })
            })
            .collect()
    }
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}
