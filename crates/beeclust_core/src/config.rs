//! Model parameters and their single validation pass.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Parameters of the BeeClust model.
///
/// Probabilities are compared against a uniform roll in `1..=100`, so only
/// two decimal places of precision are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeeClustConfig {
    /// Probability that a moving bee turns to a random other direction.
    pub p_changedir: f64,
    /// Probability that a bee stops when it hits a wall, device or the edge.
    pub p_wall: f64,
    /// Probability that a bee stops when it bumps into another bee.
    pub p_meet: f64,
    /// Scales how strongly devices warm or cool the environment.
    pub k_temp: f64,
    /// Scales how long a bee stays; the wait shrinks away from `t_ideal`.
    pub k_stay: f64,
    pub t_ideal: f64,
    pub t_heater: f64,
    pub t_cooler: f64,
    pub t_env: f64,
    /// Lower bound on the number of ticks a stopped bee waits.
    pub min_wait: i64,
}

impl Default for BeeClustConfig {
    fn default() -> Self {
        Self {
            p_changedir: 0.2,
            p_wall: 0.8,
            p_meet: 0.8,
            k_temp: 0.9,
            k_stay: 50.0,
            t_ideal: 35.0,
            t_heater: 40.0,
            t_cooler: 5.0,
            t_env: 22.0,
            min_wait: 2,
        }
    }
}

impl BeeClustConfig {
    pub fn with_p_changedir(mut self, p: f64) -> Self {
        self.p_changedir = p;
        self
    }

    pub fn with_p_wall(mut self, p: f64) -> Self {
        self.p_wall = p;
        self
    }

    pub fn with_p_meet(mut self, p: f64) -> Self {
        self.p_meet = p;
        self
    }

    pub fn with_k_temp(mut self, k_temp: f64) -> Self {
        self.k_temp = k_temp;
        self
    }

    pub fn with_k_stay(mut self, k_stay: f64) -> Self {
        self.k_stay = k_stay;
        self
    }

    pub fn with_t_ideal(mut self, t_ideal: f64) -> Self {
        self.t_ideal = t_ideal;
        self
    }

    /// Set heater, cooler and environment temperatures together.
    pub fn with_temperatures(mut self, t_heater: f64, t_cooler: f64, t_env: f64) -> Self {
        self.t_heater = t_heater;
        self.t_cooler = t_cooler;
        self.t_env = t_env;
        self
    }

    pub fn with_min_wait(mut self, min_wait: i64) -> Self {
        self.min_wait = min_wait;
        self
    }

    /// Check every parameter. Runs once, before any derived state exists.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let floats = [
            ("p_changedir", self.p_changedir),
            ("p_wall", self.p_wall),
            ("p_meet", self.p_meet),
            ("k_temp", self.k_temp),
            ("k_stay", self.k_stay),
            ("t_ideal", self.t_ideal),
            ("t_heater", self.t_heater),
            ("t_cooler", self.t_cooler),
            ("t_env", self.t_env),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ConfigurationError::NotFinite { name, value });
            }
        }

        for (name, value) in [
            ("p_changedir", self.p_changedir),
            ("p_wall", self.p_wall),
            ("p_meet", self.p_meet),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::ProbabilityOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("k_temp", self.k_temp),
            ("k_stay", self.k_stay),
            ("min_wait", self.min_wait as f64),
        ] {
            if value < 0.0 {
                return Err(ConfigurationError::Negative { name, value });
            }
        }

        if self.t_env > self.t_heater {
            return Err(ConfigurationError::HeaterColderThanEnvironment {
                t_heater: self.t_heater,
                t_env: self.t_env,
            });
        }
        if self.t_env < self.t_cooler {
            return Err(ConfigurationError::CoolerHotterThanEnvironment {
                t_cooler: self.t_cooler,
                t_env: self.t_env,
            });
        }
        Ok(())
    }

    /// Ticks a bee standing at temperature `local` waits after stopping.
    pub fn wait_ticks(&self, local: f64) -> u32 {
        let wait = (self.k_stay / (1.0 + (self.t_ideal - local).abs())).floor();
        let min_wait = u32::try_from(self.min_wait).unwrap_or(u32::MAX);
        (wait as u32).max(min_wait)
    }
}
