//! Pre-defined parameter space configurations for experimentation.
//!
//! This module provides ready-to-use parameter space definitions that can be
//! easily selected for different types of experiments.

use crate::ParameterSpace;

/// Every tunable dimension at a few levels. Large: 3^5 * 2^2 points.
pub fn comprehensive_space() -> ParameterSpace {
    ParameterSpace::grid()
        .p_changedir(vec![0.1, 0.2, 0.4])
        .p_wall(vec![0.5, 0.8, 1.0])
        .p_meet(vec![0.5, 0.8, 1.0])
        .k_temp(vec![0.5, 0.9])
        .k_stay(vec![25.0, 50.0, 100.0])
        .t_ideal(vec![30.0, 35.0, 38.0])
        .min_wait(vec![1, 2])
}

/// Collision probabilities only; temperatures stay at their defaults.
pub fn collision_focused_space() -> ParameterSpace {
    ParameterSpace::grid()
        .p_changedir(vec![0.0, 0.1, 0.2, 0.3, 0.5])
        .p_wall(vec![0.2, 0.5, 0.8, 1.0])
        .p_meet(vec![0.2, 0.5, 0.8, 1.0])
}

/// How strongly the heat field and the wait formula shape clustering.
pub fn temperature_focused_space() -> ParameterSpace {
    ParameterSpace::grid()
        .k_temp(vec![0.3, 0.6, 0.9, 1.2])
        .k_stay(vec![10.0, 25.0, 50.0, 100.0])
        .t_ideal(vec![26.0, 30.0, 35.0, 39.0])
}

pub fn minimal_space() -> ParameterSpace {
    ParameterSpace::grid()
        .p_meet(vec![0.5, 0.8])
        .t_ideal(vec![35.0])
}
