use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::constraints::is_valid_config;
use super::{ParameterSet, ParameterSpace, SEED_MIX};

fn pick<T: Copy>(rng: &mut StdRng, values: &[T], base: T) -> T {
    if values.is_empty() {
        base
    } else {
        values[rng.gen_range(0..values.len())]
    }
}

impl ParameterSpace {
    /// Generate random parameter sets (Monte Carlo sampling).
    ///
    /// Samples `count` parameter sets randomly from the defined space. If
    /// duplicates are encountered, continues sampling until `count` unique
    /// sets are generated or the attempt limit is reached, so a small space
    /// can return fewer than `count` sets.
    pub fn sample_random(&self, count: usize, seed: u64) -> Vec<ParameterSet> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut parameter_sets = Vec::new();
        let mut seen = HashSet::new();
        let mut attempts = 0;
        const MAX_ATTEMPTS: usize = 10000;

        while parameter_sets.len() < count && attempts < MAX_ATTEMPTS {
            attempts += 1;
            let base = self.base;
            let config = base
                .with_p_changedir(pick(&mut rng, &self.p_changedir, base.p_changedir))
                .with_p_wall(pick(&mut rng, &self.p_wall, base.p_wall))
                .with_p_meet(pick(&mut rng, &self.p_meet, base.p_meet))
                .with_k_temp(pick(&mut rng, &self.k_temp, base.k_temp))
                .with_k_stay(pick(&mut rng, &self.k_stay, base.k_stay))
                .with_t_ideal(pick(&mut rng, &self.t_ideal, base.t_ideal))
                .with_min_wait(pick(&mut rng, &self.min_wait, base.min_wait));

            if !is_valid_config(&config) {
                continue;
            }
            // f64 is not Hash; the debug form identifies a combination.
            if !seen.insert(format!("{:?}", config)) {
                continue;
            }

            let seed_value = seed
                .wrapping_add(parameter_sets.len() as u64)
                .wrapping_mul(SEED_MIX);
            parameter_sets.push(
                ParameterSet::new(
                    config,
                    self.ticks,
                    format!("random_{}", parameter_sets.len()),
                    0,
                    seed_value,
                )
                .with_forget_every(self.forget_every),
            );
        }

        parameter_sets
    }
}
