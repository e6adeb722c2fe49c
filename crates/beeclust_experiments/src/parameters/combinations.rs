use beeclust_core::config::BeeClustConfig;

use super::ParameterSpace;

/// Values to explore for one dimension; the base value when none were given.
fn values_or<T: Copy>(values: &[T], base: T) -> Vec<T> {
    if values.is_empty() {
        vec![base]
    } else {
        values.to_vec()
    }
}

/// Expand every partial configuration with each value of one dimension.
fn expand<T: Copy>(
    configs: Vec<BeeClustConfig>,
    values: &[T],
    apply: impl Fn(BeeClustConfig, T) -> BeeClustConfig,
) -> Vec<BeeClustConfig> {
    configs
        .into_iter()
        .flat_map(|config| values.iter().map(move |&value| (config, value)))
        .map(|(config, value)| apply(config, value))
        .collect()
}

/// Cartesian product over all dimensions, `p_changedir` varying slowest.
pub(super) fn cartesian_product(space: &ParameterSpace) -> Vec<BeeClustConfig> {
    let base = space.base;
    let mut configs = vec![base];
    configs = expand(
        configs,
        &values_or(&space.p_changedir, base.p_changedir),
        BeeClustConfig::with_p_changedir,
    );
    configs = expand(configs, &values_or(&space.p_wall, base.p_wall), BeeClustConfig::with_p_wall);
    configs = expand(configs, &values_or(&space.p_meet, base.p_meet), BeeClustConfig::with_p_meet);
    configs = expand(configs, &values_or(&space.k_temp, base.k_temp), BeeClustConfig::with_k_temp);
    configs = expand(configs, &values_or(&space.k_stay, base.k_stay), BeeClustConfig::with_k_stay);
    configs = expand(
        configs,
        &values_or(&space.t_ideal, base.t_ideal),
        BeeClustConfig::with_t_ideal,
    );
    expand(
        configs,
        &values_or(&space.min_wait, base.min_wait),
        BeeClustConfig::with_min_wait,
    )
}
