use beeclust_core::telemetry::TickRecord;

use crate::metrics::ExperimentResult;
use crate::parameters::ParameterSet;

pub(crate) fn export_to_csv_impl(
    results: &[ExperimentResult],
    parameter_sets: &[ParameterSet],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    if results.len() != parameter_sets.len() {
        return Err(format!(
            "Results length ({}) doesn't match parameter_sets length ({})",
            results.len(),
            parameter_sets.len()
        )
        .into());
    }

    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "p_changedir",
        "p_wall",
        "p_meet",
        "k_temp",
        "k_stay",
        "t_ideal",
        "t_heater",
        "t_cooler",
        "t_env",
        "min_wait",
        "ticks",
        "forget_every",
        "final_score",
        "mean_score",
        "ideal_gap",
        "total_moves",
        "swarm_count",
        "largest_swarm",
        "bee_count",
        "clustering_ratio",
    ])?;

    for (result, set) in results.iter().zip(parameter_sets) {
        let config = &set.config;
        wtr.write_record(&[
            set.experiment_id.clone(),
            set.run_id.to_string(),
            set.seed.to_string(),
            config.p_changedir.to_string(),
            config.p_wall.to_string(),
            config.p_meet.to_string(),
            config.k_temp.to_string(),
            config.k_stay.to_string(),
            config.t_ideal.to_string(),
            config.t_heater.to_string(),
            config.t_cooler.to_string(),
            config.t_env.to_string(),
            config.min_wait.to_string(),
            set.ticks.to_string(),
            set.forget_every.map(|k| k.to_string()).unwrap_or_default(),
            result.final_score.to_string(),
            result.mean_score.to_string(),
            result.ideal_gap.to_string(),
            result.total_moves.to_string(),
            result.swarm_count.to_string(),
            result.largest_swarm.to_string(),
            result.bee_count.to_string(),
            result.clustering_ratio().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_tick_records_impl(
    records: &[TickRecord],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
