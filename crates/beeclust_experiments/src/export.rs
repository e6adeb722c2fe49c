//! Result export and analysis utilities.
//!
//! This module provides functions to export experiment results and per-tick
//! telemetry to CSV and JSON, and to find the best parameter combination.

use std::path::Path;

use beeclust_core::telemetry::TickRecord;

use crate::metrics::ExperimentResult;
use crate::parameters::ParameterSet;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export experiment results to JSON format.
///
/// Creates a JSON file with a pretty-printed array of all results.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    results: &[ExperimentResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Export experiment results with parameters to CSV format.
///
/// Creates a CSV file with columns for all parameters and all metrics.
/// Parameters and results are paired by index (results[i] corresponds to parameter_sets[i]).
///
/// # Errors
///
/// Returns an error if there is nothing to export, if the two slices differ
/// in length, or if file creation or CSV writing fails.
pub fn export_to_csv(
    results: &[ExperimentResult],
    parameter_sets: &[ParameterSet],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(results, parameter_sets, file)
}

/// Export per-tick telemetry to CSV, one row per tick.
pub fn export_tick_records_csv(
    records: &[TickRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    csv::export_tick_records_impl(records, file)
}

/// Find the parameter set whose run ended with the highest score.
///
/// Returns `None` if inputs are empty or mismatched.
pub fn find_best_parameters<'a>(
    results: &'a [ExperimentResult],
    parameter_sets: &'a [ParameterSet],
) -> Option<&'a ParameterSet> {
    ranking::find_best_parameters_impl(results, parameter_sets)
}

/// Index of the result with the highest final score, `None` if empty.
pub fn find_best_result_index(results: &[ExperimentResult]) -> Option<usize> {
    ranking::find_best_index_by_score(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterSpace;
    use tempfile::NamedTempFile;

    fn result(final_score: f64) -> ExperimentResult {
        ExperimentResult {
            final_score,
            mean_score: final_score - 1.0,
            ideal_gap: (35.0 - final_score).abs(),
            total_moves: 120,
            swarm_count: 3,
            largest_swarm: 5,
            bee_count: 9,
            ticks: 100,
        }
    }

    #[test]
    fn test_export_to_json() {
        let results = vec![result(30.5)];
        let file = NamedTempFile::new().unwrap();
        export_to_json(&results, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("final_score"));
        let back: Vec<ExperimentResult> = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn test_export_to_csv() {
        let sets = ParameterSpace::grid().p_wall(vec![0.4, 0.6]).generate();
        let results = vec![result(25.0), result(28.0)];
        let file = NamedTempFile::new().unwrap();
        export_to_csv(&results, &sets, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("experiment_id,run_id,seed,p_changedir"));
        assert!(lines[1].starts_with("exp_0,0,"));
        assert!(lines[2].contains(",0.6,"));
    }

    #[test]
    fn test_export_to_csv_rejects_mismatch_and_empty() {
        let sets = ParameterSpace::grid().generate();
        let file = NamedTempFile::new().unwrap();
        assert!(export_to_csv(&[], &sets, file.path()).is_err());
        assert!(export_to_csv(&[result(1.0), result(2.0)], &sets, file.path()).is_err());
    }

    #[test]
    fn test_export_tick_records() {
        let records = vec![
            TickRecord {
                tick: 1,
                moved: 4,
                swarm_count: 2,
                largest_swarm: 3,
                score: 24.5,
            },
            TickRecord {
                tick: 2,
                moved: 1,
                swarm_count: 1,
                largest_swarm: 5,
                score: 26.0,
            },
        ];
        let file = NamedTempFile::new().unwrap();
        export_tick_records_csv(&records, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "tick,moved,swarm_count,largest_swarm,score");
        assert_eq!(lines[2], "2,1,1,5,26.0");
    }

    #[test]
    fn test_find_best_result_index() {
        let results = vec![result(25.0), result(33.0), result(31.0)];
        assert_eq!(find_best_result_index(&results), Some(1));
        assert_eq!(find_best_result_index(&[]), None);

        let sets = ParameterSpace::grid().p_meet(vec![0.1, 0.2, 0.3]).generate();
        let best = find_best_parameters(&results, &sets).unwrap();
        assert_eq!(best.config.p_meet, 0.2);
        assert!(find_best_parameters(&results, &sets[..2]).is_none());
    }
}
