use crate::metrics::ExperimentResult;
use crate::parameters::ParameterSet;

pub(crate) fn find_best_index_by_score(results: &[ExperimentResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.final_score
                .partial_cmp(&b.final_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(index, _)| index)
}

pub(crate) fn find_best_parameters_impl<'a>(
    results: &'a [ExperimentResult],
    parameter_sets: &'a [ParameterSet],
) -> Option<&'a ParameterSet> {
    if results.is_empty() || results.len() != parameter_sets.len() {
        return None;
    }

    let best_idx = find_best_index_by_score(results)?;
    parameter_sets.get(best_idx)
}
