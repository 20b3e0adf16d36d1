//! Neighbor target aggregation: weighted means and discrete medians.

use auriga_kdtree::Neighbor;

use crate::config::Weighting;

/// Aggregates neighbor targets into one normalized prediction vector.
///
/// Continuous dimensions take the weighted mean; dimensions listed in
/// `median_targets` take the lower-central median instead.
///
/// # Panics
///
/// Debug-asserts a non-empty neighbor set and in-range median indices; both
/// are guaranteed by regressor validation.
pub(crate) fn aggregate(
    neighbors: &[Neighbor<'_>],
    n_targets: usize,
    weighting: &Weighting,
    median_targets: &[usize],
) -> Vec<f64> {
    debug_assert!(!neighbors.is_empty());
    debug_assert!(median_targets.iter().all(|&i| i < n_targets));

    let weights: Vec<f64> = neighbors
        .iter()
        .map(|n| match *weighting {
            Weighting::Uniform => 1.0,
            Weighting::InverseDistance { epsilon } => 1.0 / (n.distance + epsilon),
        })
        .collect();
    let total_weight: f64 = weights.iter().sum();

    (0..n_targets)
        .map(|dim| {
            if median_targets.contains(&dim) {
                let mut values: Vec<f64> =
                    neighbors.iter().map(|n| n.sample.targets[dim]).collect();
                lower_median(&mut values)
            } else {
                neighbors
                    .iter()
                    .zip(weights.iter())
                    .map(|(n, w)| w * n.sample.targets[dim])
                    .sum::<f64>()
                    / total_weight
            }
        })
        .collect()
}

/// Median with a deterministic tie-break: for an even count, the lower of
/// the two central values.
///
/// Picking an actually-occurring value matters for discrete controls; the
/// usual midpoint average could select a class that does not exist.
pub(crate) fn lower_median(values: &mut [f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.sort_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 1 { values[n / 2] } else { values[n / 2 - 1] }
}
