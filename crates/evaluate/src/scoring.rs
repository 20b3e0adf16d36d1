//! Prediction scoring: MSE and discrete action-band accuracy.

/// Aggregate scores over a held-out set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Number of scored samples.
    pub n: usize,
    /// Mean squared error, averaged over target dimensions and samples.
    pub mse: f64,
    /// Fraction of samples whose every target falls in the same action band
    /// as the ground truth, in [0, 1].
    pub discrete_accuracy: f64,
}

/// Mean squared error between one prediction and its ground truth.
///
/// # Panics
///
/// Debug-asserts equal, non-zero lengths.
pub fn mean_squared_error(predicted: &[f64], actual: &[f64]) -> f64 {
    debug_assert_eq!(predicted.len(), actual.len());
    debug_assert!(!predicted.is_empty());
    predicted
        .iter()
        .zip(actual.iter())
        .map(|(p, a)| (p - a) * (p - a))
        .sum::<f64>()
        / predicted.len() as f64
}

/// Buckets a normalized control value into one of three empirical bands:
/// 0 = no action (< 0.1), 1 = light action (< 0.6), 2 = strong action.
pub fn action_band(value: f64) -> u8 {
    if value < 0.1 {
        0
    } else if value < 0.6 {
        1
    } else {
        2
    }
}

/// Scores `(predicted, actual)` pairs.
///
/// An empty input yields a zeroed summary.
pub fn score(pairs: &[(&[f64], &[f64])]) -> ScoreSummary {
    if pairs.is_empty() {
        return ScoreSummary {
            n: 0,
            mse: 0.0,
            discrete_accuracy: 0.0,
        };
    }

    let mut total_mse = 0.0;
    let mut band_matches = 0usize;
    for &(predicted, actual) in pairs {
        total_mse += mean_squared_error(predicted, actual);
        let all_match = predicted
            .iter()
            .zip(actual.iter())
            .all(|(&p, &a)| action_band(p) == action_band(a));
        if all_match {
            band_matches += 1;
        }
    }

    let n = pairs.len();
    ScoreSummary {
        n,
        mse: total_mse / n as f64,
        discrete_accuracy: band_matches as f64 / n as f64,
    }
}
