//! Hold-out evaluation of the k-NN regressor.
//!
//! Shuffles a labeled dataset with a seeded RNG, splits off a test
//! fraction, fits a regressor on the remainder, and scores its predictions
//! on the held-out samples: mean squared error over the target vector plus
//! discrete action-band accuracy over the continuous control outputs.
//!
//! ```
//! use auriga_dataset::Sample;
//! use auriga_evaluate::evaluate_holdout;
//! use auriga_knn::KnnConfig;
//! use auriga_normalize::{FeatureSpec, OutOfRangePolicy, ScalePolicy};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let samples: Vec<Sample> = (0..50)
//!     .map(|i| Sample::new(vec![i as f64], vec![i as f64 * 0.01]))
//!     .collect();
//! let specs = vec![FeatureSpec::new("x", ScalePolicy::Learned)];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let report = evaluate_holdout(
//!     samples,
//!     &specs,
//!     OutOfRangePolicy::Exclude,
//!     KnnConfig::new(3),
//!     0.2,
//!     &mut rng,
//! )
//! .unwrap();
//! assert_eq!(report.summary.n, 10);
//! ```

pub mod error;
pub mod scoring;
pub mod split;

use auriga_dataset::Sample;
use auriga_knn::{KnnConfig, KnnRegressor};
use auriga_normalize::{FeatureSpec, OutOfRangePolicy};
use rand::Rng;
use tracing::info;

pub use error::EvaluateError;
pub use scoring::{ScoreSummary, action_band, mean_squared_error, score};
pub use split::holdout_split;

/// One held-out prediction next to its ground truth.
#[derive(Debug, Clone)]
pub struct PredictionRecord {
    /// Raw feature vector of the held-out sample.
    pub features: Vec<f64>,
    /// Regressor output.
    pub predicted: Vec<f64>,
    /// Recorded target vector.
    pub actual: Vec<f64>,
}

/// Result of a hold-out evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    /// Aggregate scores over the held-out set.
    pub summary: ScoreSummary,
    /// Per-sample predictions, in held-out order.
    pub predictions: Vec<PredictionRecord>,
}

/// Shuffles, splits, fits on the training side, and scores predictions on
/// the held-out side.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidTestRatio`] or
/// [`EvaluateError::EmptySplit`] for a bad split, and
/// [`EvaluateError::Regressor`] if fitting or predicting fails (e.g. `k`
/// exceeds the training side).
pub fn evaluate_holdout(
    samples: Vec<Sample>,
    specs: &[FeatureSpec],
    out_of_range: OutOfRangePolicy,
    config: KnnConfig,
    test_ratio: f64,
    rng: &mut impl Rng,
) -> Result<EvaluationReport, EvaluateError> {
    let (train, test) = holdout_split(samples, test_ratio, rng)?;
    info!(
        n_train = train.len(),
        n_test = test.len(),
        k = config.k(),
        "hold-out evaluation"
    );

    let regressor = KnnRegressor::fit(train, specs, out_of_range, config)?;

    let mut predictions = Vec::with_capacity(test.len());
    for sample in &test {
        let predicted = regressor.predict(&sample.features)?;
        predictions.push(PredictionRecord {
            features: sample.features.clone(),
            predicted,
            actual: sample.targets.clone(),
        });
    }

    let pairs: Vec<(&[f64], &[f64])> = predictions
        .iter()
        .map(|p| (p.predicted.as_slice(), p.actual.as_slice()))
        .collect();
    let summary = score(&pairs);

    Ok(EvaluationReport {
        summary,
        predictions,
    })
}
