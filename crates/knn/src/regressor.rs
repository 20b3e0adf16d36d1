//! The k-NN regressor: normalizer + spatial index + aggregation.

use auriga_dataset::{Sample, ensure_uniform};
use auriga_kdtree::KdTree;
use auriga_normalize::{FeatureSpec, Normalizer, OutOfRangePolicy};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::config::KnnConfig;
use crate::error::KnnError;

/// A fitted k-NN regressor.
///
/// Owns the normalizer, the spatial index, and the configuration. Immutable
/// after [`fit`](Self::fit); every [`predict`](Self::predict) call is
/// independent and read-only, so a fitted regressor can serve concurrent
/// callers without locking.
#[derive(Debug)]
pub struct KnnRegressor {
    normalizer: Normalizer,
    index: KdTree,
    config: KnnConfig,
}

impl KnnRegressor {
    /// Fits the full pipeline on a training set.
    ///
    /// Validates the configuration against the data, fits per-dimension
    /// scaling bounds, applies the one-time destructive normalization pass,
    /// and builds the spatial index. Runs once at startup; O(n log n).
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid k (`k < 1` or
    /// `k > samples.len()`), a malformed dataset, a bad scaling spec, or an
    /// out-of-range median target index. Nothing is ever silently clamped.
    pub fn fit(
        mut samples: Vec<Sample>,
        specs: &[FeatureSpec],
        out_of_range: OutOfRangePolicy,
        config: KnnConfig,
    ) -> Result<Self, KnnError> {
        config.validate()?;

        let shape = ensure_uniform(&samples)?;
        if config.k() > samples.len() {
            return Err(KnnError::KExceedsTrainingSet {
                k: config.k(),
                n: samples.len(),
            });
        }
        for &index in config.median_targets() {
            if index >= shape.n_targets {
                return Err(KnnError::MedianTargetOutOfRange {
                    index,
                    n_targets: shape.n_targets,
                });
            }
        }

        let normalizer = Normalizer::fit(&samples, specs, out_of_range)?;
        normalizer.normalize_samples(&mut samples)?;
        let index = KdTree::build(samples)?;

        debug!(
            n_samples = index.len(),
            n_features = shape.n_features,
            n_targets = shape.n_targets,
            k = config.k(),
            "fitted k-NN regressor"
        );

        Ok(Self {
            normalizer,
            index,
            config,
        })
    }

    /// Predicts the denormalized target vector for one raw feature vector.
    ///
    /// Normalizes the query, retrieves its exact k nearest neighbors,
    /// aggregates their targets (weighted mean, or median for discrete
    /// dimensions), and maps the aggregate back through the target bounds.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::Normalize`] if the query length disagrees with
    /// the trained dimensionality; no partial computation is performed.
    pub fn predict(&self, features: &[f64]) -> Result<Vec<f64>, KnnError> {
        let query = self.normalizer.transform_features(features)?;
        let neighbors = self.index.k_nearest(&query, self.config.k())?;

        let aggregated = aggregate(
            &neighbors,
            self.normalizer.n_targets(),
            self.config.weighting(),
            self.config.median_targets(),
        );

        Ok(self.normalizer.inverse_transform_targets(&aggregated)?)
    }

    /// Configured neighbor count.
    pub fn k(&self) -> usize {
        self.config.k()
    }

    /// Number of indexed training samples.
    pub fn n_samples(&self) -> usize {
        self.index.len()
    }

    /// Trained feature dimensionality.
    pub fn n_features(&self) -> usize {
        self.normalizer.n_features()
    }

    /// Trained target dimensionality.
    pub fn n_targets(&self) -> usize {
        self.normalizer.n_targets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Weighting;
    use approx::assert_abs_diff_eq;
    use auriga_normalize::ScalePolicy;

    fn line_samples() -> Vec<Sample> {
        (0..5)
            .map(|i| Sample::new(vec![i as f64], vec![(i * 10) as f64]))
            .collect()
    }

    fn line_specs() -> Vec<FeatureSpec> {
        vec![FeatureSpec::new("x", ScalePolicy::Learned)]
    }

    #[test]
    fn test_line_unweighted_mean() {
        let config = KnnConfig::new(3).with_weighting(Weighting::Uniform);
        let r = KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config)
            .unwrap();

        // Neighbors of 2.1 are 1, 2, 3 -> mean target 20.
        let p = r.predict(&[2.1]).unwrap();
        assert_abs_diff_eq!(p[0], 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_exact_hit_with_inverse_distance() {
        let config = KnnConfig::new(3);
        let r = KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config)
            .unwrap();

        // Query on a training point: the coincident neighbor dominates.
        let p = r.predict(&[3.0]).unwrap();
        assert_abs_diff_eq!(p[0], 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_k_exceeds_training_set() {
        let config = KnnConfig::new(6);
        let result =
            KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config);
        assert!(matches!(
            result,
            Err(KnnError::KExceedsTrainingSet { k: 6, n: 5 })
        ));
    }

    #[test]
    fn test_wrong_query_shape() {
        let config = KnnConfig::new(3);
        let r = KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config)
            .unwrap();
        assert!(matches!(
            r.predict(&[1.0, 2.0]),
            Err(KnnError::Normalize(_))
        ));
    }

    #[test]
    fn test_median_target_out_of_range() {
        let config = KnnConfig::new(3).with_median_targets(vec![1]);
        let result =
            KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config);
        assert!(matches!(
            result,
            Err(KnnError::MedianTargetOutOfRange {
                index: 1,
                n_targets: 1
            })
        ));
    }

    #[test]
    fn test_empty_training_set() {
        let config = KnnConfig::new(1);
        let result = KnnRegressor::fit(Vec::new(), &[], OutOfRangePolicy::Exclude, config);
        assert!(matches!(result, Err(KnnError::Dataset(_))));
    }

    #[test]
    fn test_accessors() {
        let config = KnnConfig::new(2);
        let r = KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config)
            .unwrap();
        assert_eq!(r.k(), 2);
        assert_eq!(r.n_samples(), 5);
        assert_eq!(r.n_features(), 1);
        assert_eq!(r.n_targets(), 1);
    }
}
