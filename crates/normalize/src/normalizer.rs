//! Fit-once normalizer over a labeled training set.

use auriga_dataset::Sample;
use tracing::debug;

use crate::bounds::Bounds;
use crate::error::NormalizeError;
use crate::policy::{FeatureSpec, OutOfRangePolicy};

/// Per-dimension scaling state, fitted once and read-only afterward.
///
/// Feature dimensions resolve their bounds from the policy table: fixed
/// policies keep their configured interval, learned policies take min/max
/// over the valid readings in the training set. Target dimensions always
/// learn their bounds, so the inverse target transform can map aggregated
/// predictions back to raw control values.
#[derive(Debug, Clone)]
pub struct Normalizer {
    specs: Vec<FeatureSpec>,
    feature_bounds: Vec<Bounds>,
    target_bounds: Vec<Bounds>,
    out_of_range: OutOfRangePolicy,
}

impl Normalizer {
    /// Fits scaling bounds over a training set.
    ///
    /// Learned feature bounds either skip readings outside the spec's valid
    /// range (sentinels, NaN, infinities) or pin them into it, per the
    /// out-of-range flag. Target readings are never excluded.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::EmptyTrainingSet`] for an empty slice,
    /// [`NormalizeError::SpecLengthMismatch`] if the policy table does not
    /// cover every feature dimension, and an interval error for a
    /// misconfigured spec.
    pub fn fit(
        samples: &[Sample],
        specs: &[FeatureSpec],
        out_of_range: OutOfRangePolicy,
    ) -> Result<Self, NormalizeError> {
        let first = samples.first().ok_or(NormalizeError::EmptyTrainingSet)?;
        let n_features = first.n_features();
        let n_targets = first.n_targets();

        if specs.len() != n_features {
            return Err(NormalizeError::SpecLengthMismatch {
                specs: specs.len(),
                features: n_features,
            });
        }
        for spec in specs {
            spec.validate()?;
        }

        let feature_bounds = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| match spec.policy().fixed_bounds() {
                Some(bounds) => bounds,
                None => {
                    let readings = samples.iter().map(|s| s.features[i]);
                    match out_of_range {
                        OutOfRangePolicy::Exclude => {
                            Bounds::from_values(readings.filter(|&v| spec.is_valid(v)))
                        }
                        OutOfRangePolicy::Clamp => Bounds::from_values(
                            readings
                                .filter(|v| v.is_finite())
                                .map(|v| spec.effective_value(v, OutOfRangePolicy::Clamp)),
                        ),
                    }
                }
            })
            .collect();

        let target_bounds = (0..n_targets)
            .map(|i| Bounds::from_values(samples.iter().map(|s| s.targets[i])))
            .collect();

        debug!(
            n_samples = samples.len(),
            n_features, n_targets, "fitted normalizer"
        );

        Ok(Self {
            specs: specs.to_vec(),
            feature_bounds,
            target_bounds,
            out_of_range,
        })
    }

    /// Fitted feature dimensionality.
    pub fn n_features(&self) -> usize {
        self.feature_bounds.len()
    }

    /// Fitted target dimensionality.
    pub fn n_targets(&self) -> usize {
        self.target_bounds.len()
    }

    /// Resolved bounds for each feature dimension.
    pub fn feature_bounds(&self) -> &[Bounds] {
        &self.feature_bounds
    }

    /// Learned bounds for each target dimension.
    pub fn target_bounds(&self) -> &[Bounds] {
        &self.target_bounds
    }

    /// Maps a raw feature vector into normalized space.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::FeatureDimensionMismatch`] if the vector
    /// length disagrees with the fitted dimensionality; nothing is computed
    /// in that case.
    pub fn transform_features(&self, features: &[f64]) -> Result<Vec<f64>, NormalizeError> {
        if features.len() != self.n_features() {
            return Err(NormalizeError::FeatureDimensionMismatch {
                got: features.len(),
                expected: self.n_features(),
            });
        }
        Ok(features
            .iter()
            .zip(self.specs.iter().zip(self.feature_bounds.iter()))
            .map(|(&v, (spec, bounds))| bounds.apply(spec.effective_value(v, self.out_of_range)))
            .collect())
    }

    /// Maps a raw target vector into normalized space.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::TargetDimensionMismatch`] on a length
    /// disagreement.
    pub fn transform_targets(&self, targets: &[f64]) -> Result<Vec<f64>, NormalizeError> {
        if targets.len() != self.n_targets() {
            return Err(NormalizeError::TargetDimensionMismatch {
                got: targets.len(),
                expected: self.n_targets(),
            });
        }
        Ok(targets
            .iter()
            .zip(self.target_bounds.iter())
            .map(|(&v, bounds)| bounds.apply(v))
            .collect())
    }

    /// Maps a normalized target vector back to raw control values.
    ///
    /// Exact inverse of [`transform_targets`](Self::transform_targets) up to
    /// floating-point error whenever the dimension is non-degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::TargetDimensionMismatch`] on a length
    /// disagreement.
    pub fn inverse_transform_targets(&self, normalized: &[f64]) -> Result<Vec<f64>, NormalizeError> {
        if normalized.len() != self.n_targets() {
            return Err(NormalizeError::TargetDimensionMismatch {
                got: normalized.len(),
                expected: self.n_targets(),
            });
        }
        Ok(normalized
            .iter()
            .zip(self.target_bounds.iter())
            .map(|(&v, bounds)| bounds.invert(v))
            .collect())
    }

    /// Replaces every sample's features and targets with their normalized
    /// counterparts.
    ///
    /// This is the one-time destructive pass applied to the training set
    /// before it enters the spatial index.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error on the first sample whose shape
    /// disagrees with the fitted dimensionality; earlier samples will
    /// already have been normalized.
    pub fn normalize_samples(&self, samples: &mut [Sample]) -> Result<(), NormalizeError> {
        for s in samples.iter_mut() {
            s.features = self.transform_features(&s.features)?;
            s.targets = self.transform_targets(&s.targets)?;
        }
        Ok(())
    }
}
