//! Configuration for the k-NN regressor.

use crate::error::KnnError;

/// How continuous target dimensions are averaged across neighbors.
#[derive(Debug, Clone, PartialEq)]
pub enum Weighting {
    /// Every neighbor contributes equally.
    Uniform,
    /// Closer neighbors dominate: weight `1/(distance + epsilon)`.
    ///
    /// Epsilon keeps the weight finite when the query coincides with a
    /// training point.
    InverseDistance {
        /// Additive floor on the distance before inversion.
        epsilon: f64,
    },
}

impl Default for Weighting {
    fn default() -> Self {
        Weighting::InverseDistance { epsilon: 1e-6 }
    }
}

/// Configuration for a [`KnnRegressor`](crate::KnnRegressor).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use auriga_knn::{KnnConfig, Weighting};
///
/// let config = KnnConfig::new(21)
///     .with_weighting(Weighting::Uniform)
///     .with_median_targets(vec![3]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct KnnConfig {
    /// Number of nearest neighbors to aggregate.
    k: usize,
    /// Averaging scheme for continuous target dimensions.
    weighting: Weighting,
    /// Target dimensions aggregated by median instead of mean.
    median_targets: Vec<usize>,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: inverse-distance weighting with `epsilon = 1e-6`, no
    /// median-aggregated targets.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            weighting: Weighting::default(),
            median_targets: Vec::new(),
        }
    }

    /// Sets the averaging scheme for continuous target dimensions.
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Marks target dimensions as discrete-ordinal: aggregated by median
    /// with a lower-central tie-break.
    pub fn with_median_targets(mut self, targets: Vec<usize>) -> Self {
        self.median_targets = targets;
        self
    }

    /// Returns the neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the averaging scheme.
    pub fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    /// Returns the median-aggregated target dimensions.
    pub fn median_targets(&self) -> &[usize] {
        &self.median_targets
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k is zero or the weighting epsilon is non-finite
    /// or non-positive. The upper bound on k and the range of the median
    /// target indices depend on the training data and are checked at fit
    /// time.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        if let Weighting::InverseDistance { epsilon } = self.weighting
            && (!epsilon.is_finite() || epsilon <= 0.0)
        {
            return Err(KnnError::InvalidEpsilon { epsilon });
        }
        Ok(())
    }
}
