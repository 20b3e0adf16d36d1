//! Error types for the auriga-normalize crate.

/// Error type for all fallible operations in the auriga-normalize crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NormalizeError {
    /// Returned when fitting is attempted on an empty sample set.
    #[error("cannot fit normalizer on an empty training set")]
    EmptyTrainingSet,

    /// Returned when the feature spec table length does not match the data.
    #[error("feature spec table has {specs} entries but samples have {features} features")]
    SpecLengthMismatch {
        /// Number of entries in the spec table.
        specs: usize,
        /// Number of feature dimensions in the data.
        features: usize,
    },

    /// Returned when a fixed scaling range is empty or inverted.
    #[error("feature '{name}': fixed range [{min}, {max}] is not a valid interval")]
    InvalidFixedRange {
        /// Name of the offending feature.
        name: String,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },

    /// Returned when a declared valid range is empty or inverted.
    #[error("feature '{name}': valid range [{min}, {max}] is not a valid interval")]
    InvalidValidRange {
        /// Name of the offending feature.
        name: String,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },

    /// Returned when a feature vector's length disagrees with the fitted
    /// dimensionality.
    #[error("feature vector length {got} does not match fitted dimensionality {expected}")]
    FeatureDimensionMismatch {
        /// Observed vector length.
        got: usize,
        /// Fitted feature dimensionality.
        expected: usize,
    },

    /// Returned when a target vector's length disagrees with the fitted
    /// dimensionality.
    #[error("target vector length {got} does not match fitted dimensionality {expected}")]
    TargetDimensionMismatch {
        /// Observed vector length.
        got: usize,
        /// Fitted target dimensionality.
        expected: usize,
    },
}
