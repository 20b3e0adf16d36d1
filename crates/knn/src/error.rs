//! Error types for the auriga-knn crate.

use auriga_dataset::DatasetError;
use auriga_kdtree::KdTreeError;
use auriga_normalize::NormalizeError;

/// Error type for all fallible operations in the auriga-knn crate.
#[derive(Debug, thiserror::Error)]
pub enum KnnError {
    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when k exceeds the training-set size.
    ///
    /// A larger k cannot be served exactly and is never silently capped.
    #[error("k = {k} exceeds training set size {n}")]
    KExceedsTrainingSet {
        /// Configured neighbor count.
        k: usize,
        /// Number of training samples.
        n: usize,
    },

    /// Returned when the distance-weighting epsilon is non-finite or
    /// non-positive.
    #[error("epsilon must be finite and positive, got {epsilon}")]
    InvalidEpsilon {
        /// The invalid epsilon value.
        epsilon: f64,
    },

    /// Returned when a median-aggregated target index is out of range.
    #[error("median target index {index} out of range for {n_targets} target dimensions")]
    MedianTargetOutOfRange {
        /// The offending target index.
        index: usize,
        /// Number of target dimensions in the training data.
        n_targets: usize,
    },

    /// A dataset shape violation.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// A normalization failure.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// A spatial-index failure.
    #[error(transparent)]
    Index(#[from] KdTreeError),
}
