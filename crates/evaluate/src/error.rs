//! Error types for the auriga-evaluate crate.

use auriga_knn::KnnError;

/// Error type for all fallible operations in the auriga-evaluate crate.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// Returned when the test ratio is outside the open interval (0, 1).
    #[error("test ratio must be in (0, 1), got {ratio}")]
    InvalidTestRatio {
        /// The invalid ratio.
        ratio: f64,
    },

    /// Returned when a split would leave the training or test side empty.
    #[error("split of {n} samples at ratio {ratio} leaves an empty side")]
    EmptySplit {
        /// Total sample count.
        n: usize,
        /// Requested test ratio.
        ratio: f64,
    },

    /// A regressor failure during fit or predict.
    #[error(transparent)]
    Regressor(#[from] KnnError),
}
