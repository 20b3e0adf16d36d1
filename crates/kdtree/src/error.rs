//! Error types for the auriga-kdtree crate.

/// Error type for all fallible operations in the auriga-kdtree crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KdTreeError {
    /// Returned when construction is attempted on an empty sample set.
    #[error("cannot build a k-d tree from an empty sample set")]
    EmptySamples,

    /// Returned when samples disagree on feature dimensionality.
    #[error("sample {index}: feature length {got} does not match expected {expected}")]
    DimensionMismatch {
        /// Position of the offending sample in the build input.
        index: usize,
        /// Observed feature length.
        got: usize,
        /// Feature length of the first sample.
        expected: usize,
    },

    /// Returned when k is zero or exceeds the number of indexed samples.
    ///
    /// A k larger than the tree cannot be served exactly and is never
    /// silently capped.
    #[error("k must be in [1, {len}], got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
        /// Number of samples in the tree.
        len: usize,
    },

    /// Returned when a query vector's length disagrees with the indexed
    /// dimensionality.
    #[error("query length {got} does not match indexed dimensionality {expected}")]
    QueryDimensionMismatch {
        /// Observed query length.
        got: usize,
        /// Indexed feature dimensionality.
        expected: usize,
    },
}
