//! Error types for the auriga-dataset crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the auriga-dataset crate.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Returned when a sample collection is empty.
    #[error("dataset is empty")]
    Empty,

    /// Returned when a sample's feature vector length disagrees with the rest
    /// of the dataset.
    #[error("sample {index}: feature length {got} does not match expected {expected}")]
    FeatureLengthMismatch {
        /// Position of the offending sample.
        index: usize,
        /// Observed feature length.
        got: usize,
        /// Feature length of the first sample.
        expected: usize,
    },

    /// Returned when a sample's target vector length disagrees with the rest
    /// of the dataset.
    #[error("sample {index}: target length {got} does not match expected {expected}")]
    TargetLengthMismatch {
        /// Position of the offending sample.
        index: usize,
        /// Observed target length.
        got: usize,
        /// Target length of the first sample.
        expected: usize,
    },

    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a CSV record has too few columns for the requested
    /// target count.
    #[error("line {line}: expected at least {need} columns, got {got}")]
    TooFewColumns {
        /// 1-based line number in the file (header included).
        line: usize,
        /// Observed column count.
        got: usize,
        /// Minimum column count required.
        need: usize,
    },

    /// Returned when a CSV field fails to parse as a number.
    #[error("line {line}, column {column}: cannot parse '{value}' as a number")]
    Parse {
        /// 1-based line number in the file (header included).
        line: usize,
        /// 1-based column number.
        column: usize,
        /// The offending field text.
        value: String,
    },

    /// Wraps an error from the CSV reader.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
