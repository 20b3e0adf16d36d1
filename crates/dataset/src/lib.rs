//! Labeled sample data model and CSV ingestion.
//!
//! A [`Sample`] pairs a sensor feature vector with a control target vector.
//! Training data arrives as a headered CSV file whose trailing columns hold
//! the targets; query vectors arrive as a headered CSV of features only.
//!
//! ```
//! use auriga_dataset::{Sample, ensure_uniform};
//!
//! let samples = vec![
//!     Sample::new(vec![0.0, 1.0], vec![0.5]),
//!     Sample::new(vec![2.0, 3.0], vec![0.7]),
//! ];
//! let shape = ensure_uniform(&samples).unwrap();
//! assert_eq!((shape.n_features, shape.n_targets), (2, 1));
//! ```

pub mod error;
pub mod reader;
pub mod sample;

pub use error::DatasetError;
pub use reader::{read_queries, read_samples};
pub use sample::{Sample, Shape, ensure_uniform};
