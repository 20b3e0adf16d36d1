//! k-nearest-neighbor regression over a spatial index.
//!
//! The regressor ties the pipeline together: it fits a normalizer over the
//! training set, indexes the normalized samples in a k-d tree, and answers
//! each prediction by normalizing the query, retrieving its exact k nearest
//! neighbors, aggregating their targets, and denormalizing the result.
//!
//! | Target kind | Aggregation |
//! |-------------|-------------|
//! | Continuous | inverse-distance-weighted mean, `w = 1/(d + ε)` (or plain mean) |
//! | Discrete-ordinal | median, lower-central tie-break |
//!
//! Discrete controls (a gear number) must never be averaged into values that
//! do not exist; the median always selects an occurring class.
//!
//! # Quick start
//!
//! ```
//! use auriga_dataset::Sample;
//! use auriga_knn::{KnnConfig, KnnRegressor, Weighting};
//! use auriga_normalize::{FeatureSpec, OutOfRangePolicy, ScalePolicy};
//!
//! let samples: Vec<Sample> = (0..5)
//!     .map(|i| Sample::new(vec![i as f64], vec![(i * 10) as f64]))
//!     .collect();
//! let specs = vec![FeatureSpec::new("x", ScalePolicy::Learned)];
//! let config = KnnConfig::new(3).with_weighting(Weighting::Uniform);
//!
//! let regressor =
//!     KnnRegressor::fit(samples, &specs, OutOfRangePolicy::Exclude, config).unwrap();
//! let prediction = regressor.predict(&[2.1]).unwrap();
//! assert!((prediction[0] - 20.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod regressor;

pub(crate) mod aggregate;

pub use config::{KnnConfig, Weighting};
pub use error::KnnError;
pub use regressor::KnnRegressor;
