//! Feature and target scaling for distance-based regression.
//!
//! Raw sensor readings live on wildly different scales (a range-finder in
//! metres, an engine in RPM, an angle in radians); Euclidean distance is
//! only meaningful after every dimension is mapped into `[0, 1]`. Each
//! feature dimension carries an explicit [`ScalePolicy`]:
//!
//! | Policy | Map | Use case |
//! |--------|-----|----------|
//! | Learned | `(v - min)/(max - min)` from fitted data | Unbounded sensors |
//! | Fixed | same map over a configured physical range | Bounded sensors |
//! | Angular | fixed `[-π, π]` range | Heading angles |
//!
//! Fixed ranges are preferred where the physics bounds the sensor: learned
//! min/max shift between datasets, fixed ranges keep the scaling identical
//! across runs. Target dimensions always use learned bounds, so predictions
//! can be mapped back to raw control values by the inverse transform.
//!
//! # Quick start
//!
//! ```
//! use auriga_dataset::Sample;
//! use auriga_normalize::{FeatureSpec, Normalizer, OutOfRangePolicy, ScalePolicy};
//!
//! let samples = vec![
//!     Sample::new(vec![0.0], vec![10.0]),
//!     Sample::new(vec![4.0], vec![30.0]),
//! ];
//! let specs = vec![FeatureSpec::new("speed", ScalePolicy::Learned)];
//!
//! let normalizer = Normalizer::fit(&samples, &specs, OutOfRangePolicy::Exclude).unwrap();
//! let q = normalizer.transform_features(&[2.0]).unwrap();
//! assert_eq!(q, vec![0.5]);
//! ```

pub mod bounds;
pub mod error;
pub mod normalizer;
pub mod policy;

pub use bounds::Bounds;
pub use error::NormalizeError;
pub use normalizer::Normalizer;
pub use policy::{FeatureSpec, OutOfRangePolicy, ScalePolicy};
