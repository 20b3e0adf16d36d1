//! Per-dimension scaling policy table.

use std::f64::consts::PI;

use crate::bounds::Bounds;
use crate::error::NormalizeError;

/// How one feature dimension is mapped into `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScalePolicy {
    /// Bounds learned from the training data (min/max over valid readings).
    #[default]
    Learned,
    /// A configured physical range, independent of the observed data.
    Fixed {
        /// Lower end of the physical range.
        min: f64,
        /// Upper end of the physical range.
        max: f64,
    },
    /// A heading angle in `[-π, π]`.
    Angular,
}

impl ScalePolicy {
    /// Returns the bounds this policy fixes in advance, or `None` for
    /// data-driven policies.
    pub(crate) fn fixed_bounds(&self) -> Option<Bounds> {
        match *self {
            ScalePolicy::Learned => None,
            ScalePolicy::Fixed { min, max } => Some(Bounds::new(min, max)),
            ScalePolicy::Angular => Some(Bounds::new(-PI, PI)),
        }
    }
}

/// What fitting does with readings outside a feature's valid range.
///
/// Sensors emit sentinel values (an off-track range-finder reports `-1.0`);
/// letting those into min/max fitting would stretch the scale of the whole
/// dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutOfRangePolicy {
    /// Skip invalid readings when fitting bounds; pass them through the
    /// linear map untouched at transform time.
    #[default]
    Exclude,
    /// Pin readings into the valid range before fitting and transforming.
    Clamp,
}

/// Scaling configuration for one feature dimension.
///
/// The full per-dimension table is the single place where scaling behavior
/// is declared; no other component special-cases individual sensors.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpec {
    name: String,
    policy: ScalePolicy,
    valid: Option<(f64, f64)>,
}

impl FeatureSpec {
    /// Creates a spec with the given name and policy and no valid range.
    pub fn new(name: impl Into<String>, policy: ScalePolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            valid: None,
        }
    }

    /// Declares the range of physically meaningful readings; values outside
    /// it are treated per [`OutOfRangePolicy`].
    pub fn with_valid_range(mut self, min: f64, max: f64) -> Self {
        self.valid = Some((min, max));
        self
    }

    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scaling policy.
    pub fn policy(&self) -> &ScalePolicy {
        &self.policy
    }

    /// Returns the declared valid range, if any.
    pub fn valid_range(&self) -> Option<(f64, f64)> {
        self.valid
    }

    /// Validates the configured intervals.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if let ScalePolicy::Fixed { min, max } = self.policy
            && min >= max
        {
            return Err(NormalizeError::InvalidFixedRange {
                name: self.name.clone(),
                min,
                max,
            });
        }
        if let Some((min, max)) = self.valid
            && min >= max
        {
            return Err(NormalizeError::InvalidValidRange {
                name: self.name.clone(),
                min,
                max,
            });
        }
        Ok(())
    }

    /// Whether a reading falls inside the declared valid range.
    ///
    /// Non-finite readings are never valid. With no declared range, every
    /// finite reading is valid.
    pub(crate) fn is_valid(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.valid {
            Some((min, max)) => value >= min && value <= max,
            None => true,
        }
    }

    /// Applies the out-of-range policy to a raw reading.
    pub(crate) fn effective_value(&self, value: f64, policy: OutOfRangePolicy) -> f64 {
        match (policy, self.valid) {
            (OutOfRangePolicy::Clamp, Some((min, max))) => value.clamp(min, max),
            _ => value,
        }
    }
}
