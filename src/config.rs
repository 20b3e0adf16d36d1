use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Auriga configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AurigaConfig {
    /// RNG seed for the hold-out shuffle.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Training dataset settings.
    pub dataset: DatasetToml,

    /// Regressor settings.
    #[serde(default)]
    pub knn: KnnToml,

    /// Per-feature scaling table; one entry per feature column, in order.
    ///
    /// When omitted, every feature uses learned min/max bounds with no
    /// valid-range filtering.
    #[serde(default)]
    pub features: Vec<FeatureToml>,

    /// Evaluate settings.
    #[serde(default)]
    pub evaluate: EvaluateToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    /// Path to the training CSV (headered; trailing columns are targets).
    pub input: PathBuf,
    /// Number of trailing target columns.
    #[serde(default = "default_n_targets")]
    pub n_targets: usize,
}

fn default_n_targets() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    /// Number of nearest neighbors to aggregate.
    #[serde(default = "default_k")]
    pub k: usize,
    /// Averaging scheme: "inverse-distance" or "uniform".
    #[serde(default = "default_weighting")]
    pub weighting: String,
    /// Additive distance floor for inverse-distance weighting.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Target columns (0-based, within the target block) aggregated by
    /// median instead of mean.
    #[serde(default)]
    pub median_targets: Vec<usize>,
    /// What fitting does with out-of-range readings: "exclude" or "clamp".
    #[serde(default = "default_out_of_range")]
    pub out_of_range: String,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            weighting: default_weighting(),
            epsilon: default_epsilon(),
            median_targets: Vec::new(),
            out_of_range: default_out_of_range(),
        }
    }
}

fn default_k() -> usize {
    21
}
fn default_weighting() -> String {
    "inverse-distance".to_string()
}
fn default_epsilon() -> f64 {
    1e-6
}
fn default_out_of_range() -> String {
    "exclude".to_string()
}

/// One row of the per-feature scaling table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureToml {
    /// Feature column name.
    pub name: String,
    /// Scaling policy: "learned", "fixed", or "angular".
    #[serde(default = "default_policy")]
    pub policy: String,
    /// Lower end of the fixed physical range (required for "fixed").
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper end of the fixed physical range (required for "fixed").
    #[serde(default)]
    pub max: Option<f64>,
    /// Lower end of the valid reading range, if any.
    #[serde(default)]
    pub valid_min: Option<f64>,
    /// Upper end of the valid reading range, if any.
    #[serde(default)]
    pub valid_max: Option<f64>,
}

fn default_policy() -> String {
    "learned".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateToml {
    /// Fraction of samples held out for testing.
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,
}

impl Default for EvaluateToml {
    fn default() -> Self {
        Self {
            test_ratio: default_test_ratio(),
        }
    }
}

fn default_test_ratio() -> f64 {
    0.2
}
