//! Conversion from raw TOML config into library configuration types.

use anyhow::{Result, bail};

use auriga_knn::{KnnConfig, Weighting};
use auriga_normalize::{FeatureSpec, OutOfRangePolicy, ScalePolicy};

use crate::config::{FeatureToml, KnnToml};

/// Builds the per-feature scaling table.
///
/// An empty table defaults every feature column to learned bounds; a
/// non-empty table must cover every feature column, in order.
pub fn build_feature_specs(
    features: &[FeatureToml],
    n_features: usize,
) -> Result<Vec<FeatureSpec>> {
    if features.is_empty() {
        return Ok((0..n_features)
            .map(|i| FeatureSpec::new(format!("feature_{i}"), ScalePolicy::Learned))
            .collect());
    }

    if features.len() != n_features {
        bail!(
            "[[features]] table has {} entries but the dataset has {} feature columns",
            features.len(),
            n_features
        );
    }

    features.iter().map(build_one_spec).collect()
}

fn build_one_spec(f: &FeatureToml) -> Result<FeatureSpec> {
    let policy = match f.policy.as_str() {
        "learned" => ScalePolicy::Learned,
        "angular" => ScalePolicy::Angular,
        "fixed" => match (f.min, f.max) {
            (Some(min), Some(max)) => ScalePolicy::Fixed { min, max },
            _ => bail!("feature '{}': policy \"fixed\" requires min and max", f.name),
        },
        other => bail!(
            "feature '{}': unknown policy \"{other}\" (expected learned, fixed, or angular)",
            f.name
        ),
    };

    let mut spec = FeatureSpec::new(f.name.clone(), policy);
    match (f.valid_min, f.valid_max) {
        (Some(min), Some(max)) => spec = spec.with_valid_range(min, max),
        (None, None) => {}
        _ => bail!(
            "feature '{}': valid_min and valid_max must be set together",
            f.name
        ),
    }
    Ok(spec)
}

/// Builds the regressor configuration from the `[knn]` section.
pub fn build_knn_config(knn: &KnnToml) -> Result<KnnConfig> {
    let weighting = match knn.weighting.as_str() {
        "uniform" => Weighting::Uniform,
        "inverse-distance" => Weighting::InverseDistance {
            epsilon: knn.epsilon,
        },
        other => bail!(
            "unknown weighting \"{other}\" (expected uniform or inverse-distance)"
        ),
    };

    Ok(KnnConfig::new(knn.k)
        .with_weighting(weighting)
        .with_median_targets(knn.median_targets.clone()))
}

/// Parses the `[knn].out_of_range` flag.
pub fn build_out_of_range(knn: &KnnToml) -> Result<OutOfRangePolicy> {
    match knn.out_of_range.as_str() {
        "exclude" => Ok(OutOfRangePolicy::Exclude),
        "clamp" => Ok(OutOfRangePolicy::Clamp),
        other => bail!("unknown out_of_range \"{other}\" (expected exclude or clamp)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KnnToml;

    fn feature(name: &str, policy: &str) -> FeatureToml {
        FeatureToml {
            name: name.to_string(),
            policy: policy.to_string(),
            min: None,
            max: None,
            valid_min: None,
            valid_max: None,
        }
    }

    #[test]
    fn test_empty_table_defaults_to_learned() {
        let specs = build_feature_specs(&[], 3).unwrap();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].name(), "feature_0");
        assert_eq!(specs[2].policy(), &ScalePolicy::Learned);
    }

    #[test]
    fn test_table_must_cover_all_columns() {
        let table = vec![feature("a", "learned")];
        assert!(build_feature_specs(&table, 2).is_err());
    }

    #[test]
    fn test_fixed_requires_range() {
        let table = vec![feature("rpm", "fixed")];
        assert!(build_feature_specs(&table, 1).is_err());

        let mut f = feature("rpm", "fixed");
        f.min = Some(0.0);
        f.max = Some(10000.0);
        let specs = build_feature_specs(&[f], 1).unwrap();
        assert_eq!(
            specs[0].policy(),
            &ScalePolicy::Fixed { min: 0.0, max: 10000.0 }
        );
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let table = vec![feature("x", "quadratic")];
        assert!(build_feature_specs(&table, 1).is_err());
    }

    #[test]
    fn test_valid_range_must_be_paired() {
        let mut f = feature("track0", "learned");
        f.valid_min = Some(0.0);
        assert!(build_feature_specs(&[f], 1).is_err());
    }

    #[test]
    fn test_knn_config_weighting() {
        let mut toml = KnnToml::default();
        assert!(matches!(
            build_knn_config(&toml).unwrap().weighting(),
            Weighting::InverseDistance { .. }
        ));

        toml.weighting = "uniform".to_string();
        assert_eq!(build_knn_config(&toml).unwrap().weighting(), &Weighting::Uniform);

        toml.weighting = "gaussian".to_string();
        assert!(build_knn_config(&toml).is_err());
    }

    #[test]
    fn test_out_of_range_flag() {
        let mut toml = KnnToml::default();
        assert_eq!(
            build_out_of_range(&toml).unwrap(),
            OutOfRangePolicy::Exclude
        );
        toml.out_of_range = "clamp".to_string();
        assert_eq!(build_out_of_range(&toml).unwrap(), OutOfRangePolicy::Clamp);
        toml.out_of_range = "drop".to_string();
        assert!(build_out_of_range(&toml).is_err());
    }
}
