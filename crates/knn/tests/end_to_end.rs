//! Integration tests: full normalize → index → aggregate → denormalize
//! pipeline.

use approx::assert_abs_diff_eq;
use auriga_dataset::Sample;
use auriga_knn::{KnnConfig, KnnError, KnnRegressor, Weighting};
use auriga_normalize::{FeatureSpec, OutOfRangePolicy, ScalePolicy};

fn line_samples() -> Vec<Sample> {
    (0..5)
        .map(|i| Sample::new(vec![i as f64], vec![(i * 10) as f64]))
        .collect()
}

fn line_specs() -> Vec<FeatureSpec> {
    vec![FeatureSpec::new("x", ScalePolicy::Learned)]
}

#[test]
fn line_scenario_unweighted() {
    let config = KnnConfig::new(3).with_weighting(Weighting::Uniform);
    let r =
        KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config).unwrap();

    let p = r.predict(&[2.1]).unwrap();
    assert_abs_diff_eq!(p[0], 20.0, epsilon = 1e-9);
}

#[test]
fn k_greater_than_training_set_is_rejected() {
    let config = KnnConfig::new(6);
    let result =
        KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config);
    assert!(matches!(
        result,
        Err(KnnError::KExceedsTrainingSet { k: 6, n: 5 })
    ));
}

#[test]
fn wrong_query_dimensionality_is_rejected() {
    let config = KnnConfig::new(3);
    let r =
        KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config).unwrap();
    assert!(r.predict(&[1.0, 2.0]).is_err());
    assert!(r.predict(&[]).is_err());
}

/// A miniature driving dataset: speed and track position in, throttle /
/// steering / gear out. Gear is discrete-ordinal and must come out as an
/// occurring gear number.
#[test]
fn gear_is_median_aggregated() {
    let samples = vec![
        Sample::new(vec![50.0, 0.0], vec![0.9, 0.00, 2.0]),
        Sample::new(vec![55.0, 0.1], vec![0.8, 0.01, 3.0]),
        Sample::new(vec![60.0, -0.1], vec![0.7, -0.01, 3.0]),
        Sample::new(vec![65.0, 0.2], vec![0.6, 0.02, 4.0]),
        Sample::new(vec![200.0, 0.9], vec![0.1, 0.30, 6.0]),
    ];
    let specs = vec![
        FeatureSpec::new("speed", ScalePolicy::Fixed { min: 0.0, max: 300.0 }),
        FeatureSpec::new("track_pos", ScalePolicy::Fixed { min: -1.0, max: 1.0 }),
    ];
    let config = KnnConfig::new(4)
        .with_weighting(Weighting::Uniform)
        .with_median_targets(vec![2]);
    let r = KnnRegressor::fit(samples, &specs, OutOfRangePolicy::Exclude, config).unwrap();

    let p = r.predict(&[57.0, 0.05]).unwrap();
    // Neighbors are the four slow samples with gears [2, 3, 3, 4]:
    // lower-central median -> 3, an actual gear.
    assert_abs_diff_eq!(p[2], 3.0, epsilon = 1e-9);
    // Continuous throttle is the plain mean of [0.9, 0.8, 0.7, 0.6].
    assert_abs_diff_eq!(p[0], 0.75, epsilon = 1e-9);
}

#[test]
fn median_tie_break_is_deterministic() {
    // Four neighbors with gears [1, 2, 3, 4]; the lower-central value 2
    // must win on every call.
    let samples = vec![
        Sample::new(vec![0.0], vec![1.0]),
        Sample::new(vec![1.0], vec![2.0]),
        Sample::new(vec![2.0], vec![3.0]),
        Sample::new(vec![3.0], vec![4.0]),
    ];
    let specs = vec![FeatureSpec::new("x", ScalePolicy::Learned)];
    let config = KnnConfig::new(4).with_median_targets(vec![0]);
    let r = KnnRegressor::fit(samples, &specs, OutOfRangePolicy::Exclude, config).unwrap();

    for _ in 0..20 {
        let p = r.predict(&[1.5]).unwrap();
        assert_abs_diff_eq!(p[0], 2.0, epsilon = 1e-12);
    }
}

#[test]
fn predictions_are_repeatable() {
    let config = KnnConfig::new(3);
    let r =
        KnnRegressor::fit(line_samples(), &line_specs(), OutOfRangePolicy::Exclude, config).unwrap();

    let first = r.predict(&[1.7]).unwrap();
    for _ in 0..10 {
        assert_eq!(r.predict(&[1.7]).unwrap(), first);
    }
}

#[test]
fn sentinel_readings_do_not_skew_predictions() {
    // An off-track range-finder emits -1.0. Excluded from fitting, the
    // valid readings span [100, 200]; the sentinel row still participates.
    let samples = vec![
        Sample::new(vec![100.0, 0.0], vec![10.0]),
        Sample::new(vec![150.0, 1.0], vec![20.0]),
        Sample::new(vec![200.0, 2.0], vec![30.0]),
        Sample::new(vec![-1.0, 3.0], vec![40.0]),
    ];
    let specs = vec![
        FeatureSpec::new("track0", ScalePolicy::Learned).with_valid_range(0.0, 200.0),
        FeatureSpec::new("x", ScalePolicy::Learned),
    ];
    let config = KnnConfig::new(1);
    let r = KnnRegressor::fit(samples, &specs, OutOfRangePolicy::Exclude, config).unwrap();

    let p = r.predict(&[150.0, 1.0]).unwrap();
    assert_abs_diff_eq!(p[0], 20.0, epsilon = 1e-9);
}

#[test]
fn constant_feature_dimension_is_harmless() {
    // A stuck sensor reports 42.0 everywhere; distances fall back to the
    // informative dimension and predictions stay finite.
    let samples: Vec<Sample> = (0..6)
        .map(|i| Sample::new(vec![42.0, i as f64], vec![i as f64 * 5.0]))
        .collect();
    let specs = vec![
        FeatureSpec::new("stuck", ScalePolicy::Learned),
        FeatureSpec::new("x", ScalePolicy::Learned),
    ];
    let config = KnnConfig::new(2).with_weighting(Weighting::Uniform);
    let r = KnnRegressor::fit(samples, &specs, OutOfRangePolicy::Exclude, config).unwrap();

    let p = r.predict(&[42.0, 2.5]).unwrap();
    // Neighbors are x = 2 and x = 3 -> mean of 10 and 15.
    assert_abs_diff_eq!(p[0], 12.5, epsilon = 1e-9);
}

/// The regressor is Send + Sync: one fitted instance may serve concurrent
/// query threads.
#[test]
fn regressor_is_shareable() {
    fn assert_impl<T: Send + Sync>() {}
    assert_impl::<KnnRegressor>();
}
