//! Seeded hold-out splitting.

use auriga_dataset::Sample;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::EvaluateError;

/// Shuffles `samples` and splits off a test fraction.
///
/// Returns `(train, test)`. The shuffle draws from the caller's RNG, so a
/// seeded generator reproduces the split exactly.
///
/// # Errors
///
/// Returns [`EvaluateError::InvalidTestRatio`] for a ratio outside (0, 1)
/// and [`EvaluateError::EmptySplit`] when either side would end up empty.
pub fn holdout_split(
    mut samples: Vec<Sample>,
    test_ratio: f64,
    rng: &mut impl Rng,
) -> Result<(Vec<Sample>, Vec<Sample>), EvaluateError> {
    if !test_ratio.is_finite() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return Err(EvaluateError::InvalidTestRatio { ratio: test_ratio });
    }

    let n = samples.len();
    let n_test = (n as f64 * test_ratio) as usize;
    if n_test == 0 || n_test == n {
        return Err(EvaluateError::EmptySplit {
            n,
            ratio: test_ratio,
        });
    }

    samples.shuffle(rng);
    let test = samples.split_off(n - n_test);
    Ok((samples, test))
}
