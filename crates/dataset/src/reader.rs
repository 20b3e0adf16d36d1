//! CSV readers for training data and query vectors.

use std::path::Path;

use tracing::debug;

use crate::error::DatasetError;
use crate::sample::Sample;

/// Reads labeled samples from a headered CSV file.
///
/// The trailing `n_targets` columns of each record are the targets; every
/// preceding column is a feature. All fields must parse as `f64`.
///
/// # Errors
///
/// Returns [`DatasetError::FileNotFound`] if `path` does not exist,
/// [`DatasetError::TooFewColumns`] if a record cannot hold `n_targets`
/// targets plus at least one feature, and [`DatasetError::Parse`] with
/// line/column context for a non-numeric field.
pub fn read_samples<P: AsRef<Path>>(
    path: P,
    n_targets: usize,
) -> Result<Vec<Sample>, DatasetError> {
    let rows = read_rows(path.as_ref(), n_targets + 1)?;

    let samples = rows
        .into_iter()
        .map(|mut row| {
            let targets = row.split_off(row.len() - n_targets);
            Sample::new(row, targets)
        })
        .collect::<Vec<_>>();

    debug!(n_samples = samples.len(), n_targets, "read training CSV");
    Ok(samples)
}

/// Reads unlabeled query feature vectors from a headered CSV file.
///
/// # Errors
///
/// Same failure modes as [`read_samples`], without the target split.
pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>, DatasetError> {
    let rows = read_rows(path.as_ref(), 1)?;
    debug!(n_queries = rows.len(), "read query CSV");
    Ok(rows)
}

/// Parses every record of a headered CSV into a numeric row of at least
/// `min_columns` fields.
fn read_rows(path: &Path, min_columns: usize) -> Result<Vec<Vec<f64>>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header occupies line 1; records start at line 2.
        let line = i + 2;

        if record.len() < min_columns {
            return Err(DatasetError::TooFewColumns {
                line,
                got: record.len(),
                need: min_columns,
            });
        }

        let mut row = Vec::with_capacity(record.len());
        for (j, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| DatasetError::Parse {
                line,
                column: j + 1,
                value: field.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(rows)
}
