//! Predict command: fit on the training CSV, answer query rows, write a
//! predictions CSV.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use auriga_dataset::{ensure_uniform, read_queries, read_samples};
use auriga_knn::KnnRegressor;

use crate::cli::PredictArgs;
use crate::config::AurigaConfig;
use crate::convert;

/// Run the prediction pipeline.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: AurigaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Read and validate training data
    let samples = read_samples(&config.dataset.input, config.dataset.n_targets).with_context(
        || format!("failed to read training CSV: {}", config.dataset.input.display()),
    )?;
    let shape = ensure_uniform(&samples)?;
    info!(
        n_samples = samples.len(),
        n_features = shape.n_features,
        n_targets = shape.n_targets,
        "training data loaded"
    );

    // 3. Fit the regressor
    let specs = convert::build_feature_specs(&config.features, shape.n_features)?;
    let knn_config = convert::build_knn_config(&config.knn)?;
    let out_of_range = convert::build_out_of_range(&config.knn)?;
    let regressor = KnnRegressor::fit(samples, &specs, out_of_range, knn_config)
        .context("failed to fit regressor")?;

    // 4. Read queries and predict
    let queries = read_queries(&args.queries)
        .with_context(|| format!("failed to read query CSV: {}", args.queries.display()))?;
    info!(n_queries = queries.len(), "queries loaded");

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to open output: {}", args.output.display()))?;

    let mut header: Vec<String> = specs.iter().map(|s| s.name().to_string()).collect();
    for i in 0..shape.n_targets {
        header.push(format!("pred_{i}"));
    }
    writer.write_record(&header)?;

    for (row, query) in queries.iter().enumerate() {
        let prediction = regressor
            .predict(query)
            .with_context(|| format!("prediction failed for query row {row}"))?;
        let record: Vec<String> = query
            .iter()
            .chain(prediction.iter())
            .map(|v| v.to_string())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(
        n_queries = queries.len(),
        path = %args.output.display(),
        "predictions written"
    );
    Ok(())
}
