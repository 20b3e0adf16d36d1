//! Evaluate command: score the regressor on a seeded hold-out split.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use auriga_dataset::{ensure_uniform, read_samples};
use auriga_evaluate::{EvaluationReport, evaluate_holdout};

use crate::cli::EvaluateArgs;
use crate::config::AurigaConfig;
use crate::convert;

/// Run the hold-out evaluation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: AurigaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Read and validate the dataset
    let samples = read_samples(&config.dataset.input, config.dataset.n_targets).with_context(
        || format!("failed to read training CSV: {}", config.dataset.input.display()),
    )?;
    let shape = ensure_uniform(&samples)?;
    info!(
        n_samples = samples.len(),
        n_features = shape.n_features,
        "dataset loaded"
    );

    // 3. Evaluate on a seeded hold-out split
    let specs = convert::build_feature_specs(&config.features, shape.n_features)?;
    let knn_config = convert::build_knn_config(&config.knn)?;
    let out_of_range = convert::build_out_of_range(&config.knn)?;
    let k = knn_config.k();

    let seed = args.seed.or(config.seed).unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    let report = evaluate_holdout(
        samples,
        &specs,
        out_of_range,
        knn_config,
        config.evaluate.test_ratio,
        &mut rng,
    )
    .context("hold-out evaluation failed")?;

    println!("k = {k}, held-out samples = {}", report.summary.n);
    println!("mean squared error: {:.6}", report.summary.mse);
    println!(
        "discrete accuracy:  {:.2}%",
        report.summary.discrete_accuracy * 100.0
    );

    // 4. Optional predictions-vs-truth CSV
    if let Some(output) = &args.output {
        write_predictions(&report, output, shape.n_targets)
            .with_context(|| format!("failed to write predictions: {}", output.display()))?;
        info!(path = %output.display(), "predictions written");
    }

    Ok(())
}

/// Writes one row per held-out sample: predicted targets, then true targets.
fn write_predictions(
    report: &EvaluationReport,
    output: &std::path::Path,
    n_targets: usize,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)?;

    let mut header = Vec::with_capacity(n_targets * 2);
    for i in 0..n_targets {
        header.push(format!("pred_{i}"));
    }
    for i in 0..n_targets {
        header.push(format!("true_{i}"));
    }
    writer.write_record(&header)?;

    for p in &report.predictions {
        let record: Vec<String> = p
            .predicted
            .iter()
            .chain(p.actual.iter())
            .map(|v| v.to_string())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
