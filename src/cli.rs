use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Auriga k-nearest-neighbor driving regressor.
#[derive(Parser)]
#[command(
    name = "auriga",
    version,
    about = "k-NN regression engine for simulated race-driving control"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit on the training CSV and predict control vectors for query rows.
    Predict(PredictArgs),
    /// Score the regressor on a seeded hold-out split of the training CSV.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "auriga.toml")]
    pub config: PathBuf,

    /// Path to CSV of query feature vectors (headered, features only).
    #[arg(short, long)]
    pub queries: PathBuf,

    /// Path for the predictions CSV.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "auriga.toml")]
    pub config: PathBuf,

    /// Optional path for a predictions-vs-truth CSV.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the hold-out RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
