//! Churn Predictor - Main Entry Point
//!
//! Loads the fitted artifact set, maps CLI input into a customer record,
//! and prints the churn prediction.

use anyhow::{Context, Result};
use churn_predictor::{
    artifacts::ArtifactStore, config::AppConfig, input, pipeline::ChurnPipeline, types::Verdict,
};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Customer churn prediction over a fitted model and preprocessing set
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config/config.toml")]
    config: String,

    /// Read the customer record as JSON from this file ("-" for stdin)
    #[arg(short, long, conflicts_with = "interactive")]
    input: Option<String>,

    /// Collect the customer record interactively
    #[arg(long)]
    interactive: bool,

    /// Override the artifact directory from the configuration
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = if Path::new(&args.config).exists() {
        AppConfig::load_from_path(&args.config)?
    } else {
        AppConfig::default()
    };

    init_logging(&config)?;

    let artifacts_dir = args
        .artifacts_dir
        .unwrap_or_else(|| PathBuf::from(&config.artifacts.dir));

    // Fail-fast: no prediction is attempted unless all four artifacts
    // loaded and cross-checked.
    let store = ArtifactStore::load(&artifacts_dir)
        .with_context(|| format!("Failed to load artifacts from {}", artifacts_dir.display()))?;
    let pipeline = ChurnPipeline::new(store);

    let record = if args.interactive {
        input::prompt_record(pipeline.store())?
    } else {
        let raw = match args.input.as_deref() {
            Some("-") | None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read record from stdin")?;
                buffer
            }
            Some(path) => {
                fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
            }
        };
        input::record_from_json(&raw)?
    };

    let prediction = pipeline.predict(&record)?;

    info!(
        probability = prediction.probability,
        verdict = %prediction.verdict,
        "Prediction complete"
    );

    println!("{}", serde_json::to_string_pretty(&prediction)?);
    match prediction.verdict {
        Verdict::Churn => eprintln!(
            "The customer is likely to churn (probability {:.2}).",
            prediction.probability
        ),
        Verdict::Retain => eprintln!(
            "The customer is not likely to churn (probability {:.2}).",
            prediction.probability
        ),
    }

    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("churn_predictor={}", config.logging.level).parse()?);

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
