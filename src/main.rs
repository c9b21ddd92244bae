//! Quality Predictor - Main Entry Point
//!
//! Loads the model artifact that sits next to the executable, predicts from the
//! JSON record given as the first argument, and prints the value to stdout.

use anyhow::{Context, Result};
use quality_predictor::{
    cli::Invocation,
    config::{LoggingConfig, PredictorConfig},
    models::{loader, ModelLoader, OnnxRegressor},
    Predictor,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let invocation = Invocation::from_args(std::env::args().skip(1));

    // Load configuration
    let exe_dir = loader::executable_dir()?;
    let config = PredictorConfig::load_from_dir(&exe_dir)?;

    // Initialize logging
    init_logging(&config.logging)?;

    // Load model
    let artifact = config.model.artifact_path(&exe_dir);
    let model = ModelLoader::with_threads(config.model.intra_threads).load_model(&artifact)?;
    let model = OnnxRegressor::new(model);
    info!(input_width = ?model.input_width(), "Model ready");

    // Predict
    let mut predictor = Predictor::new(model);
    let result = predictor.predict_json(invocation.input.as_deref())?;

    let line = result
        .render(invocation.output)
        .context("Failed to render prediction")?;
    println!("{}", line);

    Ok(())
}

/// Send logs to stderr; stdout carries only the prediction line
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("quality_predictor={},ort=warn", logging.level))
            .with_context(|| format!("Invalid log level: {}", logging.level))?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }

    Ok(())
}
