//! Quality Predictor Library
//!
//! Loads a pre-trained XGBoost quality regressor exported to ONNX and predicts
//! one value from a JSON record of five process parameters.

pub mod cli;
pub mod config;
pub mod error;
pub mod feature_extractor;
pub mod models;
pub mod predictor;
pub mod types;

pub use config::PredictorConfig;
pub use error::PredictError;
pub use feature_extractor::FeatureExtractor;
pub use models::inference::{OnnxRegressor, Regressor};
pub use predictor::Predictor;
pub use types::{feature_record::FeatureRecord, prediction::PredictionResult};
