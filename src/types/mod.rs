//! Type definitions for the quality predictor

pub mod feature_record;
pub mod prediction;

pub use feature_record::FeatureRecord;
pub use prediction::{OutputFormat, PredictionResult};
