//! Feature extraction for quality model inference.
//!
//! The column order is the order the regressor was trained with. It is not
//! recorded in the artifact; `FEATURE_NAMES` is the only copy of it, and both
//! record parsing and row extraction follow it.

use crate::types::feature_record::FeatureRecord;

/// Feature extractor that transforms feature records into model input rows.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Number of model input columns.
    pub const FEATURE_COUNT: usize = 5;

    /// Model input columns, in training order.
    pub const FEATURE_NAMES: [&'static str; Self::FEATURE_COUNT] = [
        "temp",
        "pressure",
        "temp_x_pressure",
        "fusion",
        "transformation",
    ];

    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the single input row for a record.
    ///
    /// Returns a feature vector in `FEATURE_NAMES` order, narrowed to the
    /// `f32` element type of the ONNX graph.
    pub fn extract(&self, record: &FeatureRecord) -> Vec<f32> {
        record.values().iter().map(|&v| v as f32).collect()
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        Self::FEATURE_COUNT
    }

    /// Get feature names (matching training order).
    pub fn feature_names(&self) -> &'static [&'static str] {
        &Self::FEATURE_NAMES
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
