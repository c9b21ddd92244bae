//! Prediction result and how it is written to stdout

use serde::Serialize;

/// Scalar output of one model invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Predicted quality value
    pub prediction: f32,
    /// Name of the model that produced it
    #[serde(skip)]
    pub model: String,
}

/// Output line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The bare number, e.g. `42.0`
    #[default]
    Plain,
    /// `{"prediction":42.0}`, the prediction route's response body
    Json,
}

impl PredictionResult {
    /// Render the result as one output line (without the newline)
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            // Debug keeps the trailing `.0` on integral values
            OutputFormat::Plain => Ok(format!("{:?}", self.prediction)),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}
