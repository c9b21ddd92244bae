//! Error taxonomy for a single prediction invocation

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an invocation before a prediction is printed.
///
/// None of these are recovered locally: the binary surfaces the first one and
/// exits non-zero.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Model artifact missing, unreadable or not a valid ONNX graph
    #[error("failed to load model artifact {}: {reason}", path.display())]
    ArtifactLoad { path: PathBuf, reason: String },

    /// Input argument absent, not JSON, or not a JSON object
    #[error("invalid feature record: {0}")]
    InputParse(String),

    /// A required feature key is absent from the record
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required feature value cannot be read as a finite number
    #[error("field {field} is not numeric: {value}")]
    TypeCoercion { field: &'static str, value: String },

    /// The model rejected the input or produced no usable value
    #[error("prediction failed: {0}")]
    Prediction(String),
}

impl PredictError {
    pub(crate) fn artifact(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ArtifactLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
