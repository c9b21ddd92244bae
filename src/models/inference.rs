//! Single-row regression inference

use crate::error::PredictError;
use crate::models::loader::LoadedModel;
use ort::value::Tensor;
use tracing::debug;

/// A model that maps one feature row to one scalar
pub trait Regressor {
    /// Name used in logs and results
    fn name(&self) -> &str;

    /// Predict the value for a single feature row
    fn predict_row(&mut self, features: &[f32]) -> Result<f32, PredictError>;
}

/// Regressor backed by an ONNX Runtime session
pub struct OnnxRegressor {
    model: LoadedModel,
}

impl OnnxRegressor {
    pub fn new(model: LoadedModel) -> Self {
        Self { model }
    }

    /// Feature width the graph declares, when it is fixed
    pub fn input_width(&self) -> Option<usize> {
        self.model.input_width
    }
}

impl Regressor for OnnxRegressor {
    fn name(&self) -> &str {
        &self.model.name
    }

    fn predict_row(&mut self, features: &[f32]) -> Result<f32, PredictError> {
        check_width(self.model.input_width, features.len())?;

        // Prepare input tensor - shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))
            .map_err(|e| PredictError::Prediction(format!("failed to create input tensor: {}", e)))?;

        let model = &mut self.model;
        let outputs = model
            .session
            .run(ort::inputs![model.input_name.as_str() => input_tensor])
            .map_err(|e| PredictError::Prediction(e.to_string()))?;

        let output = outputs.get(model.output_name.as_str()).ok_or_else(|| {
            PredictError::Prediction(format!("model produced no output {}", model.output_name))
        })?;

        // XGBoost regressors export a float tensor of shape [batch, 1]
        let value = if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            first_value(data)
        } else if let Ok((_, data)) = output.try_extract_tensor::<f64>() {
            first_value(data).map(|v| v as f32)
        } else {
            return Err(PredictError::Prediction(format!(
                "output {} is not a float tensor",
                model.output_name
            )));
        };

        let value = value.ok_or_else(|| {
            PredictError::Prediction(format!("output {} is empty", model.output_name))
        })?;

        debug!(model = %model.name, value = value, "Extracted from tensor");
        Ok(value)
    }
}

fn check_width(declared: Option<usize>, actual: usize) -> Result<(), PredictError> {
    match declared {
        Some(expected) if expected != actual => Err(PredictError::Prediction(format!(
            "model expects {} features, feature vector has {}",
            expected, actual
        ))),
        _ => Ok(()),
    }
}

fn first_value<T: Copy>(data: &[T]) -> Option<T> {
    data.first().copied()
}
