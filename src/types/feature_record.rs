//! Feature record: the named numeric inputs of one prediction request

use crate::error::PredictError;
use crate::feature_extractor::FeatureExtractor;
use serde_json::{Map, Value};

/// One manufacturing run's process parameters, as supplied on the command line.
///
/// Values are held in `FeatureExtractor::FEATURE_NAMES` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    values: [f64; FeatureExtractor::FEATURE_COUNT],
}

impl FeatureRecord {
    /// Build a record from values already in `FEATURE_NAMES` order
    pub fn new(values: [f64; FeatureExtractor::FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Parse a JSON object holding the five required fields.
    ///
    /// Values may be JSON numbers or strings holding a number. Extra keys are
    /// ignored.
    pub fn from_json(raw: &str) -> Result<Self, PredictError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| PredictError::InputParse(format!("not valid JSON: {}", e)))?;

        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(PredictError::InputParse(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let mut values = [0.0; FeatureExtractor::FEATURE_COUNT];
        for (slot, field) in values.iter_mut().zip(FeatureExtractor::FEATURE_NAMES) {
            *slot = required(&object, field)?;
        }
        Ok(Self { values })
    }

    /// Value of a named feature
    pub fn get(&self, name: &str) -> Option<f64> {
        FeatureExtractor::FEATURE_NAMES
            .iter()
            .position(|&field| field == name)
            .map(|i| self.values[i])
    }

    /// All values, in `FEATURE_NAMES` order
    pub fn values(&self) -> &[f64; FeatureExtractor::FEATURE_COUNT] {
        &self.values
    }
}

fn required(object: &Map<String, Value>, field: &'static str) -> Result<f64, PredictError> {
    let value = object
        .get(field)
        .ok_or(PredictError::MissingField(field))?;

    // out-of-range numbers only reach here with arbitrary_precision, as None
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    // the model consumes f32, so the value must survive the narrowing too
    match number {
        Some(n) if n.is_finite() && (n as f32).is_finite() => Ok(n),
        _ => Err(PredictError::TypeCoercion {
            field,
            value: value.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
