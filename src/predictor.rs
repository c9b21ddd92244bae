//! One prediction invocation: feature record in, scalar out

use crate::error::PredictError;
use crate::feature_extractor::FeatureExtractor;
use crate::models::inference::Regressor;
use crate::types::{FeatureRecord, PredictionResult};
use std::time::Instant;
use tracing::debug;

/// Runs feature records through a regressor
pub struct Predictor<R> {
    extractor: FeatureExtractor,
    model: R,
}

impl<R: Regressor> Predictor<R> {
    pub fn new(model: R) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            model,
        }
    }

    /// Parse the raw command-line argument and predict.
    ///
    /// `None` means the argument was not supplied at all.
    pub fn predict_json(&mut self, raw: Option<&str>) -> Result<PredictionResult, PredictError> {
        let raw = raw.ok_or_else(|| {
            PredictError::InputParse("missing feature record argument".to_string())
        })?;
        let record = FeatureRecord::from_json(raw)?;
        self.predict_record(&record)
    }

    /// Predict for an already parsed record
    pub fn predict_record(
        &mut self,
        record: &FeatureRecord,
    ) -> Result<PredictionResult, PredictError> {
        let start_time = Instant::now();
        let features = self.extractor.extract(record);
        let prediction = self.model.predict_row(&features)?;

        debug!(
            model = %self.model.name(),
            features = ?features,
            prediction = prediction,
            inference_us = start_time.elapsed().as_micros() as u64,
            "Prediction complete"
        );

        Ok(PredictionResult {
            prediction,
            model: self.model.name().to_string(),
        })
    }

    pub fn model(&self) -> &R {
        &self.model
    }
}
