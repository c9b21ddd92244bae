//! ONNX model loader

use crate::error::PredictError;
use anyhow::Result;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::ValueType;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loaded ONNX model with metadata
pub struct LoadedModel {
    /// Model name (artifact file stem)
    pub name: String,
    /// ONNX Runtime session
    pub session: Session,
    /// Input name for the model
    pub input_name: String,
    /// Output name holding the regression value
    pub output_name: String,
    /// Feature width the graph declares, when it is fixed
    pub input_width: Option<usize>,
}

/// Loader for ONNX models
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    intra_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(intra_threads: usize) -> Self {
        Self {
            intra_threads: intra_threads.max(1),
        }
    }

    /// Load a single ONNX model from file
    pub fn load_model<P: AsRef<Path>>(&self, path: P) -> Result<LoadedModel, PredictError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(PredictError::artifact(path, "file not found"));
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        info!(model = %name, path = %path.display(), threads = self.intra_threads, "Loading ONNX model");

        let session = self
            .build_session(path)
            .map_err(|e| PredictError::artifact(path, format!("{:#}", e)))?;

        let input = session
            .inputs
            .first()
            .ok_or_else(|| PredictError::artifact(path, "model declares no inputs"))?;
        let input_name = input.name.clone();
        let input_width = declared_width(&input.input_type);

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| PredictError::artifact(path, "model declares no outputs"))?;

        info!(
            model = %name,
            input = %input_name,
            output = %output_name,
            input_width = ?input_width,
            "Model loaded successfully"
        );

        Ok(LoadedModel {
            name,
            session,
            input_name,
            output_name,
            input_width,
        })
    }

    fn build_session(&self, path: &Path) -> Result<Session> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(self.intra_threads)?
            .commit_from_file(path)?;
        Ok(session)
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory holding the running executable; the artifact is resolved from here
pub fn executable_dir() -> Result<PathBuf, PredictError> {
    let exe = std::env::current_exe()
        .map_err(|e| PredictError::artifact("<current executable>", e))?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PredictError::artifact(&exe, "executable has no parent directory"))?;
    debug!(dir = %dir.display(), "Resolved executable directory");
    Ok(dir)
}

/// Last dimension of a `[batch, features]` tensor input; dynamic dims are `None`
fn declared_width(input_type: &ValueType) -> Option<usize> {
    match input_type {
        ValueType::Tensor { shape, .. } => shape
            .last()
            .copied()
            .filter(|&dim| dim > 0)
            .map(|dim| dim as usize),
        _ => None,
    }
}
