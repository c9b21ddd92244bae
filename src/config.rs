//! Configuration management for the quality predictor

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the optional configuration file, looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "predictor.toml";

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

/// Model artifact configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Artifact path, relative to the executable's directory unless absolute
    pub artifact: String,
    /// Number of threads for ONNX inference (default: 1)
    pub intra_threads: usize,
}

impl ModelConfig {
    /// Resolve the artifact against the directory the program lives in
    pub fn artifact_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.artifact)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact: "manu_xgboost_model.onnx".to_string(),
            intra_threads: 1,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // stdout is reserved for the prediction, anything below warn is opt-in
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl PredictorConfig {
    /// Load `predictor.toml` from `dir`, falling back to defaults when absent
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load_from_path(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a specific path; a missing file yields defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .with_context(|| format!("Failed to build configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PredictorConfig::default();
        assert_eq!(config.model.artifact, "manu_xgboost_model.onnx");
        assert_eq!(config.model.intra_threads, 1);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PredictorConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.model.artifact, "manu_xgboost_model.onnx");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        writeln!(file, "[model]\nintra_threads = 4\n\n[logging]\nformat = \"json\"").unwrap();

        let config = PredictorConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.model.intra_threads, 4);
        assert_eq!(config.model.artifact, "manu_xgboost_model.onnx");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_artifact_path_relative_to_base() {
        let model = ModelConfig::default();
        assert_eq!(
            model.artifact_path(Path::new("/opt/predictor")),
            PathBuf::from("/opt/predictor/manu_xgboost_model.onnx")
        );

        let absolute = ModelConfig {
            artifact: "/srv/models/q.onnx".to_string(),
            ..ModelConfig::default()
        };
        assert_eq!(
            absolute.artifact_path(Path::new("/opt/predictor")),
            PathBuf::from("/srv/models/q.onnx")
        );
    }
}
