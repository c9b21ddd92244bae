//! ML model loading and inference components

pub mod inference;
pub mod loader;

pub use inference::{OnnxRegressor, Regressor};
pub use loader::{LoadedModel, ModelLoader};
