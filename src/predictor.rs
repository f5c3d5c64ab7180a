//! Probability prediction over assembled feature vectors.

use crate::artifacts::model::Model;
use crate::artifacts::scaler::StandardScaler;
use crate::error::PredictionError;
use tracing::error;

/// Runs the fitted scaler and classifier over an assembled feature vector.
///
/// Pure function of its inputs and the immutable artifacts.
pub struct Predictor;

impl Predictor {
    /// Create a new predictor.
    pub fn new() -> Self {
        Self
    }

    /// Standardize `features` and run the model forward pass.
    ///
    /// The model is trusted to emit a calibrated probability; anything
    /// outside [0, 1] is an error, never clamped.
    pub fn predict(
        &self,
        features: &[f64],
        scaler: &StandardScaler,
        model: &dyn Model,
    ) -> Result<f64, PredictionError> {
        let scaled = scaler.transform(features)?;
        let output = model.infer(&scaled)?;

        if !(0.0..=1.0).contains(&output) {
            error!(output, "model emitted a value outside [0, 1]");
            return Err(PredictionError::ModelOutput { value: output });
        }

        Ok(output)
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new()
    }
}
