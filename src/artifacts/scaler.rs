//! Fitted standard scaler.

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};

/// Per-column standardization parameters fitted during training.
///
/// Column order is the assembled feature order; `transform` must only ever
/// see vectors laid out the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column mean
    pub means: Vec<f64>,
    /// Per-column scale (standard deviation)
    pub scales: Vec<f64>,
}

impl StandardScaler {
    /// Number of fitted columns.
    pub fn column_count(&self) -> usize {
        self.means.len()
    }

    /// Apply `(x - mean) / scale` per column.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if features.len() != self.means.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.means.len(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.means.iter().zip(&self.scales))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
