//! Fitted categorical encoders.
//!
//! The encoder state mirrors what the training pipeline fitted; encoding at
//! inference time must reproduce the training-time expansion exactly, so
//! unknown labels are rejected rather than mapped to anything.

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};

/// One-hot encoder over a closed category set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    /// Name of the encoded input column
    pub feature: String,
    /// Fitted vocabulary, in the order the indicator columns were laid out
    /// during training
    pub categories: Vec<String>,
}

impl OneHotEncoder {
    /// Number of fitted categories, which is also the indicator width.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Expand a label into its indicator vector, in fitted category order.
    pub fn encode(&self, value: &str) -> Result<Vec<f64>, PredictionError> {
        let position = self
            .categories
            .iter()
            .position(|c| c == value)
            .ok_or_else(|| PredictionError::UnknownCategory {
                field: self.feature.clone(),
                value: value.to_string(),
                known: self.categories.clone(),
            })?;

        let mut indicator = vec![0.0; self.categories.len()];
        indicator[position] = 1.0;
        Ok(indicator)
    }

    /// Expanded column names, training-style: `<feature>_<category>`.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| format!("{}_{}", self.feature, category))
            .collect()
    }
}

/// Label encoder mapping class labels to small integer codes.
///
/// The code of a label is its index in `classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Name of the encoded input column
    pub feature: String,
    /// Fitted classes in code order
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Number of fitted classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Map a label to its fitted integer code.
    pub fn encode(&self, value: &str) -> Result<i64, PredictionError> {
        self.classes
            .iter()
            .position(|c| c == value)
            .map(|index| index as i64)
            .ok_or_else(|| PredictionError::UnknownCategory {
                field: self.feature.clone(),
                value: value.to_string(),
                known: self.classes.clone(),
            })
    }
}
