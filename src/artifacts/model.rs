//! Trained churn classifier.
//!
//! The pipeline depends only on the [`Model`] capability. [`DenseNetwork`]
//! is the shipped variant: a fully-connected feed-forward network exported
//! from the training run as JSON. Structural validation happens at
//! deserialization time, so a loaded network is always internally
//! consistent.

use crate::error::PredictionError;
use ndarray::{Array1, Array2};
use serde::Deserialize;

/// Forward inference over an assembled, scaled feature vector.
pub trait Model: Send + Sync {
    /// Input width the model was trained on.
    fn input_width(&self) -> usize;

    /// Run the forward computation, returning the raw scalar output.
    fn infer(&self, features: &[f64]) -> Result<f64, PredictionError>;
}

/// Layer activations supported by exported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
    Linear,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Linear => x,
        }
    }
}

/// One fully-connected layer: `activation(weights · x + biases)`.
///
/// `weights` is row-per-unit: row i holds the input weights of output
/// unit i.
#[derive(Debug, Clone)]
struct DenseLayer {
    weights: Array2<f64>,
    biases: Array1<f64>,
    activation: Activation,
}

/// Feed-forward binary classifier with a single output unit.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "NetworkSpec")]
pub struct DenseNetwork {
    layers: Vec<DenseLayer>,
}

impl Model for DenseNetwork {
    fn input_width(&self) -> usize {
        self.layers[0].weights.ncols()
    }

    fn infer(&self, features: &[f64]) -> Result<f64, PredictionError> {
        let expected = self.input_width();
        if features.len() != expected {
            return Err(PredictionError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }

        let mut activations = Array1::from(features.to_vec());
        for layer in &self.layers {
            let mut pre = layer.weights.dot(&activations) + &layer.biases;
            pre.mapv_inplace(|x| layer.activation.apply(x));
            activations = pre;
        }

        Ok(activations[0])
    }
}

/// Serialized form of a network artifact, validated on conversion.
#[derive(Debug, Deserialize)]
struct NetworkSpec {
    layers: Vec<LayerSpec>,
}

#[derive(Debug, Deserialize)]
struct LayerSpec {
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    activation: Activation,
}

impl TryFrom<NetworkSpec> for DenseNetwork {
    type Error = String;

    fn try_from(spec: NetworkSpec) -> Result<Self, Self::Error> {
        if spec.layers.is_empty() {
            return Err("network has no layers".to_string());
        }

        let mut layers = Vec::with_capacity(spec.layers.len());
        let mut width: Option<usize> = None;

        for (index, layer) in spec.layers.into_iter().enumerate() {
            let units = layer.weights.len();
            if units == 0 {
                return Err(format!("layer {index} has no units"));
            }
            let inputs = layer.weights[0].len();
            if inputs == 0 {
                return Err(format!("layer {index} has zero input width"));
            }
            if layer.weights.iter().any(|row| row.len() != inputs) {
                return Err(format!("layer {index} has ragged weight rows"));
            }
            if layer.biases.len() != units {
                return Err(format!(
                    "layer {index} has {units} units but {} biases",
                    layer.biases.len()
                ));
            }
            if let Some(previous) = width {
                if inputs != previous {
                    return Err(format!(
                        "layer {index} expects {inputs} inputs, previous layer emits {previous}"
                    ));
                }
            }
            width = Some(units);

            let flat: Vec<f64> = layer.weights.into_iter().flatten().collect();
            let weights = Array2::from_shape_vec((units, inputs), flat)
                .map_err(|e| format!("layer {index}: {e}"))?;

            layers.push(DenseLayer {
                weights,
                biases: Array1::from(layer.biases),
                activation: layer.activation,
            });
        }

        if width != Some(1) {
            return Err(format!(
                "output layer must have exactly one unit, found {}",
                width.unwrap_or(0)
            ));
        }

        Ok(Self { layers })
    }
}
