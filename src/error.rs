//! Typed errors for artifact loading and the prediction pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the fitted artifact set at startup.
///
/// All variants are fatal: the process must not serve predictions when any
/// artifact is missing, unreadable, or inconsistent with the others.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifacts parsed individually but disagree with each other, e.g.
    /// the scaler was fitted on a different column count than the assembler
    /// produces.
    #[error("incompatible artifact set: {0}")]
    Incompatible(String),
}

/// Per-request errors from the inference pipeline.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// A categorical value outside the encoder's fitted vocabulary. Never
    /// mapped to a default: a guessed code would silently corrupt the
    /// feature vector.
    #[error("unknown {field} value {value:?}, expected one of {known:?}")]
    UnknownCategory {
        field: String,
        value: String,
        known: Vec<String>,
    },

    /// Feature vector length disagrees with the fitted column count.
    /// Signals artifact/assembler version skew, not bad user input.
    #[error("feature vector has {actual} columns, fitted for {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The classifier emitted something that is not a probability.
    #[error("model output {value} is not a probability in [0, 1]")]
    ModelOutput { value: f64 },
}
