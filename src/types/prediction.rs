//! Prediction output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary churn verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Churn,
    Retain,
}

impl Verdict {
    /// Classify a probability against a threshold.
    ///
    /// Churn only on strict excess: a probability exactly at the threshold
    /// reads as retain.
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability > threshold {
            Verdict::Churn
        } else {
            Verdict::Retain
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Churn => write!(f, "CHURN"),
            Verdict::Retain => write!(f, "RETAIN"),
        }
    }
}

/// Result of one prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Churn probability emitted by the model (0.0 - 1.0)
    pub probability: f64,

    /// Thresholded verdict
    pub verdict: Verdict,

    /// Prediction timestamp
    pub predicted_at: DateTime<Utc>,
}

impl Prediction {
    /// Create a prediction stamped with the current time.
    pub fn new(probability: f64, verdict: Verdict) -> Self {
        Self {
            probability,
            verdict,
            predicted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_probability() {
        assert_eq!(Verdict::from_probability(0.5, 0.5), Verdict::Retain);
        assert_eq!(Verdict::from_probability(0.5000001, 0.5), Verdict::Churn);
        assert_eq!(Verdict::from_probability(0.0, 0.5), Verdict::Retain);
        assert_eq!(Verdict::from_probability(1.0, 0.5), Verdict::Churn);
    }

    #[test]
    fn test_verdict_serialization() {
        assert_eq!(serde_json::to_string(&Verdict::Churn).unwrap(), "\"CHURN\"");
        assert_eq!(
            serde_json::to_string(&Verdict::Retain).unwrap(),
            "\"RETAIN\""
        );

        let verdict: Verdict = serde_json::from_str("\"CHURN\"").unwrap();
        assert_eq!(verdict, Verdict::Churn);
    }

    #[test]
    fn test_prediction_serialization() {
        let prediction = Prediction::new(0.73, Verdict::Churn);

        let json = serde_json::to_string(&prediction).unwrap();
        let deserialized: Prediction = serde_json::from_str(&json).unwrap();

        assert_eq!(prediction.probability, deserialized.probability);
        assert_eq!(prediction.verdict, deserialized.verdict);
    }
}
