//! Churn decision policy.

use crate::types::{Prediction, Verdict};

/// Probability threshold above which a customer is classified as churning.
///
/// Fixed policy, deliberately not part of the configuration. Callers with a
/// different risk appetite use [`decide_with_threshold`] directly; the
/// predictor stays untouched.
pub const CHURN_THRESHOLD: f64 = 0.5;

/// Classify a churn probability under the standard threshold.
pub fn decide(probability: f64) -> Prediction {
    decide_with_threshold(probability, CHURN_THRESHOLD)
}

/// Classify a churn probability against an explicit threshold.
///
/// Churn only on strict excess; a probability exactly at the threshold is
/// a retain.
pub fn decide_with_threshold(probability: f64, threshold: f64) -> Prediction {
    Prediction::new(
        probability,
        Verdict::from_probability(probability, threshold),
    )
}
