//! Feature vector assembly.
//!
//! Transforms a raw customer record into the numeric feature vector the
//! scaler and model were fitted on. Column order is fixed for the process
//! lifetime: the nine base attributes in training order, then the geography
//! indicator block in the encoder's native category order. Getting this
//! order wrong corrupts predictions without raising any error, which is why
//! it lives in exactly one place.

use crate::artifacts::encoders::{LabelEncoder, OneHotEncoder};
use crate::error::PredictionError;
use crate::types::CustomerRecord;

/// Base feature columns preceding the geography indicator block, in
/// training order.
pub const BASE_FEATURE_NAMES: [&str; 9] = [
    "CreditScore",
    "Gender",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
];

/// Number of base feature columns.
pub const BASE_FEATURE_COUNT: usize = BASE_FEATURE_NAMES.len();

/// Assembles customer records into model input features.
pub struct FeatureAssembler;

impl FeatureAssembler {
    /// Create a new feature assembler.
    pub fn new() -> Self {
        Self
    }

    /// Build the feature vector for one record.
    ///
    /// Output length and ordering are identical across calls for a given
    /// encoder pair. Unknown categorical values are rejected before any
    /// feature is produced.
    pub fn assemble(
        &self,
        record: &CustomerRecord,
        geo_encoder: &OneHotEncoder,
        gender_encoder: &LabelEncoder,
    ) -> Result<Vec<f64>, PredictionError> {
        let gender_code = gender_encoder.encode(&record.gender)?;
        let geo_indicator = geo_encoder.encode(&record.geography)?;

        let mut features = Vec::with_capacity(BASE_FEATURE_COUNT + geo_indicator.len());
        features.push(record.credit_score);
        features.push(gender_code as f64);
        features.push(f64::from(record.age));
        features.push(f64::from(record.tenure));
        features.push(record.balance);
        features.push(f64::from(record.num_of_products));
        features.push(f64::from(record.has_cr_card));
        features.push(f64::from(record.is_active_member));
        features.push(record.estimated_salary);
        features.extend(geo_indicator);

        Ok(features)
    }

    /// Total feature count for a given geography encoder.
    pub fn feature_count(&self, geo_encoder: &OneHotEncoder) -> usize {
        BASE_FEATURE_COUNT + geo_encoder.category_count()
    }

    /// Column names in assembly order.
    pub fn feature_names(&self, geo_encoder: &OneHotEncoder) -> Vec<String> {
        BASE_FEATURE_NAMES
            .iter()
            .map(|name| name.to_string())
            .chain(geo_encoder.feature_names())
            .collect()
    }
}

impl Default for FeatureAssembler {
    fn default() -> Self {
        Self::new()
    }
}
