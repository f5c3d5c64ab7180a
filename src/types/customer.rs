//! Raw customer attribute record consumed by the inference pipeline.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One bank customer's raw attributes, as collected by a serving surface.
///
/// Field aliases match the column names of the training data, so records
/// exported from the training pipeline deserialize unchanged. Domain ranges
/// are enforced by the input-collection layer via [`Validate`]; the core
/// pipeline assumes a validated record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerRecord {
    #[serde(alias = "CreditScore")]
    pub credit_score: f64,

    /// Country of residence; must be one of the geography encoder's
    /// fitted categories
    #[serde(alias = "Geography")]
    pub geography: String,

    /// Must be one of the gender encoder's two fitted classes
    #[serde(alias = "Gender")]
    pub gender: String,

    /// Age in years
    #[serde(alias = "Age")]
    #[validate(range(min = 18, max = 92))]
    pub age: u8,

    /// Years with the bank
    #[serde(alias = "Tenure")]
    #[validate(range(min = 0, max = 10))]
    pub tenure: u8,

    /// Account balance
    #[serde(alias = "Balance")]
    pub balance: f64,

    #[serde(alias = "NumOfProducts")]
    #[validate(range(min = 1, max = 4))]
    pub num_of_products: u8,

    /// 1 if the customer holds a credit card, else 0
    #[serde(alias = "HasCrCard")]
    #[validate(range(min = 0, max = 1))]
    pub has_cr_card: u8,

    /// 1 if the customer is an active member, else 0
    #[serde(alias = "IsActiveMember")]
    #[validate(range(min = 0, max = 1))]
    pub is_active_member: u8,

    #[serde(alias = "EstimatedSalary")]
    pub estimated_salary: f64,
}

impl CustomerRecord {
    /// Create a record with the given categoricals and age, and neutral
    /// defaults for the remaining fields.
    pub fn new(geography: impl Into<String>, gender: impl Into<String>, age: u8) -> Self {
        Self {
            credit_score: 650.0,
            geography: geography.into(),
            gender: gender.into(),
            age,
            tenure: 0,
            balance: 0.0,
            num_of_products: 1,
            has_cr_card: 1,
            is_active_member: 1,
            estimated_salary: 50_000.0,
        }
    }
}
