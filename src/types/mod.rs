//! Core data types

pub mod customer;
pub mod prediction;

pub use customer::CustomerRecord;
pub use prediction::{Prediction, Verdict};
