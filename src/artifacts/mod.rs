//! Fitted preprocessing and model artifacts.

pub mod encoders;
pub mod model;
pub mod scaler;
pub mod store;

pub use encoders::{LabelEncoder, OneHotEncoder};
pub use model::{DenseNetwork, Model};
pub use scaler::StandardScaler;
pub use store::ArtifactStore;
