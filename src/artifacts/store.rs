//! One-shot loading of the fitted artifact set.

use crate::artifacts::encoders::{LabelEncoder, OneHotEncoder};
use crate::artifacts::model::{DenseNetwork, Model};
use crate::artifacts::scaler::StandardScaler;
use crate::assembler::BASE_FEATURE_COUNT;
use crate::error::ArtifactError;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// File names of the four artifacts inside the artifact directory, as
/// written by the training export.
pub const GEO_ENCODER_FILE: &str = "onehot_encoder_geo.json";
pub const GENDER_ENCODER_FILE: &str = "label_encoder_gender.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// The four fitted artifacts, loaded once at startup and shared read-only
/// for the rest of the process lifetime.
pub struct ArtifactStore {
    geo_encoder: OneHotEncoder,
    gender_encoder: LabelEncoder,
    scaler: StandardScaler,
    model: Box<dyn Model>,
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("geo_encoder", &self.geo_encoder)
            .field("gender_encoder", &self.gender_encoder)
            .field("scaler", &self.scaler)
            .field("model", &"<dyn Model>")
            .finish()
    }
}

impl ArtifactStore {
    /// Load and cross-check the artifact set from a directory.
    ///
    /// Any missing, unreadable, or mutually inconsistent artifact fails the
    /// whole load; a partially initialized store is never returned.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();

        let geo_encoder: OneHotEncoder = read_artifact(&dir.join(GEO_ENCODER_FILE))?;
        let gender_encoder: LabelEncoder = read_artifact(&dir.join(GENDER_ENCODER_FILE))?;
        let scaler: StandardScaler = read_artifact(&dir.join(SCALER_FILE))?;
        let model: DenseNetwork = read_artifact(&dir.join(MODEL_FILE))?;

        let store = Self::from_parts(geo_encoder, gender_encoder, scaler, Box::new(model))?;

        info!(
            dir = %dir.display(),
            geography_categories = store.geo_encoder.category_count(),
            feature_columns = store.scaler.column_count(),
            "Artifact store loaded"
        );

        Ok(store)
    }

    /// Assemble a store from already-deserialized artifacts, enforcing the
    /// same structural checks as [`ArtifactStore::load`]. Intended for
    /// alternate artifact sources and tests.
    pub fn from_parts(
        geo_encoder: OneHotEncoder,
        gender_encoder: LabelEncoder,
        scaler: StandardScaler,
        model: Box<dyn Model>,
    ) -> Result<Self, ArtifactError> {
        if gender_encoder.class_count() != 2 {
            return Err(ArtifactError::Incompatible(format!(
                "gender encoder must have exactly 2 classes, found {}",
                gender_encoder.class_count()
            )));
        }
        if geo_encoder.category_count() == 0 {
            return Err(ArtifactError::Incompatible(
                "geography encoder has no categories".to_string(),
            ));
        }
        for (index, category) in geo_encoder.categories.iter().enumerate() {
            if geo_encoder.categories[..index].contains(category) {
                return Err(ArtifactError::Incompatible(format!(
                    "geography encoder lists {category:?} more than once"
                )));
            }
        }

        if scaler.scales.len() != scaler.means.len() {
            return Err(ArtifactError::Incompatible(format!(
                "scaler has {} means but {} scales",
                scaler.means.len(),
                scaler.scales.len()
            )));
        }
        if scaler.scales.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(ArtifactError::Incompatible(
                "scaler contains a zero or non-finite scale".to_string(),
            ));
        }

        let expected = BASE_FEATURE_COUNT + geo_encoder.category_count();
        if scaler.column_count() != expected {
            return Err(ArtifactError::Incompatible(format!(
                "scaler fitted on {} columns, assembler produces {expected}",
                scaler.column_count()
            )));
        }
        if model.input_width() != scaler.column_count() {
            return Err(ArtifactError::Incompatible(format!(
                "model expects {} inputs, scaler emits {}",
                model.input_width(),
                scaler.column_count()
            )));
        }

        Ok(Self {
            geo_encoder,
            gender_encoder,
            scaler,
            model,
        })
    }

    pub fn geo_encoder(&self) -> &OneHotEncoder {
        &self.geo_encoder
    }

    pub fn gender_encoder(&self) -> &LabelEncoder {
        &self.gender_encoder
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn model(&self) -> &dyn Model {
        self.model.as_ref()
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
