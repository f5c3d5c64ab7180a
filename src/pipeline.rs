//! End-to-end churn prediction pipeline.

use crate::artifacts::ArtifactStore;
use crate::assembler::FeatureAssembler;
use crate::decision;
use crate::error::PredictionError;
use crate::predictor::Predictor;
use crate::types::{CustomerRecord, Prediction};
use tracing::{debug, info};

/// Inference pipeline over a loaded artifact store.
///
/// Stateless per request: each call either completes all three stages
/// (assemble, predict, decide) or fails at the first invalid one, never
/// returning a partial result. The pipeline can be shared freely across
/// threads since the artifacts never change after load.
pub struct ChurnPipeline {
    store: ArtifactStore,
    assembler: FeatureAssembler,
    predictor: Predictor,
}

impl ChurnPipeline {
    /// Wrap a loaded artifact store.
    pub fn new(store: ArtifactStore) -> Self {
        info!(
            feature_columns = store.scaler().column_count(),
            geography_categories = store.geo_encoder().category_count(),
            "Churn pipeline initialized"
        );

        Self {
            store,
            assembler: FeatureAssembler::new(),
            predictor: Predictor::new(),
        }
    }

    /// Predict churn for one customer record.
    pub fn predict(&self, record: &CustomerRecord) -> Result<Prediction, PredictionError> {
        let features = self.assembler.assemble(
            record,
            self.store.geo_encoder(),
            self.store.gender_encoder(),
        )?;

        let probability =
            self.predictor
                .predict(&features, self.store.scaler(), self.store.model())?;

        let prediction = decision::decide(probability);

        debug!(
            probability,
            verdict = %prediction.verdict,
            "Prediction complete"
        );

        Ok(prediction)
    }

    /// Shared access to the loaded artifacts.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }
}
