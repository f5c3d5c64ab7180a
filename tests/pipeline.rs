//! Integration tests for the churn prediction pipeline.
//!
//! Artifact fixtures are written as real JSON files into a temp directory
//! and loaded through the same path production uses.

use churn_predictor::decision::{self, CHURN_THRESHOLD};
use churn_predictor::{
    ArtifactError, ArtifactStore, ChurnPipeline, CustomerRecord, FeatureAssembler,
    PredictionError, Verdict,
};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_artifact(dir: &Path, name: &str, value: &serde_json::Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Write a complete artifact set: three geography categories, an identity
/// scaler, and a single sigmoid unit with the given input weights and bias.
fn write_artifact_set(dir: &Path, weights: [f64; 12], bias: f64, activation: &str) {
    write_artifact(
        dir,
        "onehot_encoder_geo.json",
        &json!({
            "feature": "Geography",
            "categories": ["France", "Germany", "Spain"],
        }),
    );
    write_artifact(
        dir,
        "label_encoder_gender.json",
        &json!({
            "feature": "Gender",
            "classes": ["Female", "Male"],
        }),
    );
    write_artifact(
        dir,
        "scaler.json",
        &json!({
            "means": vec![0.0; 12],
            "scales": vec![1.0; 12],
        }),
    );
    write_artifact(
        dir,
        "model.json",
        &json!({
            "layers": [{
                "weights": [weights.to_vec()],
                "biases": [bias],
                "activation": activation,
            }],
        }),
    );
}

/// The reference record: 650 credit score, Female, 40 years old, 3 years
/// tenure, zero balance, 2 products, card holder, active, 50k salary,
/// France.
fn reference_record() -> CustomerRecord {
    let mut record = CustomerRecord::new("France", "Female", 40);
    record.tenure = 3;
    record.num_of_products = 2;
    record
}

#[test]
fn test_end_to_end_reference_record() {
    let dir = TempDir::new().unwrap();
    write_artifact_set(dir.path(), [0.0; 12], 0.0, "sigmoid");

    let store = ArtifactStore::load(dir.path()).unwrap();
    let record = reference_record();

    // The assembled vector is the nine base columns in training order,
    // then the geography indicator block with France first.
    let features = FeatureAssembler::new()
        .assemble(&record, store.geo_encoder(), store.gender_encoder())
        .unwrap();
    assert_eq!(
        features,
        vec![650.0, 0.0, 40.0, 3.0, 0.0, 2.0, 1.0, 1.0, 50_000.0, 1.0, 0.0, 0.0]
    );

    let pipeline = ChurnPipeline::new(store);
    let prediction = pipeline.predict(&record).unwrap();

    // Zero weights and bias: sigmoid(0) is exactly one half, which sits on
    // the retain side of the threshold.
    assert_eq!(prediction.probability, 0.5);
    assert_eq!(prediction.verdict, Verdict::Retain);
    assert!((0.0..=1.0).contains(&prediction.probability));
}

#[test]
fn test_pipeline_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write_artifact_set(
        dir.path(),
        [0.001, -0.3, 0.02, -0.05, 0.0001, 0.4, -0.2, -0.6, 0.00001, 0.1, 0.7, -0.4],
        0.25,
        "sigmoid",
    );

    let pipeline = ChurnPipeline::new(ArtifactStore::load(dir.path()).unwrap());
    let record = reference_record();

    let first = pipeline.predict(&record).unwrap();
    let second = pipeline.predict(&record).unwrap();

    assert_eq!(first.probability, second.probability);
    assert_eq!(first.verdict, second.verdict);
}

#[test]
fn test_confident_model_yields_churn_verdict() {
    let dir = TempDir::new().unwrap();
    // sigmoid(2) is roughly 0.88
    write_artifact_set(dir.path(), [0.0; 12], 2.0, "sigmoid");

    let pipeline = ChurnPipeline::new(ArtifactStore::load(dir.path()).unwrap());
    let prediction = pipeline.predict(&reference_record()).unwrap();

    assert!(prediction.probability > CHURN_THRESHOLD);
    assert_eq!(prediction.verdict, Verdict::Churn);
}

#[test]
fn test_unknown_geography_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_artifact_set(dir.path(), [0.0; 12], 0.0, "sigmoid");

    let pipeline = ChurnPipeline::new(ArtifactStore::load(dir.path()).unwrap());
    let record = CustomerRecord::new("Narnia", "Female", 40);

    match pipeline.predict(&record).unwrap_err() {
        PredictionError::UnknownCategory { field, value, known } => {
            assert_eq!(field, "Geography");
            assert_eq!(value, "Narnia");
            assert_eq!(known, vec!["France", "Germany", "Spain"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_scaler_fails_load_before_any_prediction() {
    let dir = TempDir::new().unwrap();
    write_artifact_set(dir.path(), [0.0; 12], 0.0, "sigmoid");
    fs::remove_file(dir.path().join("scaler.json")).unwrap();

    let err = ArtifactStore::load(dir.path()).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
}

#[test]
fn test_corrupt_model_artifact_fails_load() {
    let dir = TempDir::new().unwrap();
    write_artifact_set(dir.path(), [0.0; 12], 0.0, "sigmoid");
    fs::write(dir.path().join("model.json"), "{ not json").unwrap();

    let err = ArtifactStore::load(dir.path()).unwrap_err();
    assert!(matches!(err, ArtifactError::Parse { .. }));
}

#[test]
fn test_scaler_width_skew_fails_load() {
    let dir = TempDir::new().unwrap();
    write_artifact_set(dir.path(), [0.0; 12], 0.0, "sigmoid");
    write_artifact(
        dir.path(),
        "scaler.json",
        &json!({
            "means": vec![0.0; 10],
            "scales": vec![1.0; 10],
        }),
    );

    let err = ArtifactStore::load(dir.path()).unwrap_err();
    assert!(matches!(err, ArtifactError::Incompatible(_)));
}

#[test]
fn test_out_of_range_model_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    // A linear output unit with a large bias emits a non-probability.
    write_artifact_set(dir.path(), [0.0; 12], 1.5, "linear");

    let pipeline = ChurnPipeline::new(ArtifactStore::load(dir.path()).unwrap());
    match pipeline.predict(&reference_record()).unwrap_err() {
        PredictionError::ModelOutput { value } => assert_eq!(value, 1.5),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_decision_threshold_is_strict() {
    assert_eq!(decision::decide(CHURN_THRESHOLD).verdict, Verdict::Retain);
    assert_eq!(
        decision::decide(CHURN_THRESHOLD + 1e-7).verdict,
        Verdict::Churn
    );
}

#[test]
fn test_shipped_demo_artifacts_load_and_predict() {
    let store = ArtifactStore::load("artifacts").unwrap();
    let pipeline = ChurnPipeline::new(store);

    let prediction = pipeline.predict(&reference_record()).unwrap();
    assert!((0.0..=1.0).contains(&prediction.probability));

    // Same artifacts, same record: identical output.
    let again = pipeline.predict(&reference_record()).unwrap();
    assert_eq!(prediction.probability, again.probability);
}
