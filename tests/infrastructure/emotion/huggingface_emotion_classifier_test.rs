use parlance::application::ports::{EmotionClassifier, EmotionClassifierError};
use parlance::domain::EmotionLabel;
use parlance::infrastructure::emotion::HuggingFaceEmotionClassifier;

use crate::helpers::start_mock_server;

const MODEL_PATH: &str = "/models/test-model";

fn classifier(base_url: String) -> HuggingFaceEmotionClassifier {
    HuggingFaceEmotionClassifier::new(
        Some(base_url),
        Some("test-model".to_string()),
        Some("hf-test".to_string()),
    )
}

#[tokio::test]
async fn given_nested_scores_when_classifying_then_returns_top_label() {
    let (base_url, shutdown_tx) = start_mock_server(
        MODEL_PATH,
        200,
        "application/json",
        r#"[[{"label":"neutral","score":0.1},{"label":"joy","score":0.85},{"label":"sadness","score":0.05}]]"#,
    )
    .await;

    let label = classifier(base_url).classify("I am so happy today").await;

    assert_eq!(label.unwrap(), EmotionLabel::Joy);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_flat_scores_when_classifying_then_returns_top_label() {
    let (base_url, shutdown_tx) = start_mock_server(
        MODEL_PATH,
        200,
        "application/json",
        r#"[{"label":"anger","score":0.6},{"label":"fear","score":0.4}]"#,
    )
    .await;

    let label = classifier(base_url).classify("leave me alone").await;

    assert_eq!(label.unwrap(), EmotionLabel::Anger);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_labels_when_classifying_then_returns_no_labels_error() {
    let (base_url, shutdown_tx) =
        start_mock_server(MODEL_PATH, 200, "application/json", "[[]]").await;

    let result = classifier(base_url).classify("anything").await;

    assert!(matches!(result, Err(EmotionClassifierError::NoLabels)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unexpected_payload_when_classifying_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_server(
        MODEL_PATH,
        200,
        "application/json",
        r#"{"estimated_time": 20.0}"#,
    )
    .await;

    let result = classifier(base_url).classify("anything").await;

    assert!(matches!(result, Err(EmotionClassifierError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_model_loading_when_classifying_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(
        MODEL_PATH,
        503,
        "application/json",
        r#"{"error":"Model is currently loading"}"#,
    )
    .await;

    let result = classifier(base_url).classify("anything").await;

    assert!(matches!(result, Err(EmotionClassifierError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_blank_text_when_classifying_then_returns_empty_input_error() {
    let result = classifier("http://127.0.0.1:1".to_string()).classify("   ").await;

    assert!(matches!(result, Err(EmotionClassifierError::EmptyInput)));
}
