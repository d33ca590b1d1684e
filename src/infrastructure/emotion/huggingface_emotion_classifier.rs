use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{EmotionClassifier, EmotionClassifierError};
use crate::domain::{EmotionLabel, EmotionScore};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Text classification through the Hugging Face inference API.
pub struct HuggingFaceEmotionClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HuggingFaceEmotionClassifier {
    pub fn new(base_url: Option<String>, model: Option<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    parameters: ClassificationParameters,
}

#[derive(Serialize)]
struct ClassificationParameters {
    /// `None` serializes as `null`, which asks for every label.
    top_k: Option<usize>,
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

/// Single inputs come back either nested per input or flat.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn into_scores(self) -> Vec<EmotionScore> {
        let scores = match self {
            ClassificationResponse::Batched(batches) => {
                batches.into_iter().next().unwrap_or_default()
            }
            ClassificationResponse::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .map(|s| EmotionScore::new(s.label, s.score))
            .collect()
    }
}

#[async_trait]
impl EmotionClassifier for HuggingFaceEmotionClassifier {
    async fn classify(&self, text: &str) -> Result<EmotionLabel, EmotionClassifierError> {
        if text.trim().is_empty() {
            return Err(EmotionClassifierError::EmptyInput);
        }

        let body = ClassificationRequest {
            inputs: text,
            parameters: ClassificationParameters { top_k: None },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        tracing::debug!(endpoint = %self.endpoint, "Sending text to emotion classifier");

        let response = request
            .send()
            .await
            .map_err(|e| EmotionClassifierError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(EmotionClassifierError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ClassificationResponse = response
            .json()
            .await
            .map_err(|e| EmotionClassifierError::InvalidResponse(e.to_string()))?;

        let scores = parsed.into_scores();
        let strongest = EmotionScore::strongest(&scores).ok_or(EmotionClassifierError::NoLabels)?;

        tracing::info!(
            label = %strongest.label,
            score = strongest.score,
            candidates = scores.len(),
            "Emotion classification completed"
        );

        Ok(EmotionLabel::from_model_label(&strongest.label))
    }
}
