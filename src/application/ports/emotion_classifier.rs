use async_trait::async_trait;

use crate::domain::EmotionLabel;

#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Single label with the highest confidence.
    async fn classify(&self, text: &str) -> Result<EmotionLabel, EmotionClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmotionClassifierError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("classifier returned no labels")]
    NoLabels,
}
