use async_trait::async_trait;

use crate::domain::{Transcript, Waveform};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, waveform: &Waveform) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// Recognition ran but produced no usable text.
    #[error("Unable to understand audio")]
    Unintelligible,
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("engine configuration failed: {0}")]
    Configuration(String),
}
