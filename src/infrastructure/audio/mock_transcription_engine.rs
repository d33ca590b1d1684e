use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{Transcript, Waveform};

const DEFAULT_PHRASE: &str = "hello";

/// Returns a fixed phrase for any non-empty waveform.
pub struct MockTranscriptionEngine {
    phrase: String,
    delay: Duration,
}

impl MockTranscriptionEngine {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockTranscriptionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASE)
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, waveform: &Waveform) -> Result<Transcript, TranscriptionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if waveform.is_empty() {
            return Err(TranscriptionError::Unintelligible);
        }
        Transcript::new(&self.phrase).ok_or(TranscriptionError::Unintelligible)
    }
}
