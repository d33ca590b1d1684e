use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptionProvider {
    OpenAi,
    Azure,
    Mock,
}

#[derive(Debug, Clone, Default)]
pub struct TranscriptionEngineOptions {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        options: TranscriptionEngineOptions,
        client: reqwest::Client,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            TranscriptionProvider::OpenAi => {
                let key = non_blank(options.api_key).ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let engine =
                    OpenAiWhisperEngine::new(key, non_blank(options.base_url), Some(options.model))
                        .with_http_client(client);
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Azure => {
                let key = non_blank(options.api_key).ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let base_url = non_blank(options.base_url).ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "base URL required for Azure OpenAI Whisper".to_string(),
                    )
                })?;
                let deployment = options
                    .azure_deployment
                    .unwrap_or_else(|| options.model.clone());
                let api_version = options
                    .azure_api_version
                    .unwrap_or_else(|| "2024-06-01".to_string());
                let engine = AzureWhisperEngine::new(&base_url, &deployment, &key, &api_version)
                    .with_http_client(client);
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Mock => Ok(Arc::new(MockTranscriptionEngine::default())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
