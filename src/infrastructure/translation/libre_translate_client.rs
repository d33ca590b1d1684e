use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::{LanguageCode, TranslatedText};

const DEFAULT_BASE_URL: &str = "https://libretranslate.com";

/// Client for LibreTranslate-compatible `/translate` endpoints.
#[derive(Clone)]
pub struct LibreTranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    detected_language: Option<DetectedLanguage>,
}

#[derive(Deserialize)]
struct DetectedLanguage {
    language: String,
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<TranslatedText, TranslatorError> {
        let url = format!("{}/translate", self.base_url);
        let body = TranslateRequest {
            q: text,
            source: "auto",
            target: target.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        tracing::debug!(target_language = %target, chars = text.len(), "Sending text to translator");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(match status {
                StatusCode::BAD_REQUEST => {
                    TranslatorError::UnsupportedLanguage(format!("{}: {}", target, body))
                }
                _ => TranslatorError::ApiRequestFailed(format!("status {}: {}", status, body)),
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(e.to_string()))?;

        let detected = parsed.detected_language.map(|d| d.language);

        // Same source and target: hand back the input untouched.
        let text_out = match &detected {
            Some(source) if target.same_language(source) => text.to_string(),
            _ => parsed.translated_text,
        };

        tracing::info!(
            target_language = %target,
            detected_language = detected.as_deref().unwrap_or("unknown"),
            "Translation completed"
        );

        let translated = TranslatedText::new(text_out, target.clone());
        Ok(match detected {
            Some(source) => translated.with_detected_language(source),
            None => translated,
        })
    }
}
