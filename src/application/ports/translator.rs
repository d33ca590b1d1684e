use async_trait::async_trait;

use crate::domain::{LanguageCode, TranslatedText};

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<TranslatedText, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
