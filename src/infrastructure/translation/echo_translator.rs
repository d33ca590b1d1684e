use async_trait::async_trait;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::{LanguageCode, TranslatedText};

/// Returns the input unchanged, for scaffold mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTranslator;

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<TranslatedText, TranslatorError> {
        Ok(TranslatedText::new(text.to_string(), target.clone()))
    }
}
