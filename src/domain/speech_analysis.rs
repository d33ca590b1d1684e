use super::emotion::EmotionLabel;
use super::language_code::LanguageCode;
use super::transcript::Transcript;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedText {
    pub text: String,
    pub target_language: LanguageCode,
    /// Source language reported by the translation service, if any.
    pub detected_language: Option<String>,
}

impl TranslatedText {
    pub fn new(text: String, target_language: LanguageCode) -> Self {
        Self {
            text,
            target_language,
            detected_language: None,
        }
    }

    pub fn with_detected_language(mut self, language: impl Into<String>) -> Self {
        self.detected_language = Some(language.into());
        self
    }
}

/// Everything one successful request produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechAnalysis {
    pub transcript: Transcript,
    pub translation: TranslatedText,
    pub emotion: EmotionLabel,
    /// Denoised audio as 16-bit PCM WAV.
    pub clean_audio: Vec<u8>,
}
