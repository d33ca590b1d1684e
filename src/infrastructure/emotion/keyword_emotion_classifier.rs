use async_trait::async_trait;

use crate::application::ports::{EmotionClassifier, EmotionClassifierError};
use crate::domain::{EmotionLabel, EmotionScore};

const LEXICON: &[(&str, &[&str])] = &[
    (
        "anger",
        &["angry", "furious", "mad", "hate", "annoyed", "rage", "outraged"],
    ),
    (
        "disgust",
        &["disgusting", "gross", "revolting", "nasty", "sick", "yuck"],
    ),
    (
        "fear",
        &["afraid", "scared", "terrified", "frightened", "worried", "nervous", "anxious"],
    ),
    (
        "joy",
        &["happy", "glad", "joy", "great", "wonderful", "love", "delighted", "excited"],
    ),
    (
        "sadness",
        &["sad", "unhappy", "miserable", "depressed", "cry", "lonely", "sorry"],
    ),
    (
        "surprise",
        &["surprised", "wow", "unexpected", "amazing", "shocked", "astonished"],
    ),
];

/// Deterministic word-list classifier for offline and scaffold use.
/// Falls back to `neutral` when no cue word appears.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordEmotionClassifier;

impl KeywordEmotionClassifier {
    pub fn scores(text: &str) -> Vec<EmotionScore> {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();

        let total = words.len().max(1) as f32;
        let mut scores: Vec<EmotionScore> = LEXICON
            .iter()
            .map(|(label, cues)| {
                let hits = words.iter().filter(|w| cues.contains(&w.as_str())).count();
                EmotionScore::new(*label, hits as f32 / total)
            })
            .collect();

        let matched: f32 = scores.iter().map(|s| s.score).sum();
        scores.insert(0, EmotionScore::new("neutral", if matched > 0.0 { 0.0 } else { 1.0 }));
        scores
    }
}

#[async_trait]
impl EmotionClassifier for KeywordEmotionClassifier {
    async fn classify(&self, text: &str) -> Result<EmotionLabel, EmotionClassifierError> {
        if text.trim().is_empty() {
            return Err(EmotionClassifierError::EmptyInput);
        }

        let scores = Self::scores(text);
        let strongest = EmotionScore::strongest(&scores).ok_or(EmotionClassifierError::NoLabels)?;

        Ok(EmotionLabel::from_model_label(&strongest.label))
    }
}
