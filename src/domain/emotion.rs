use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Anger,
    Disgust,
    Fear,
    Joy,
    Neutral,
    Sadness,
    Surprise,
    /// Label outside the standard set, kept as the model reported it.
    Other(String),
}

impl EmotionLabel {
    pub fn from_model_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "anger" => Self::Anger,
            "disgust" => Self::Disgust,
            "fear" => Self::Fear,
            "joy" => Self::Joy,
            "neutral" => Self::Neutral,
            "sadness" => Self::Sadness,
            "surprise" => Self::Surprise,
            _ => Self::Other(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Anger => "anger",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Joy => "joy",
            Self::Neutral => "neutral",
            Self::Sadness => "sadness",
            Self::Surprise => "surprise",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate label with its classifier confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Highest finite score; the earliest candidate wins an exact tie.
    pub fn strongest(scores: &[EmotionScore]) -> Option<&EmotionScore> {
        scores
            .iter()
            .filter(|s| s.score.is_finite())
            .fold(None, |best: Option<&EmotionScore>, candidate| match best {
                Some(current) if current.score >= candidate.score => Some(current),
                _ => Some(candidate),
            })
    }
}
