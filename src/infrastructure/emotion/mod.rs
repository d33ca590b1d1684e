mod huggingface_emotion_classifier;
mod keyword_emotion_classifier;

pub use huggingface_emotion_classifier::HuggingFaceEmotionClassifier;
pub use keyword_emotion_classifier::KeywordEmotionClassifier;
