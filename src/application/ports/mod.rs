mod audio_decoder;
mod emotion_classifier;
mod noise_reducer;
mod transcription_engine;
mod translator;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use emotion_classifier::{EmotionClassifier, EmotionClassifierError};
pub use noise_reducer::{NoiseReducer, NoiseReducerError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{Translator, TranslatorError};
