mod audio_format;
mod emotion;
mod language_code;
mod pipeline_stage;
mod speech_analysis;
mod transcript;
mod uploaded_audio;
mod waveform;

pub use audio_format::AudioFormat;
pub use emotion::{EmotionLabel, EmotionScore};
pub use language_code::{InvalidLanguageCode, LanguageCode};
pub use pipeline_stage::PipelineStage;
pub use speech_analysis::{SpeechAnalysis, TranslatedText};
pub use transcript::Transcript;
pub use uploaded_audio::UploadedAudio;
pub use waveform::{Waveform, WaveformError};
