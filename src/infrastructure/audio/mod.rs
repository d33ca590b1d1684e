mod audio_decoder_factory;
mod azure_whisper_engine;
mod ffmpeg_decoder;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod spectral_gate;
mod symphonia_decoder;
mod transcription_engine_factory;

pub use audio_decoder_factory::{AudioDecoderFactory, DecoderProvider};
pub use azure_whisper_engine::AzureWhisperEngine;
pub use ffmpeg_decoder::{FfmpegAudioDecoder, check_ffmpeg_binary};
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use spectral_gate::{SpectralGateConfig, SpectralGateNoiseReducer};
pub use symphonia_decoder::{SymphoniaAudioDecoder, decode_audio_to_waveform};
pub use transcription_engine_factory::{
    TranscriptionEngineFactory, TranscriptionEngineOptions, TranscriptionProvider,
};
