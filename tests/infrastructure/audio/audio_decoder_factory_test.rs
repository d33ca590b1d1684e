use std::path::Path;
use std::time::Duration;

use parlance::application::ports::{AudioDecoder, AudioDecoderError};
use parlance::domain::UploadedAudio;
use parlance::infrastructure::audio::{AudioDecoderFactory, DecoderProvider};

use crate::helpers::build_wav;

const MISSING_BINARY: &str = "/nonexistent/parlance-ffmpeg";
const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn given_ffmpeg_missing_when_creating_decoder_then_falls_back_to_symphonia() {
    let decoder = AudioDecoderFactory::create(
        DecoderProvider::Ffmpeg,
        Path::new(MISSING_BINARY),
        None,
        TIMEOUT,
    );
    let upload = UploadedAudio::new(build_wav(16_000, 1, &[1_000; 320]), None, None);

    let waveform = decoder.decode(&upload).unwrap();

    assert_eq!(waveform.len(), 320);
    assert_eq!(waveform.sample_rate(), 16_000);
}

#[test]
fn given_ffmpeg_missing_when_creating_strict_decoder_then_returns_unavailable() {
    let result = AudioDecoderFactory::create_strict(
        DecoderProvider::Ffmpeg,
        Path::new(MISSING_BINARY),
        None,
        TIMEOUT,
    );

    assert!(matches!(result, Err(AudioDecoderError::Unavailable(_))));
}

#[test]
fn given_symphonia_provider_when_creating_strict_decoder_then_succeeds() {
    let result = AudioDecoderFactory::create_strict(
        DecoderProvider::Symphonia,
        Path::new("ffmpeg"),
        None,
        TIMEOUT,
    );

    assert!(result.is_ok());
}
