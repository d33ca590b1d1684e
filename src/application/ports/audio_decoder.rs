use crate::domain::{UploadedAudio, Waveform};

/// Turns an uploaded container into a mono waveform at its native rate.
///
/// Decoding is CPU-bound and synchronous; callers run it on a blocking
/// thread.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, audio: &UploadedAudio) -> Result<Waveform, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("temporary file error: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("decoder unavailable: {0}")]
    Unavailable(String),
}
