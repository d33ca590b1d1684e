use crate::domain::Waveform;

pub trait NoiseReducer: Send + Sync {
    /// Output has the same length and sample rate as the input.
    fn denoise(&self, waveform: &Waveform) -> Result<Waveform, NoiseReducerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NoiseReducerError {
    #[error("waveform is empty")]
    EmptyWaveform,
    #[error("waveform contains non-finite samples")]
    NonFiniteSamples,
    #[error("invalid noise reduction parameters: {0}")]
    InvalidParameters(String),
}
