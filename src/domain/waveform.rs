use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

/// Mono PCM samples in [-1.0, 1.0] at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum WaveformError {
    #[error("sample rate must be positive")]
    ZeroSampleRate,
    #[error("channel count must be positive")]
    ZeroChannels,
    #[error("wav encoding failed: {0}")]
    Encoding(String),
    #[error("wav parsing failed: {0}")]
    Parsing(String),
}

impl Waveform {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, WaveformError> {
        if sample_rate == 0 {
            return Err(WaveformError::ZeroSampleRate);
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Averages each interleaved frame down to a single channel.
    pub fn from_interleaved(
        interleaved: &[f32],
        channels: usize,
        sample_rate: u32,
    ) -> Result<Self, WaveformError> {
        if channels == 0 {
            return Err(WaveformError::ZeroChannels);
        }
        Self::new(downmix(interleaved, channels), sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// New waveform at the same rate, used by stages that rewrite samples.
    pub fn with_samples(&self, samples: Vec<f32>) -> Self {
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    /// Serializes as 16-bit PCM mono RIFF/WAVE.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>, WaveformError> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::with_capacity(44 + self.samples.len() * 2));
        {
            let mut writer = WavWriter::new(&mut cursor, spec)
                .map_err(|e| WaveformError::Encoding(e.to_string()))?;
            for &sample in &self.samples {
                let clamped = if sample.is_finite() {
                    sample.clamp(-1.0, 1.0)
                } else {
                    0.0
                };
                writer
                    .write_sample((clamped * i16::MAX as f32).round() as i16)
                    .map_err(|e| WaveformError::Encoding(e.to_string()))?;
            }
            writer
                .finalize()
                .map_err(|e| WaveformError::Encoding(e.to_string()))?;
        }

        Ok(cursor.into_inner())
    }

    pub fn from_wav_bytes(data: &[u8]) -> Result<Self, WaveformError> {
        let mut reader =
            WavReader::new(Cursor::new(data)).map_err(|e| WaveformError::Parsing(e.to_string()))?;
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<hound::Result<_>>()
                .map_err(|e| WaveformError::Parsing(e.to_string()))?,
            SampleFormat::Int => {
                let scale = (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| s as f32 / scale))
                    .collect::<hound::Result<_>>()
                    .map_err(|e| WaveformError::Parsing(e.to_string()))?
            }
        };

        Self::from_interleaved(&interleaved, spec.channels as usize, spec.sample_rate)
    }
}

fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels == 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
