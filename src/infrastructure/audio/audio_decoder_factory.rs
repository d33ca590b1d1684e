use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{AudioDecoder, AudioDecoderError};

use super::ffmpeg_decoder::{FfmpegAudioDecoder, check_ffmpeg_binary};
use super::symphonia_decoder::SymphoniaAudioDecoder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecoderProvider {
    Ffmpeg,
    Symphonia,
}

pub struct AudioDecoderFactory;

impl AudioDecoderFactory {
    /// Falls back to symphonia when ffmpeg is requested but not runnable.
    pub fn create(
        provider: DecoderProvider,
        ffmpeg_binary: &Path,
        temp_dir: Option<PathBuf>,
        timeout: Duration,
    ) -> Arc<dyn AudioDecoder> {
        match provider {
            DecoderProvider::Ffmpeg => match check_ffmpeg_binary(ffmpeg_binary) {
                Ok(()) => {
                    tracing::info!(binary = %ffmpeg_binary.display(), "Using ffmpeg audio decoder");
                    Arc::new(
                        FfmpegAudioDecoder::new(ffmpeg_binary, temp_dir).with_timeout(timeout),
                    )
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "ffmpeg unavailable, falling back to symphonia decoder"
                    );
                    Arc::new(SymphoniaAudioDecoder)
                }
            },
            DecoderProvider::Symphonia => {
                tracing::info!("Using symphonia audio decoder");
                Arc::new(SymphoniaAudioDecoder)
            }
        }
    }

    /// Like `create` but refuses to fall back.
    pub fn create_strict(
        provider: DecoderProvider,
        ffmpeg_binary: &Path,
        temp_dir: Option<PathBuf>,
        timeout: Duration,
    ) -> Result<Arc<dyn AudioDecoder>, AudioDecoderError> {
        match provider {
            DecoderProvider::Ffmpeg => {
                check_ffmpeg_binary(ffmpeg_binary)?;
                Ok(Arc::new(
                    FfmpegAudioDecoder::new(ffmpeg_binary, temp_dir).with_timeout(timeout),
                ))
            }
            DecoderProvider::Symphonia => Ok(Arc::new(SymphoniaAudioDecoder)),
        }
    }
}
