use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::{UploadedAudio, Waveform};

const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Normalizes any container ffmpeg can read (WebM/Opus recordings
/// included) to 16-bit PCM WAV, then parses it.
///
/// Both the staged upload and the converted WAV live in `NamedTempFile`s
/// owned by `decode`, so they are removed on every return path. A
/// conversion that outlives `timeout` is killed before `decode` returns.
#[derive(Debug, Clone)]
pub struct FfmpegAudioDecoder {
    binary: PathBuf,
    temp_dir: Option<PathBuf>,
    timeout: Duration,
}

impl FfmpegAudioDecoder {
    pub fn new(binary: impl Into<PathBuf>, temp_dir: Option<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            temp_dir,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn temp_file(&self, suffix: &str) -> Result<NamedTempFile, AudioDecoderError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("parlance-").suffix(suffix);
        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        file.map_err(AudioDecoderError::TempFile)
    }
}

impl Default for FfmpegAudioDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY, None)
    }
}

impl AudioDecoder for FfmpegAudioDecoder {
    fn decode(&self, audio: &UploadedAudio) -> Result<Waveform, AudioDecoderError> {
        if audio.is_empty() {
            return Err(AudioDecoderError::DecodingFailed(
                "empty audio upload".to_string(),
            ));
        }

        let input_suffix = audio
            .format
            .extension()
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let mut input = self.temp_file(&input_suffix)?;
        input
            .write_all(&audio.data)
            .and_then(|_| input.flush())
            .map_err(AudioDecoderError::TempFile)?;

        let output = self.temp_file(".wav")?;
        let stderr_log = self.temp_file(".log")?;
        let stderr_handle = stderr_log.reopen().map_err(AudioDecoderError::TempFile)?;

        tracing::debug!(
            binary = %self.binary.display(),
            format = %audio.format,
            input = %input.path().display(),
            "Converting upload to WAV with ffmpeg"
        );

        let mut child = Command::new(&self.binary)
            .args(["-hide_banner", "-loglevel", "error", "-nostdin", "-y", "-i"])
            .arg(input.path())
            .args(["-vn", "-f", "wav", "-c:a", "pcm_s16le"])
            .arg(output.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::from(stderr_handle))
            .spawn()
            .map_err(|e| {
                AudioDecoderError::Unavailable(format!("{}: {}", self.binary.display(), e))
            })?;

        let status = match wait_with_deadline(&mut child, self.timeout)? {
            Some(status) => status,
            None => {
                tracing::warn!(
                    binary = %self.binary.display(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "ffmpeg conversion exceeded deadline, killing it"
                );
                // kill fails only if the child already exited; reap it either way.
                let _ = child.kill();
                child.wait().map_err(|e| AudioDecoderError::DecodingFailed(e.to_string()))?;
                return Err(AudioDecoderError::DecodingFailed(format!(
                    "ffmpeg did not finish within {} ms",
                    self.timeout.as_millis()
                )));
            }
        };

        if !status.success() {
            let stderr = std::fs::read(stderr_log.path()).unwrap_or_default();
            return Err(AudioDecoderError::DecodingFailed(format!(
                "ffmpeg exited with {}: {}",
                status,
                String::from_utf8_lossy(&stderr).trim()
            )));
        }

        let wav = std::fs::read(output.path()).map_err(AudioDecoderError::TempFile)?;
        let waveform = Waveform::from_wav_bytes(&wav)
            .map_err(|e| AudioDecoderError::DecodingFailed(e.to_string()))?;

        if waveform.is_empty() {
            return Err(AudioDecoderError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        tracing::debug!(
            sample_rate = waveform.sample_rate(),
            samples = waveform.len(),
            duration_secs = waveform.duration_secs(),
            "Audio converted and decoded to mono PCM"
        );

        Ok(waveform)
    }
}

/// `None` when the child is still running at the deadline.
fn wait_with_deadline(
    child: &mut std::process::Child,
    timeout: Duration,
) -> Result<Option<ExitStatus>, AudioDecoderError> {
    let deadline = Instant::now() + timeout;
    loop {
        let exited = child
            .try_wait()
            .map_err(|e| AudioDecoderError::DecodingFailed(e.to_string()))?;
        if let Some(status) = exited {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        std::thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

pub fn check_ffmpeg_binary(binary: &Path) -> Result<(), AudioDecoderError> {
    let output = Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .map_err(|e| AudioDecoderError::Unavailable(format!("{}: {}", binary.display(), e)))?;

    if !output.status.success() {
        return Err(AudioDecoderError::Unavailable(format!(
            "{} -version exited with {}",
            binary.display(),
            output.status
        )));
    }

    Ok(())
}
