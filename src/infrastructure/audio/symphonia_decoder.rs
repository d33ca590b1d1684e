use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::{UploadedAudio, Waveform};

/// In-memory decoder for the containers symphonia understands. Keeps the
/// native sample rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaAudioDecoder;

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(&self, audio: &UploadedAudio) -> Result<Waveform, AudioDecoderError> {
        decode_audio_to_waveform(audio)
    }
}

pub fn decode_audio_to_waveform(audio: &UploadedAudio) -> Result<Waveform, AudioDecoderError> {
    if audio.is_empty() {
        return Err(AudioDecoderError::DecodingFailed(
            "empty audio upload".to_string(),
        ));
    }

    let cursor = Cursor::new(audio.data.clone());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = audio.format.extension() {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioDecoderError::DecodingFailed(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AudioDecoderError::UnsupportedFormat(format!("{}: {}", audio.format, e)))?;

    let mut mono: Vec<f32> = Vec::new();
    let mut channels = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(symphonia::core::errors::Error::ResetRequired) => break,
            Err(e) => {
                return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        // Channel layout comes from each packet; container headers may omit it.
        channels = spec.channels.count();
        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let frame_mono = Waveform::from_interleaved(sample_buf.samples(), channels, sample_rate)
            .map_err(|e| AudioDecoderError::DecodingFailed(e.to_string()))?;
        mono.extend(frame_mono.into_samples());
    }

    if mono.is_empty() {
        return Err(AudioDecoderError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    let waveform = Waveform::new(mono, sample_rate)
        .map_err(|e| AudioDecoderError::DecodingFailed(e.to_string()))?;

    tracing::debug!(
        channels,
        sample_rate,
        samples = waveform.len(),
        duration_secs = waveform.duration_secs(),
        "Audio decoded to mono PCM"
    );

    Ok(waveform)
}
