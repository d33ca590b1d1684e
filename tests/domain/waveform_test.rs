use parlance::domain::{Waveform, WaveformError};

use crate::helpers::build_wav;

#[test]
fn given_zero_sample_rate_when_creating_waveform_then_returns_error() {
    let result = Waveform::new(vec![0.0; 10], 0);

    assert!(matches!(result, Err(WaveformError::ZeroSampleRate)));
}

#[test]
fn given_stereo_frames_when_downmixing_then_averages_channels() {
    let interleaved = [0.5, -0.5, 1.0, 0.0, -0.2, -0.4];

    let waveform = Waveform::from_interleaved(&interleaved, 2, 44_100).unwrap();

    assert_eq!(waveform.len(), 3);
    assert_eq!(waveform.sample_rate(), 44_100);
    let expected = [0.0, 0.5, -0.3];
    for (actual, expected) in waveform.samples().iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-6);
    }
}

#[test]
fn given_zero_channels_when_downmixing_then_returns_error() {
    let result = Waveform::from_interleaved(&[0.1, 0.2], 0, 16_000);

    assert!(matches!(result, Err(WaveformError::ZeroChannels)));
}

#[test]
fn given_one_second_at_8khz_when_measuring_then_duration_is_one_second() {
    let waveform = Waveform::new(vec![0.0; 8_000], 8_000).unwrap();

    assert!((waveform.duration_secs() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn given_waveform_when_encoding_wav_then_decodes_back_at_native_rate() {
    let samples: Vec<f32> = (0..2_205).map(|i| ((i % 100) as f32 / 100.0) - 0.5).collect();
    let waveform = Waveform::new(samples.clone(), 22_050).unwrap();

    let bytes = waveform.to_wav_bytes().unwrap();
    let decoded = Waveform::from_wav_bytes(&bytes).unwrap();

    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(decoded.sample_rate(), 22_050);
    assert_eq!(decoded.len(), samples.len());
    for (a, b) in decoded.samples().iter().zip(&samples) {
        assert!((a - b).abs() < 1e-3);
    }
}

#[test]
fn given_out_of_range_and_nan_samples_when_encoding_wav_then_clamps_and_zeroes() {
    let waveform = Waveform::new(vec![2.0, -3.0, f32::NAN], 16_000).unwrap();

    let decoded = Waveform::from_wav_bytes(&waveform.to_wav_bytes().unwrap()).unwrap();

    let samples = decoded.samples();
    assert!((samples[0] - 1.0).abs() < 1e-3);
    assert!((samples[1] + 1.0).abs() < 1e-3);
    assert_eq!(samples[2], 0.0);
}

#[test]
fn given_stereo_pcm_wav_when_parsing_then_returns_mono_at_file_rate() {
    let wav = build_wav(8_000, 2, &[16_384, 0, -16_384, -16_384, 0, 0]);

    let waveform = Waveform::from_wav_bytes(&wav).unwrap();

    assert_eq!(waveform.sample_rate(), 8_000);
    assert_eq!(waveform.len(), 3);
    assert!((waveform.samples()[0] - 0.25).abs() < 1e-4);
    assert!((waveform.samples()[1] + 0.5).abs() < 1e-4);
    assert_eq!(waveform.samples()[2], 0.0);
}

#[test]
fn given_garbage_bytes_when_parsing_wav_then_returns_parsing_error() {
    let result = Waveform::from_wav_bytes(b"this is not a riff file");

    assert!(matches!(result, Err(WaveformError::Parsing(_))));
}
