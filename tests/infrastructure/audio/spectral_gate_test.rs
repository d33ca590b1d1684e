use parlance::application::ports::{NoiseReducer, NoiseReducerError};
use parlance::domain::Waveform;
use parlance::infrastructure::audio::{SpectralGateConfig, SpectralGateNoiseReducer};

use crate::helpers::{noise, rms, sine};

const RATE: u32 = 16_000;

fn reducer() -> SpectralGateNoiseReducer {
    SpectralGateNoiseReducer::new(SpectralGateConfig::default()).unwrap()
}

/// Two seconds of low hiss with a loud 500 Hz tone in the middle half second.
fn hiss_with_tone_burst() -> (Vec<f32>, std::ops::Range<usize>) {
    let total = 2 * RATE as usize;
    let burst = (3 * RATE as usize / 4)..(5 * RATE as usize / 4);
    let mut samples = noise(total, 0.05, 7);
    let tone = sine(500.0, 0.5, RATE, 0.5);
    for (sample, t) in samples[burst.clone()].iter_mut().zip(tone) {
        *sample += t;
    }
    (samples, burst)
}

#[test]
fn given_silence_when_denoising_then_returns_silence() {
    let waveform = Waveform::new(vec![0.0; 4_000], RATE).unwrap();

    let clean = reducer().denoise(&waveform).unwrap();

    assert_eq!(clean.len(), 4_000);
    assert!(clean.samples().iter().all(|&s| s == 0.0));
}

#[test]
fn given_any_waveform_when_denoising_then_keeps_length_and_rate() {
    for len in [1, 100, 1_023, 1_024, 12_345] {
        let waveform = Waveform::new(noise(len, 0.3, len as u64), 22_050).unwrap();

        let clean = reducer().denoise(&waveform).unwrap();

        assert_eq!(clean.len(), len);
        assert_eq!(clean.sample_rate(), 22_050);
        assert!(clean.samples().iter().all(|s| s.is_finite()));
    }
}

#[test]
fn given_same_input_when_denoising_twice_then_output_is_identical() {
    let (samples, _) = hiss_with_tone_burst();
    let waveform = Waveform::new(samples, RATE).unwrap();
    let reducer = reducer();

    let first = reducer.denoise(&waveform).unwrap();
    let second = reducer.denoise(&waveform).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_hiss_with_tone_burst_when_denoising_then_attenuates_hiss_and_keeps_tone() {
    let (samples, burst) = hiss_with_tone_burst();
    let waveform = Waveform::new(samples.clone(), RATE).unwrap();

    let clean = reducer().denoise(&waveform).unwrap();

    let hiss_only = 1_000..(burst.start - 2_000);
    let tone_core = (burst.start + 2_000)..(burst.end - 2_000);

    let hiss_before = rms(&samples[hiss_only.clone()]);
    let hiss_after = rms(&clean.samples()[hiss_only]);
    assert!(
        hiss_after < hiss_before * 0.6,
        "hiss rms {hiss_before} -> {hiss_after}"
    );

    let tone_before = rms(&samples[tone_core.clone()]);
    let tone_after = rms(&clean.samples()[tone_core]);
    assert!(
        tone_after > tone_before * 0.5,
        "tone rms {tone_before} -> {tone_after}"
    );
}

#[test]
fn given_zero_reduction_when_denoising_then_reconstructs_input() {
    let reducer = SpectralGateNoiseReducer::new(SpectralGateConfig {
        prop_decrease: 0.0,
        ..SpectralGateConfig::default()
    })
    .unwrap();
    let samples = noise(5_000, 0.4, 3);
    let waveform = Waveform::new(samples.clone(), RATE).unwrap();

    let clean = reducer.denoise(&waveform).unwrap();

    for (a, b) in clean.samples().iter().zip(&samples) {
        assert!((a - b).abs() < 1e-4);
    }
}

#[test]
fn given_empty_waveform_when_denoising_then_returns_error() {
    let waveform = Waveform::new(Vec::new(), RATE).unwrap();

    let result = reducer().denoise(&waveform);

    assert!(matches!(result, Err(NoiseReducerError::EmptyWaveform)));
}

#[test]
fn given_nan_sample_when_denoising_then_returns_error() {
    let waveform = Waveform::new(vec![0.1, f32::NAN, 0.2], RATE).unwrap();

    let result = reducer().denoise(&waveform);

    assert!(matches!(result, Err(NoiseReducerError::NonFiniteSamples)));
}

#[test]
fn given_invalid_parameters_when_building_reducer_then_returns_error() {
    let bad_configs = [
        SpectralGateConfig {
            fft_size: 8,
            ..SpectralGateConfig::default()
        },
        SpectralGateConfig {
            hop_length: 0,
            ..SpectralGateConfig::default()
        },
        SpectralGateConfig {
            hop_length: 2_048,
            ..SpectralGateConfig::default()
        },
        SpectralGateConfig {
            prop_decrease: 1.5,
            ..SpectralGateConfig::default()
        },
    ];

    for config in bad_configs {
        assert!(matches!(
            SpectralGateNoiseReducer::new(config),
            Err(NoiseReducerError::InvalidParameters(_))
        ));
    }
}
