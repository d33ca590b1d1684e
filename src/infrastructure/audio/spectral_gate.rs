use std::f32::consts::PI;
use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::application::ports::{NoiseReducer, NoiseReducerError};
use crate::domain::Waveform;

const MIN_MAGNITUDE: f32 = 1e-10;
const MIN_WINDOW_SUM: f32 = 1e-8;

#[derive(Debug, Clone)]
pub struct SpectralGateConfig {
    pub fft_size: usize,
    pub hop_length: usize,
    /// Bins louder than `mean + n_std_thresh * std` (dB) count as signal.
    pub n_std_thresh: f32,
    /// 1.0 removes gated bins entirely, 0.0 leaves audio untouched.
    pub prop_decrease: f32,
    /// Half-width of the mask smoothing box along frequency.
    pub smooth_freq_bins: usize,
    /// Half-width of the mask smoothing box along time.
    pub smooth_time_frames: usize,
}

impl Default for SpectralGateConfig {
    fn default() -> Self {
        Self {
            fft_size: 1024,
            hop_length: 256,
            n_std_thresh: 1.5,
            prop_decrease: 1.0,
            smooth_freq_bins: 1,
            smooth_time_frames: 1,
        }
    }
}

/// Stationary spectral gating: the noise profile is estimated per
/// frequency bin from the whole signal, and time-frequency cells below it
/// are attenuated.
pub struct SpectralGateNoiseReducer {
    config: SpectralGateConfig,
    forward: Arc<dyn Fft<f32>>,
    inverse: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
}

impl SpectralGateNoiseReducer {
    pub fn new(config: SpectralGateConfig) -> Result<Self, NoiseReducerError> {
        if config.fft_size < 16 {
            return Err(NoiseReducerError::InvalidParameters(format!(
                "fft_size must be at least 16, got {}",
                config.fft_size
            )));
        }
        if config.hop_length == 0 || config.hop_length > config.fft_size {
            return Err(NoiseReducerError::InvalidParameters(format!(
                "hop_length must be in 1..={}, got {}",
                config.fft_size, config.hop_length
            )));
        }
        if !(0.0..=1.0).contains(&config.prop_decrease) {
            return Err(NoiseReducerError::InvalidParameters(format!(
                "prop_decrease must be in 0.0..=1.0, got {}",
                config.prop_decrease
            )));
        }
        if !config.n_std_thresh.is_finite() {
            return Err(NoiseReducerError::InvalidParameters(
                "n_std_thresh must be finite".to_string(),
            ));
        }

        let mut planner = FftPlanner::<f32>::new();
        let forward = planner.plan_fft_forward(config.fft_size);
        let inverse = planner.plan_fft_inverse(config.fft_size);
        let window = hann_window(config.fft_size);

        Ok(Self {
            config,
            forward,
            inverse,
            window,
        })
    }

    fn stft(&self, padded: &[f32], num_frames: usize) -> Vec<Vec<Complex<f32>>> {
        let n_fft = self.config.fft_size;
        let hop = self.config.hop_length;

        (0..num_frames)
            .map(|frame_idx| {
                let start = frame_idx * hop;
                let mut frame: Vec<Complex<f32>> = padded[start..start + n_fft]
                    .iter()
                    .zip(&self.window)
                    .map(|(&x, &w)| Complex::new(x * w, 0.0))
                    .collect();
                self.forward.process(&mut frame);
                frame
            })
            .collect()
    }

    fn istft(&self, spectrum: Vec<Vec<Complex<f32>>>, total_len: usize) -> Vec<f32> {
        let n_fft = self.config.fft_size;
        let hop = self.config.hop_length;
        let scale = 1.0 / n_fft as f32;

        let mut output = vec![0.0f32; total_len];
        let mut window_sum = vec![0.0f32; total_len];

        for (frame_idx, mut frame) in spectrum.into_iter().enumerate() {
            self.inverse.process(&mut frame);
            let start = frame_idx * hop;
            for (i, value) in frame.iter().enumerate() {
                let w = self.window[i];
                output[start + i] += value.re * scale * w;
                window_sum[start + i] += w * w;
            }
        }

        for (sample, &sum) in output.iter_mut().zip(&window_sum) {
            if sum > MIN_WINDOW_SUM {
                *sample /= sum;
            }
        }

        output
    }

    /// Per-bin gain in [1 - prop_decrease, 1] for the positive-frequency half.
    fn gains(&self, spectrum: &[Vec<Complex<f32>>]) -> Vec<Vec<f32>> {
        let bins = self.config.fft_size / 2 + 1;
        let frames = spectrum.len();

        let db: Vec<Vec<f32>> = spectrum
            .iter()
            .map(|frame| {
                frame[..bins]
                    .iter()
                    .map(|c| 20.0 * c.norm().max(MIN_MAGNITUDE).log10())
                    .collect()
            })
            .collect();

        let thresholds: Vec<f32> = (0..bins)
            .map(|k| {
                let mean = db.iter().map(|f| f[k]).sum::<f32>() / frames as f32;
                let variance =
                    db.iter().map(|f| (f[k] - mean).powi(2)).sum::<f32>() / frames as f32;
                mean + self.config.n_std_thresh * variance.sqrt()
            })
            .collect();

        let mask: Vec<Vec<f32>> = db
            .iter()
            .map(|frame| {
                frame
                    .iter()
                    .zip(&thresholds)
                    .map(|(&v, &t)| if v > t { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();

        let smoothed = smooth_mask(
            &mask,
            self.config.smooth_time_frames,
            self.config.smooth_freq_bins,
        );

        smoothed
            .into_iter()
            .map(|frame| {
                frame
                    .into_iter()
                    .map(|m| 1.0 - self.config.prop_decrease * (1.0 - m))
                    .collect()
            })
            .collect()
    }
}

impl NoiseReducer for SpectralGateNoiseReducer {
    fn denoise(&self, waveform: &Waveform) -> Result<Waveform, NoiseReducerError> {
        if waveform.is_empty() {
            return Err(NoiseReducerError::EmptyWaveform);
        }
        if waveform.samples().iter().any(|s| !s.is_finite()) {
            return Err(NoiseReducerError::NonFiniteSamples);
        }

        let n_fft = self.config.fft_size;
        let hop = self.config.hop_length;
        let pad = n_fft / 2;
        let len = waveform.len();

        let centered_len = len + 2 * pad;
        let num_frames = if centered_len <= n_fft {
            1
        } else {
            1 + (centered_len - n_fft).div_ceil(hop)
        };
        let total_len = n_fft + (num_frames - 1) * hop;

        let mut padded = vec![0.0f32; total_len];
        padded[pad..pad + len].copy_from_slice(waveform.samples());

        let mut spectrum = self.stft(&padded, num_frames);
        let gains = self.gains(&spectrum);

        for (frame, frame_gains) in spectrum.iter_mut().zip(&gains) {
            for (k, &g) in frame_gains.iter().enumerate() {
                frame[k] *= g;
                // Mirror onto the negative frequencies to keep the output real.
                if k != 0 && k != n_fft - k {
                    frame[n_fft - k] *= g;
                }
            }
        }

        let restored = self.istft(spectrum, total_len);
        let samples = restored[pad..pad + len].to_vec();

        tracing::debug!(
            samples = len,
            frames = num_frames,
            sample_rate = waveform.sample_rate(),
            "Spectral gate applied"
        );

        Ok(waveform.with_samples(samples))
    }
}

fn hann_window(length: usize) -> Vec<f32> {
    // Periodic Hann sums to a constant under 75% overlap.
    (0..length)
        .map(|i| 0.5 - 0.5 * ((2.0 * PI * i as f32) / length as f32).cos())
        .collect()
}

fn smooth_mask(mask: &[Vec<f32>], half_time: usize, half_freq: usize) -> Vec<Vec<f32>> {
    if half_time == 0 && half_freq == 0 {
        return mask.to_vec();
    }

    let frames = mask.len();
    let bins = mask.first().map(Vec::len).unwrap_or(0);

    (0..frames)
        .map(|t| {
            let t_lo = t.saturating_sub(half_time);
            let t_hi = (t + half_time).min(frames - 1);
            (0..bins)
                .map(|k| {
                    let k_lo = k.saturating_sub(half_freq);
                    let k_hi = (k + half_freq).min(bins - 1);
                    let mut sum = 0.0;
                    for row in &mask[t_lo..=t_hi] {
                        sum += row[k_lo..=k_hi].iter().sum::<f32>();
                    }
                    sum / ((t_hi - t_lo + 1) * (k_hi - k_lo + 1)) as f32
                })
                .collect()
        })
        .collect()
}
