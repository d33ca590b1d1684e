use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, File, builder::DefaultState};
use serde::Deserialize;

use crate::application::services::PipelineTimeouts;
use crate::infrastructure::audio::{
    DecoderProvider, SpectralGateConfig, TranscriptionEngineOptions, TranscriptionProvider,
};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub audio: AudioSettings,
    pub noise_reduction: NoiseReductionSettings,
    pub transcription: TranscriptionSettings,
    pub emotion: EmotionSettings,
    pub translation: TranslationSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub decoder: DecoderSetting,
    pub ffmpeg_binary: String,
    pub temp_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DecoderSetting {
    Ffmpeg,
    Symphonia,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoiseReductionSettings {
    pub fft_size: usize,
    pub hop_length: usize,
    pub n_std_thresh: f32,
    pub prop_decrease: f32,
    pub smooth_freq_bins: usize,
    pub smooth_time_frames: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmotionSettings {
    pub provider: EmotionProviderSetting,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EmotionProviderSetting {
    #[serde(rename = "huggingface")]
    HuggingFace,
    Keyword,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub provider: TranslationProviderSetting,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub default_target_language: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProviderSetting {
    #[serde(rename = "libretranslate")]
    LibreTranslate,
    Echo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub processing_timeout_secs: u64,
    pub external_timeout_secs: u64,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{Environment}`, then `APP_*`
    /// variables (`__` separates nesting, e.g. `APP_SERVER__PORT`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        with_defaults(Config::builder())?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, ignoring files and the process environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        with_defaults(Config::builder())?.build()?.try_deserialize()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb.saturating_mul(1024 * 1024)
    }

    pub fn pipeline_timeouts(&self) -> PipelineTimeouts {
        PipelineTimeouts {
            processing: Duration::from_secs(self.pipeline.processing_timeout_secs),
            external: Duration::from_secs(self.pipeline.external_timeout_secs),
        }
    }

    pub fn temp_dir(&self) -> Option<PathBuf> {
        self.audio
            .temp_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5001)?
        .set_default("server.max_upload_mb", 25)?
        .set_default("logging.level", "info")?
        .set_default("logging.enable_json", false)?
        .set_default("audio.decoder", "ffmpeg")?
        .set_default("audio.ffmpeg_binary", "ffmpeg")?
        .set_default("noise_reduction.fft_size", 1024)?
        .set_default("noise_reduction.hop_length", 256)?
        .set_default("noise_reduction.n_std_thresh", 1.5)?
        .set_default("noise_reduction.prop_decrease", 1.0)?
        .set_default("noise_reduction.smooth_freq_bins", 1)?
        .set_default("noise_reduction.smooth_time_frames", 1)?
        .set_default("transcription.provider", "openai")?
        .set_default("transcription.model", "whisper-1")?
        .set_default("emotion.provider", "huggingface")?
        .set_default("translation.provider", "libretranslate")?
        .set_default("translation.default_target_language", "en")?
        .set_default("pipeline.processing_timeout_secs", 120)?
        .set_default("pipeline.external_timeout_secs", 30)
}

impl From<DecoderSetting> for DecoderProvider {
    fn from(setting: DecoderSetting) -> Self {
        match setting {
            DecoderSetting::Ffmpeg => DecoderProvider::Ffmpeg,
            DecoderSetting::Symphonia => DecoderProvider::Symphonia,
        }
    }
}

impl From<TranscriptionProviderSetting> for TranscriptionProvider {
    fn from(setting: TranscriptionProviderSetting) -> Self {
        match setting {
            TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
            TranscriptionProviderSetting::Azure => TranscriptionProvider::Azure,
            TranscriptionProviderSetting::Mock => TranscriptionProvider::Mock,
        }
    }
}

impl From<&NoiseReductionSettings> for SpectralGateConfig {
    fn from(settings: &NoiseReductionSettings) -> Self {
        SpectralGateConfig {
            fft_size: settings.fft_size,
            hop_length: settings.hop_length,
            n_std_thresh: settings.n_std_thresh,
            prop_decrease: settings.prop_decrease,
            smooth_freq_bins: settings.smooth_freq_bins,
            smooth_time_frames: settings.smooth_time_frames,
        }
    }
}

impl From<&TranscriptionSettings> for TranscriptionEngineOptions {
    fn from(settings: &TranscriptionSettings) -> Self {
        TranscriptionEngineOptions {
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            azure_deployment: settings.azure_deployment.clone(),
            azure_api_version: settings.azure_api_version.clone(),
        }
    }
}
