mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    AudioSettings, DecoderSetting, EmotionProviderSetting, EmotionSettings, LoggingSettings,
    NoiseReductionSettings, PipelineSettings, ServerSettings, Settings, TranscriptionProviderSetting,
    TranscriptionSettings, TranslationProviderSetting, TranslationSettings,
};
