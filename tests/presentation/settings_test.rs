use std::time::Duration;

use parlance::presentation::Settings;
use parlance::presentation::config::{
    DecoderSetting, EmotionProviderSetting, TranscriptionProviderSetting,
    TranslationProviderSetting,
};

#[test]
fn given_no_overrides_when_loading_defaults_then_serves_on_5001() {
    let settings = Settings::defaults().unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5001);
    assert_eq!(settings.max_upload_bytes(), 25 * 1024 * 1024);
}

#[test]
fn given_no_overrides_when_loading_defaults_then_selects_remote_providers() {
    let settings = Settings::defaults().unwrap();

    assert_eq!(settings.audio.decoder, DecoderSetting::Ffmpeg);
    assert_eq!(
        settings.transcription.provider,
        TranscriptionProviderSetting::OpenAi
    );
    assert_eq!(settings.emotion.provider, EmotionProviderSetting::HuggingFace);
    assert_eq!(
        settings.translation.provider,
        TranslationProviderSetting::LibreTranslate
    );
    assert_eq!(settings.translation.default_target_language, "en");
}

#[test]
fn given_no_overrides_when_deriving_timeouts_then_uses_pipeline_defaults() {
    let timeouts = Settings::defaults().unwrap().pipeline_timeouts();

    assert_eq!(timeouts.processing, Duration::from_secs(120));
    assert_eq!(timeouts.external, Duration::from_secs(30));
}

#[test]
fn given_blank_temp_dir_when_resolving_then_uses_system_default() {
    let mut settings = Settings::defaults().unwrap();
    assert!(settings.temp_dir().is_none());

    settings.audio.temp_dir = Some("   ".to_string());
    assert!(settings.temp_dir().is_none());

    settings.audio.temp_dir = Some("/var/tmp/parlance".to_string());
    assert_eq!(
        settings.temp_dir().unwrap().to_str(),
        Some("/var/tmp/parlance")
    );
}
