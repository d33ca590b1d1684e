use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use parlance::application::ports::{EmotionClassifier, TranscriptionEngine, Translator};
use parlance::application::services::SpeechPipelineService;
use parlance::infrastructure::audio::{
    AudioDecoderFactory, MockTranscriptionEngine, SpectralGateConfig, SpectralGateNoiseReducer,
    TranscriptionEngineFactory,
};
use parlance::infrastructure::build_http_client;
use parlance::infrastructure::emotion::{HuggingFaceEmotionClassifier, KeywordEmotionClassifier};
use parlance::infrastructure::observability::{TracingConfig, init_tracing};
use parlance::infrastructure::translation::{EchoTranslator, LibreTranslateClient};
use parlance::presentation::config::{EmotionProviderSetting, TranslationProviderSetting};
use parlance::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    let json_logs = settings.logging.enable_json
        || std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);
    init_tracing(&TracingConfig::new(
        environment.as_str(),
        json_logs,
        &settings.logging.level,
    ));

    let scaffold_config = ScaffoldConfig::default();
    let pipeline = Arc::new(build_pipeline(&settings, &scaffold_config)?);

    let state = AppState {
        pipeline,
        settings: settings.clone(),
        scaffold_config,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Loads every capability handle once; they live for the whole process.
fn build_pipeline(
    settings: &Settings,
    scaffold: &ScaffoldConfig,
) -> anyhow::Result<SpeechPipelineService> {
    let timeouts = settings.pipeline_timeouts();
    let http_client = build_http_client(timeouts.external).context("failed to build HTTP client")?;

    let decoder = AudioDecoderFactory::create(
        settings.audio.decoder.into(),
        Path::new(&settings.audio.ffmpeg_binary),
        settings.temp_dir(),
        timeouts.processing,
    );

    let noise_reducer = Arc::new(
        SpectralGateNoiseReducer::new(SpectralGateConfig::from(&settings.noise_reduction))
            .context("invalid noise reduction settings")?,
    );

    let (transcriber, classifier, translator): (
        Arc<dyn TranscriptionEngine>,
        Arc<dyn EmotionClassifier>,
        Arc<dyn Translator>,
    ) = if scaffold.enabled {
        tracing::warn!("Scaffold mode enabled, remote capabilities replaced with local doubles");
        (
            Arc::new(
                MockTranscriptionEngine::new(scaffold.mock_transcript.clone())
                    .with_delay(Duration::from_millis(scaffold.mock_response_delay_ms)),
            ),
            Arc::new(KeywordEmotionClassifier),
            Arc::new(EchoTranslator),
        )
    } else {
        let transcriber = TranscriptionEngineFactory::create(
            settings.transcription.provider.into(),
            (&settings.transcription).into(),
            http_client.clone(),
        )
        .context("failed to create transcription engine")?;

        let classifier: Arc<dyn EmotionClassifier> = match settings.emotion.provider {
            EmotionProviderSetting::HuggingFace => Arc::new(
                HuggingFaceEmotionClassifier::new(
                    settings.emotion.base_url.clone(),
                    settings.emotion.model.clone(),
                    settings.emotion.api_key.clone(),
                )
                .with_http_client(http_client.clone()),
            ),
            EmotionProviderSetting::Keyword => Arc::new(KeywordEmotionClassifier),
        };

        let translator: Arc<dyn Translator> = match settings.translation.provider {
            TranslationProviderSetting::LibreTranslate => Arc::new(
                LibreTranslateClient::new(
                    settings.translation.base_url.clone(),
                    settings.translation.api_key.clone(),
                )
                .with_http_client(http_client.clone()),
            ),
            TranslationProviderSetting::Echo => Arc::new(EchoTranslator),
        };

        (transcriber, classifier, translator)
    };

    Ok(SpeechPipelineService::new(
        decoder,
        noise_reducer,
        transcriber,
        classifier,
        translator,
        timeouts,
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
