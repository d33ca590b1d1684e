use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    AudioDecoder, EmotionClassifier, NoiseReducer, TranscriptionEngine, TranscriptionError,
    Translator,
};
use crate::domain::{
    EmotionLabel, LanguageCode, PipelineStage, SpeechAnalysis, Transcript, TranslatedText,
    UploadedAudio, Waveform,
};

#[derive(Debug, Clone, Copy)]
pub struct PipelineTimeouts {
    /// Bound on local CPU stages (decode, denoise).
    pub processing: Duration,
    /// Bound on each remote capability call.
    pub external: Duration,
}

impl Default for PipelineTimeouts {
    fn default() -> Self {
        Self {
            processing: Duration::from_secs(120),
            external: Duration::from_secs(30),
        }
    }
}

/// Runs one upload through decode, denoise, transcribe, then emotion and
/// translation. Holds the long-lived capability handles shared by all
/// requests.
pub struct SpeechPipelineService {
    decoder: Arc<dyn AudioDecoder>,
    noise_reducer: Arc<dyn NoiseReducer>,
    transcriber: Arc<dyn TranscriptionEngine>,
    classifier: Arc<dyn EmotionClassifier>,
    translator: Arc<dyn Translator>,
    timeouts: PipelineTimeouts,
}

impl SpeechPipelineService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        noise_reducer: Arc<dyn NoiseReducer>,
        transcriber: Arc<dyn TranscriptionEngine>,
        classifier: Arc<dyn EmotionClassifier>,
        translator: Arc<dyn Translator>,
        timeouts: PipelineTimeouts,
    ) -> Self {
        Self {
            decoder,
            noise_reducer,
            transcriber,
            classifier,
            translator,
            timeouts,
        }
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(bytes = upload.len(), format = %upload.format, target_language = %target_language)
    )]
    pub async fn process(
        &self,
        upload: UploadedAudio,
        target_language: &str,
    ) -> Result<SpeechAnalysis, PipelineError> {
        match self.run(upload, target_language).await {
            Ok(analysis) => {
                tracing::info!(stage = %PipelineStage::Responded, "Speech pipeline completed");
                Ok(analysis)
            }
            Err(e) => {
                tracing::warn!(
                    stage = %PipelineStage::Errored,
                    failed_at = %e.stage(),
                    error = %e,
                    "Speech pipeline aborted"
                );
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        upload: UploadedAudio,
        target_language: &str,
    ) -> Result<SpeechAnalysis, PipelineError> {
        tracing::debug!(stage = %PipelineStage::ReceivedUpload, "Upload received");

        let waveform = self.decode(upload).await?;
        tracing::debug!(
            stage = %PipelineStage::Decoded,
            samples = waveform.len(),
            sample_rate = waveform.sample_rate(),
            duration_secs = waveform.duration_secs(),
            "Audio decoded"
        );

        let clean = self.denoise(waveform).await?;
        tracing::debug!(stage = %PipelineStage::Denoised, "Noise reduced");

        let transcript = self.transcribe(&clean).await?;
        tracing::debug!(
            stage = %PipelineStage::Transcribed,
            chars = transcript.as_str().len(),
            "Audio transcribed"
        );

        let (emotion, translation) = tokio::join!(
            self.classify(&transcript),
            self.translate(&transcript, target_language)
        );
        let emotion = emotion?;
        let translation = translation?;
        tracing::debug!(
            stage = %PipelineStage::AnalyzedAndTranslated,
            emotion = %emotion,
            target_language = %translation.target_language,
            "Emotion analyzed and text translated"
        );

        let clean_audio = clean
            .to_wav_bytes()
            .map_err(|e| PipelineError::AudioProcessing(e.to_string()))?;

        Ok(SpeechAnalysis {
            transcript,
            translation,
            emotion,
            clean_audio,
        })
    }

    async fn decode(&self, upload: UploadedAudio) -> Result<Waveform, PipelineError> {
        let decoder = Arc::clone(&self.decoder);

        // The upload moves into the task and is dropped once decoding ends.
        let mut task = tokio::task::spawn_blocking(move || decoder.decode(&upload));

        let joined = match tokio::time::timeout(self.timeouts.processing, &mut task).await {
            Ok(joined) => joined,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeouts.processing.as_millis() as u64,
                    "Decoding exceeded deadline, waiting for decoder to release its files"
                );
                // Staged files belong to the task; they must be gone before the error is returned.
                let _ = task.await;
                return Err(PipelineError::AudioDecode("decoding timed out".to_string()));
            }
        };

        let waveform = joined
            .map_err(|e| PipelineError::AudioDecode(format!("decoder task failed: {e}")))?
            .map_err(|e| PipelineError::AudioDecode(e.to_string()))?;

        if waveform.is_empty() {
            return Err(PipelineError::AudioDecode(
                "no audio samples decoded".to_string(),
            ));
        }

        Ok(waveform)
    }

    async fn denoise(&self, waveform: Waveform) -> Result<Waveform, PipelineError> {
        let noise_reducer = Arc::clone(&self.noise_reducer);

        tokio::time::timeout(
            self.timeouts.processing,
            tokio::task::spawn_blocking(move || noise_reducer.denoise(&waveform)),
        )
        .await
        .map_err(|_| PipelineError::AudioProcessing("noise reduction timed out".to_string()))?
        .map_err(|e| PipelineError::AudioProcessing(format!("noise reduction task failed: {e}")))?
        .map_err(|e| PipelineError::AudioProcessing(e.to_string()))
    }

    async fn transcribe(&self, waveform: &Waveform) -> Result<Transcript, PipelineError> {
        let result = tokio::time::timeout(
            self.timeouts.external,
            self.transcriber.transcribe(waveform),
        )
        .await
        .map_err(|_| {
            PipelineError::TranscriptionService("speech recognition timed out".to_string())
        })?;

        result.map_err(|e| match e {
            TranscriptionError::Unintelligible => {
                PipelineError::TranscriptionUnintelligible(e.to_string())
            }
            other => PipelineError::TranscriptionService(other.to_string()),
        })
    }

    async fn classify(&self, transcript: &Transcript) -> Result<EmotionLabel, PipelineError> {
        tokio::time::timeout(
            self.timeouts.external,
            self.classifier.classify(transcript.as_str()),
        )
        .await
        .map_err(|_| PipelineError::EmotionAnalysis("emotion classification timed out".to_string()))?
        .map_err(|e| PipelineError::EmotionAnalysis(e.to_string()))
    }

    async fn translate(
        &self,
        transcript: &Transcript,
        target_language: &str,
    ) -> Result<TranslatedText, PipelineError> {
        let target = LanguageCode::parse(target_language)
            .map_err(|e| PipelineError::Translation(e.to_string()))?;

        tokio::time::timeout(
            self.timeouts.external,
            self.translator.translate(transcript.as_str(), &target),
        )
        .await
        .map_err(|_| PipelineError::Translation("translation timed out".to_string()))?
        .map_err(|e| PipelineError::Translation(e.to_string()))
    }
}

/// First failure of a request. Messages name the failing stage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No audio file provided")]
    MissingInput,
    #[error("Error converting audio to WAV: {0}")]
    AudioDecode(String),
    #[error("Error processing audio file: {0}")]
    AudioProcessing(String),
    #[error("Error transcribing audio: {0}")]
    TranscriptionUnintelligible(String),
    #[error("Error transcribing audio: {0}")]
    TranscriptionService(String),
    #[error("Error analyzing emotion: {0}")]
    EmotionAnalysis(String),
    #[error("Error translating text: {0}")]
    Translation(String),
}

impl PipelineError {
    /// Stage the request was trying to reach when it failed.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::MissingInput => PipelineStage::ReceivedUpload,
            PipelineError::AudioDecode(_) => PipelineStage::Decoded,
            PipelineError::AudioProcessing(_) => PipelineStage::Denoised,
            PipelineError::TranscriptionUnintelligible(_)
            | PipelineError::TranscriptionService(_) => PipelineStage::Transcribed,
            PipelineError::EmotionAnalysis(_) | PipelineError::Translation(_) => {
                PipelineStage::AnalyzedAndTranslated
            }
        }
    }

    /// Caller mistakes, as opposed to pipeline failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::MissingInput)
    }
}
