use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;
use crate::domain::{SpeechAnalysis, UploadedAudio};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

const AUDIO_FIELD: &str = "audio";
const TARGET_LANGUAGE_FIELD: &str = "target_language";

#[derive(Debug, Serialize)]
pub struct ProcessSpeechResponse {
    pub original_text: String,
    pub translated_text: String,
    pub emotion: String,
    /// WAV bytes, serialized as a JSON array of integers.
    pub clean_audio: Vec<u8>,
}

impl From<SpeechAnalysis> for ProcessSpeechResponse {
    fn from(analysis: SpeechAnalysis) -> Self {
        Self {
            original_text: analysis.transcript.into_string(),
            translated_text: analysis.translation.text,
            emotion: analysis.emotion.to_string(),
            clean_audio: analysis.clean_audio,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Default)]
struct SpeechForm {
    audio: Option<UploadedAudio>,
    target_language: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_speech_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A body that is not multipart at all carries no audio field either.
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(rejection = %rejection, "Speech request without multipart body");
            return error_response(&PipelineError::MissingInput);
        }
    };

    let form = match read_speech_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let Some(upload) = form.audio else {
        tracing::warn!("Speech request with no audio field");
        return error_response(&PipelineError::MissingInput);
    };

    let target_language = form
        .target_language
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| state.settings.translation.default_target_language.clone());

    tracing::debug!(
        filename = upload.filename.as_deref().unwrap_or("unknown"),
        format = %upload.format,
        bytes = upload.len(),
        target_language = %target_language,
        "Processing speech upload"
    );

    match state.pipeline.process(upload, &target_language).await {
        Ok(analysis) => {
            tracing::info!(
                transcript = %sanitize_transcript(analysis.transcript.as_str()),
                emotion = %analysis.emotion,
                clean_audio_bytes = analysis.clean_audio.len(),
                "Speech processed"
            );
            (
                StatusCode::OK,
                Json(ProcessSpeechResponse::from(analysis)),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

async fn read_speech_form(multipart: &mut Multipart) -> Result<SpeechForm, MultipartError> {
    let mut form = SpeechForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(AUDIO_FIELD) => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                form.audio = Some(UploadedAudio::new(
                    data.to_vec(),
                    filename,
                    content_type.as_deref(),
                ));
            }
            Some(TARGET_LANGUAGE_FIELD) => {
                form.target_language = Some(field.text().await?);
            }
            other => {
                tracing::debug!(field = other.unwrap_or("unnamed"), "Ignoring multipart field");
            }
        }
    }

    Ok(form)
}

fn error_response(error: &PipelineError) -> Response {
    let status = if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
