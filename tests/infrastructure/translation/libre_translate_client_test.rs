use parlance::application::ports::{Translator, TranslatorError};
use parlance::domain::LanguageCode;
use parlance::infrastructure::translation::{EchoTranslator, LibreTranslateClient};

use crate::helpers::start_mock_server;

fn client(base_url: String) -> LibreTranslateClient {
    LibreTranslateClient::new(Some(base_url), None)
}

fn lang(code: &str) -> LanguageCode {
    LanguageCode::parse(code).unwrap()
}

#[tokio::test]
async fn given_english_text_when_translating_to_french_then_returns_translation() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/translate",
        200,
        "application/json",
        r#"{"translatedText":"bonjour","detectedLanguage":{"confidence":92.0,"language":"en"}}"#,
    )
    .await;

    let translated = client(base_url).translate("hello", &lang("fr")).await.unwrap();

    assert_eq!(translated.text, "bonjour");
    assert_eq!(translated.target_language.as_str(), "fr");
    assert_eq!(translated.detected_language.as_deref(), Some("en"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_text_already_in_target_language_when_translating_then_returns_input_unchanged() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/translate",
        200,
        "application/json",
        r#"{"translatedText":"Hello.","detectedLanguage":{"confidence":90.0,"language":"en"}}"#,
    )
    .await;

    let translated = client(base_url).translate("hello", &lang("en")).await.unwrap();

    assert_eq!(translated.text, "hello");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_regional_target_and_bare_detected_language_when_translating_then_keeps_translation() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/translate",
        200,
        "application/json",
        r#"{"translatedText":"你好嗎","detectedLanguage":{"confidence":88.0,"language":"zh"}}"#,
    )
    .await;

    let translated = client(base_url)
        .translate("你好吗", &lang("zh-TW"))
        .await
        .unwrap();

    assert_eq!(translated.text, "你好嗎");
    assert_eq!(translated.detected_language.as_deref(), Some("zh"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_detection_when_translating_then_uses_translated_text() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/translate",
        200,
        "application/json",
        r#"{"translatedText":"नमस्ते"}"#,
    )
    .await;

    let translated = client(base_url).translate("hello", &lang("hi")).await.unwrap();

    assert_eq!(translated.text, "नमस्ते");
    assert!(translated.detected_language.is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unsupported_target_when_translating_then_returns_unsupported_language() {
    let (base_url, shutdown_tx) = start_mock_server(
        "/translate",
        400,
        "application/json",
        r#"{"error":"xx is not supported"}"#,
    )
    .await;

    let result = client(base_url).translate("hello", &lang("xx")).await;

    assert!(matches!(result, Err(TranslatorError::UnsupportedLanguage(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_translating_then_returns_api_error() {
    let (base_url, shutdown_tx) =
        start_mock_server("/translate", 502, "text/plain", "bad gateway").await;

    let result = client(base_url).translate("hello", &lang("fr")).await;

    assert!(matches!(result, Err(TranslatorError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_body_when_translating_then_returns_invalid_response() {
    let (base_url, shutdown_tx) =
        start_mock_server("/translate", 200, "application/json", r#"{"text":"x"}"#).await;

    let result = client(base_url).translate("hello", &lang("fr")).await;

    assert!(matches!(result, Err(TranslatorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_echo_translator_when_translating_then_returns_input() {
    let translated = EchoTranslator.translate("hola", &lang("en")).await.unwrap();

    assert_eq!(translated.text, "hola");
    assert_eq!(translated.target_language.as_str(), "en");
}
