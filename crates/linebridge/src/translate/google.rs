//! Google Cloud Translation (v2, basic) client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::{TranslateError, check_response_error};
use super::provider::{LanguageDetector, Translator};
use super::types::{DetectData, DetectRequest, Envelope, TranslateData, TranslateRequest};

/// Detects and translates through the v2 REST endpoints.
///
/// One instance serves both roles; it holds no per-request state and is shared
/// across concurrent webhook requests.
pub struct GoogleTranslate {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleTranslate {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://translation.googleapis.com/language/translate/v2";

    #[must_use]
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Build a POST request with the API key header.
    fn build_request<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(body)
    }

    async fn send<T, R>(&self, url: &str, body: &T) -> Result<R, TranslateError>
    where
        T: serde::Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let response = self.build_request(url, body).send().await?;

        if let Some(err) = check_response_error(&response) {
            return Err(err);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api { status, message });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| TranslateError::MalformedResponse(format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl LanguageDetector for GoogleTranslate {
    async fn detect(&self, text: &str) -> Result<String, TranslateError> {
        let url = format!("{}/detect", self.base_url);
        let envelope: Envelope<DetectData> = self.send(&url, &DetectRequest { q: text }).await?;
        let language = envelope.into_language()?;
        debug!(%language, "Detected language");
        Ok(language)
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            q: text,
            target,
            format: "text",
        };
        let envelope: Envelope<TranslateData> = self.send(&self.base_url, &request).await?;
        envelope.into_translated_text()
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;
    use crate::test_support::spawn_server;

    fn provider(base_url: String) -> GoogleTranslate {
        GoogleTranslate::new(Client::new(), "test-key".to_string(), base_url)
    }

    fn api_key(headers: &HeaderMap) -> Option<String> {
        headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn detect_posts_text_and_reads_first_detection() {
        let app = Router::new().route(
            "/detect",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(api_key(&headers).as_deref(), Some("test-key"));
                assert_eq!(body, json!({ "q": "你好" }));
                Json(json!({
                    "data": { "detections": [[{ "language": "zh-TW", "isReliable": false, "confidence": 1.0 }]] }
                }))
            }),
        );
        let base_url = spawn_server(app).await;

        let language = provider(base_url).detect("你好").await.unwrap();
        assert_eq!(language, "zh-TW");
    }

    #[tokio::test]
    async fn translate_posts_target_and_plain_text_format() {
        let app = Router::new().route(
            "/",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(api_key(&headers).as_deref(), Some("test-key"));
                assert_eq!(body["q"], "Xin chào");
                assert_eq!(body["target"], "zh-TW");
                assert_eq!(body["format"], "text");
                Json(json!({
                    "data": { "translations": [{ "translatedText": "你好", "detectedSourceLanguage": "vi" }] }
                }))
            }),
        );
        let base_url = spawn_server(app).await;

        let translated = provider(format!("{base_url}/"))
            .translate("Xin chào", "zh-TW")
            .await
            .unwrap();
        assert_eq!(translated, "你好");
    }

    #[tokio::test]
    async fn api_error_carries_status_and_body() {
        let app = Router::new().route(
            "/detect",
            post(|| async { (StatusCode::FORBIDDEN, "API key not valid") }),
        );
        let base_url = spawn_server(app).await;

        let err = provider(base_url).detect("hello").await.unwrap_err();
        match err {
            TranslateError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let app = Router::new().route(
            "/",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "12")], "slow down") }),
        );
        let base_url = spawn_server(app).await;

        let err = provider(base_url).translate("hello", "vi").await.unwrap_err();
        assert!(matches!(
            err,
            TranslateError::RateLimit {
                retry_after: Some(12)
            }
        ));
    }

    #[tokio::test]
    async fn missing_translation_is_malformed() {
        let app = Router::new().route(
            "/",
            post(|| async { Json(json!({ "data": { "translations": [] } })) }),
        );
        let base_url = spawn_server(app).await;

        let err = provider(base_url).translate("hello", "vi").await.unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn non_json_success_body_is_malformed() {
        let app = Router::new().route("/detect", post(|| async { "<html>maintenance</html>" }));
        let base_url = spawn_server(app).await;

        let err = provider(base_url).detect("hello").await.unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_request_error() {
        let err = provider("http://127.0.0.1:1".to_string())
            .detect("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::Request(_)));
    }
}
