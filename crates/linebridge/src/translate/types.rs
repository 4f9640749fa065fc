//! Google Cloud Translation v2 request and response bodies.

use serde::{Deserialize, Serialize};

use super::error::TranslateError;

#[derive(Debug, Serialize)]
pub(super) struct DetectRequest<'a> {
    pub q: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct TranslateRequest<'a> {
    pub q: &'a str,
    pub target: &'a str,
    pub format: &'static str,
}

/// Every v2 response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetectData {
    #[serde(default)]
    pub detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub(super) struct Detection {
    pub language: String,
    #[serde(default)]
    pub is_reliable: Option<bool>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TranslateData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub(super) struct Translation {
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl Envelope<DetectData> {
    /// `data.detections[0][0].language`
    pub fn into_language(self) -> Result<String, TranslateError> {
        self.data
            .and_then(|data| data.detections.into_iter().next())
            .and_then(|candidates| candidates.into_iter().next())
            .map(|detection| detection.language)
            .ok_or_else(|| TranslateError::MalformedResponse("missing data.detections[0][0]".into()))
    }
}

impl Envelope<TranslateData> {
    /// `data.translations[0].translatedText`
    pub fn into_translated_text(self) -> Result<String, TranslateError> {
        self.data
            .and_then(|data| data.translations.into_iter().next())
            .map(|translation| translation.translated_text)
            .ok_or_else(|| {
                TranslateError::MalformedResponse("missing data.translations[0]".into())
            })
    }
}
