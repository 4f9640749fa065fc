//! Detection and translation traits.

use async_trait::async_trait;

use super::error::TranslateError;

/// Guesses the language of a piece of text.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Return the best-guess language code for non-empty `text`.
    async fn detect(&self, text: &str) -> Result<String, TranslateError>;
}

/// Translates text into a target language.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}
