//! Decides which languages a message is translated into, and produces the reply.
//!
//! The policy is fixed:
//!
//! | detected source     | targets  |
//! |---------------------|----------|
//! | `zh`, `zh-*`        | `vi`     |
//! | `vi`                | `zh-TW`  |
//! | anything else       | none     |
//!
//! Every target is translated before anything is formatted, so a failed
//! translation never yields a partial reply.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::language::{TRADITIONAL_CHINESE, VIETNAMESE, is_chinese, is_vietnamese};
use crate::reply::format_reply;
use crate::translate::{LanguageDetector, TranslateError, Translator};

/// Target languages for a detected source language, in reply order.
pub fn target_languages(source: &str) -> &'static [&'static str] {
    if is_chinese(source) {
        &[VIETNAMESE]
    } else if is_vietnamese(source) {
        &[TRADITIONAL_CHINESE]
    } else {
        &[]
    }
}

/// Outcome of routing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// Reply with this text.
    Reply(String),
    /// Nothing to send. `detected` is `None` when detection was skipped.
    NoAction { detected: Option<String> },
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("language detection failed: {0}")]
    Detect(#[source] TranslateError),

    #[error("translation to {target} failed: {source}")]
    Translate {
        target: &'static str,
        #[source]
        source: TranslateError,
    },
}

/// Runs detect → translate → format for a single message.
#[derive(Clone)]
pub struct TranslationRouter {
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
}

impl TranslationRouter {
    pub fn new(detector: Arc<dyn LanguageDetector>, translator: Arc<dyn Translator>) -> Self {
        Self {
            detector,
            translator,
        }
    }

    pub async fn route(&self, text: &str) -> Result<Routed, RouteError> {
        if text.trim().is_empty() {
            return Ok(Routed::NoAction { detected: None });
        }

        let source = self.detector.detect(text).await.map_err(RouteError::Detect)?;
        let targets = target_languages(&source);
        if targets.is_empty() {
            debug!(%source, "Unsupported source language, not replying");
            return Ok(Routed::NoAction {
                detected: Some(source),
            });
        }

        let mut translated = Vec::with_capacity(targets.len());
        for &target in targets {
            let translation = self
                .translator
                .translate(text, target)
                .await
                .map_err(|source| RouteError::Translate { target, source })?;
            translated.push((target, translation));
        }
        debug!(%source, ?targets, "Translated message");

        Ok(Routed::Reply(format_reply(
            translated
                .iter()
                .map(|(target, translation)| (*target, translation.as_str())),
        )))
    }
}
