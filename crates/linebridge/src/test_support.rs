//! Test doubles shared across unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::line::{LineError, ReplySender};
use crate::translate::{LanguageDetector, TranslateError, Translator};

/// Reports a fixed language, or fails when `language` is `None`.
pub struct StubDetector {
    language: Option<String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl StubDetector {
    pub fn detecting(language: &str) -> Self {
        Self {
            language: Some(language.to_string()),
            delay: None,
            calls: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            language: None,
            delay: None,
            calls: Mutex::default(),
        }
    }

    /// Fails after `delay`, like a client hitting its own timeout.
    pub fn failing_after(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::failing()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LanguageDetector for StubDetector {
    async fn detect(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.language.clone().ok_or(TranslateError::Api {
            status: 500,
            message: "detector unavailable".to_string(),
        })
    }
}

/// Returns `"<target>:<text>"`, or fails for every call when `failing`.
#[derive(Default)]
pub struct StubTranslator {
    failing: bool,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubTranslator {
    pub fn failing() -> Self {
        Self {
            failing: true,
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target.to_string()));
        if self.failing {
            return Err(TranslateError::MalformedResponse(
                "missing data.translations[0]".to_string(),
            ));
        }
        Ok(format!("<{target}:{text}>"))
    }
}

/// A reply as seen by [`RecordingReplySender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub reply_token: String,
    pub text: String,
    pub quote_token: Option<String>,
}

#[derive(Default)]
pub struct RecordingReplySender {
    failing: bool,
    sent: Mutex<Vec<SentReply>>,
}

impl RecordingReplySender {
    pub fn failing() -> Self {
        Self {
            failing: true,
            sent: Mutex::default(),
        }
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingReplySender {
    async fn reply_text(
        &self,
        reply_token: &str,
        text: &str,
        quote_token: Option<&str>,
    ) -> Result<(), LineError> {
        if self.failing {
            return Err(LineError::Api {
                status: 400,
                message: "Invalid reply token".to_string(),
            });
        }
        self.sent.lock().unwrap().push(SentReply {
            reply_token: reply_token.to_string(),
            text: text.to_string(),
            quote_token: quote_token.map(str::to_string),
        });
        Ok(())
    }
}

/// Serve `app` on an ephemeral localhost port and return its base URL.
#[cfg(feature = "server")]
pub async fn spawn_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
