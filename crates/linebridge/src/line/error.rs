use thiserror::Error;

/// Errors from the Messaging API.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("messaging api error (status {status}): {message}")]
    Api { status: u16, message: String },
}
