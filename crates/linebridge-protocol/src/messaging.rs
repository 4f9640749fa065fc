//! Outbound reply API types.

use serde::{Deserialize, Serialize};

/// Body of `POST /v2/bot/message/reply`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest {
    pub reply_token: String,
    pub messages: Vec<OutboundMessage>,
}

impl ReplyMessageRequest {
    /// A reply carrying a single text message.
    pub fn text(
        reply_token: impl Into<String>,
        text: impl Into<String>,
        quote_token: Option<String>,
    ) -> Self {
        Self {
            reply_token: reply_token.into(),
            messages: vec![OutboundMessage::Text(TextReply {
                text: text.into(),
                quote_token,
            })],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    Text(TextReply),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token: Option<String>,
}

/// Error body returned by the Messaging API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(default)]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        for detail in &self.details {
            match (&detail.property, &detail.message) {
                (Some(property), Some(message)) => write!(f, "; {property}: {message}")?,
                (None, Some(message)) => write!(f, "; {message}")?,
                _ => {}
            }
        }
        Ok(())
    }
}
