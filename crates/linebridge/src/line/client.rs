//! Reply API client.

use async_trait::async_trait;
use linebridge_protocol::{ApiErrorResponse, ReplyMessageRequest};
use reqwest::Client;
use tracing::debug;

use super::error::LineError;

/// Sends a reply addressed by a single-use reply token.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply_text(
        &self,
        reply_token: &str,
        text: &str,
        quote_token: Option<&str>,
    ) -> Result<(), LineError>;
}

/// Messaging API client authenticated with a channel access token.
pub struct LineMessagingClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl LineMessagingClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.line.me";

    #[must_use]
    pub fn new(client: Client, access_token: String, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }
}

#[async_trait]
impl ReplySender for LineMessagingClient {
    async fn reply_text(
        &self,
        reply_token: &str,
        text: &str,
        quote_token: Option<&str>,
    ) -> Result<(), LineError> {
        let url = format!("{}/v2/bot/message/reply", self.base_url);
        let request = ReplyMessageRequest::text(reply_token, text, quote_token.map(str::to_string));

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) => err.to_string(),
                Err(_) => body,
            };
            return Err(LineError::Api { status, message });
        }

        debug!(quoted = quote_token.is_some(), "Reply sent");
        Ok(())
    }
}
