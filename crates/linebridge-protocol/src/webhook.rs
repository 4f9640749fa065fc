//! Inbound webhook payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level body of a webhook request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    /// Bot user ID the events are addressed to.
    #[serde(default)]
    pub destination: Option<String>,
    /// Empty when the platform sends a "verify webhook" request.
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

impl WebhookPayload {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// A single webhook event, dispatched on its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebhookEvent {
    Message(MessageEvent),
    /// follow, unfollow, join, postback and everything else.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Absent for events delivered while the channel is in standby mode.
    #[serde(default)]
    pub reply_token: Option<String>,
    pub message: MessageContent,
    #[serde(default)]
    pub source: Option<Source>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub webhook_event_id: Option<String>,
    #[serde(default)]
    pub delivery_context: Option<DeliveryContext>,
}

impl MessageEvent {
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    pub fn is_redelivery(&self) -> bool {
        self.delivery_context
            .as_ref()
            .is_some_and(|ctx| ctx.is_redelivery)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryContext {
    #[serde(default)]
    pub is_redelivery: bool,
}

/// Message body, dispatched on its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text(TextMessage),
    /// image, sticker, video, audio, location, file.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    pub id: String,
    pub text: String,
    /// Lets a reply quote this message.
    #[serde(default)]
    pub quote_token: Option<String>,
}

/// Where the event originated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
}

impl Source {
    /// The conversation ID: group or room when present, otherwise the user.
    pub fn conversation_id(&self) -> Option<&str> {
        match self.kind {
            SourceKind::Group => self.group_id.as_deref(),
            SourceKind::Room => self.room_id.as_deref(),
            SourceKind::User | SourceKind::Unknown => self.user_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    User,
    Group,
    Room,
    #[serde(other)]
    Unknown,
}
