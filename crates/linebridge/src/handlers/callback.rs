//! Webhook endpoint.
//!
//! A request moves through: signature check → payload parse → per-event
//! dispatch → reply. Authentication and parse failures stop before any
//! outbound call and answer 400. An upstream failure while dispatching answers
//! 500 and leaves the remaining events of that payload unprocessed.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use linebridge_protocol::{
    MessageContent, MessageEvent, SIGNATURE_HEADER, WebhookEvent, WebhookPayload,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::line::{LineError, verify_signature};
use crate::response;
use crate::routing::{RouteError, Routed};
use crate::server::AppState;

/// Failure while handling an already-authenticated event.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("failed to send reply: {0}")]
    Reply(#[from] LineError),
}

/// POST /callback
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    debug!(body = %String::from_utf8_lossy(&body), "Request body");

    let Some(signature) = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        warn!("Webhook request without signature header");
        return response::bad_request("missing signature").into_response();
    };

    if !verify_signature(&state.channel_secret, &body, signature) {
        info!("Invalid signature. Please check your channel access token/channel secret.");
        return response::bad_request("invalid signature").into_response();
    }

    let payload = match WebhookPayload::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Malformed webhook payload");
            return response::bad_request("malformed payload").into_response();
        }
    };

    if let Err(e) = dispatch(&state, payload).await {
        error!(error = %e, "Failed to handle webhook event");
        return response::internal_error("failed to handle event").into_response();
    }

    (StatusCode::OK, "OK").into_response()
}

async fn dispatch(state: &AppState, payload: WebhookPayload) -> Result<(), DispatchError> {
    debug!(
        destination = payload.destination.as_deref().unwrap_or_default(),
        events = payload.events.len(),
        "Dispatching webhook"
    );

    for event in payload.events {
        match event {
            WebhookEvent::Message(event) => handle_message(state, event).await?,
            WebhookEvent::Other => debug!("Ignoring non-message event"),
        }
    }
    Ok(())
}

async fn handle_message(state: &AppState, event: MessageEvent) -> Result<(), DispatchError> {
    let MessageContent::Text(message) = &event.message else {
        debug!("Ignoring non-text message");
        return Ok(());
    };
    let Some(reply_token) = event.reply_token.as_deref() else {
        debug!(mode = event.mode.as_deref(), "Message without reply token, skipping");
        return Ok(());
    };

    debug!(
        message_id = %message.id,
        webhook_event_id = event.webhook_event_id.as_deref(),
        conversation = event.source.as_ref().and_then(|s| s.conversation_id()),
        received_at = ?event.received_at(),
        redelivery = event.is_redelivery(),
        "Handling text message"
    );

    match state.router.route(&message.text).await? {
        Routed::Reply(text) if !text.is_empty() => {
            state
                .replies
                .reply_text(reply_token, &text, message.quote_token.as_deref())
                .await?;
            info!(message_id = %message.id, "Replied with translation");
        }
        Routed::Reply(_) | Routed::NoAction { .. } => {}
    }
    Ok(())
}
