//! LINE Messaging API wire types used by linebridge.
//!
//! Two directions are covered:
//!
//! - [`WebhookPayload`]: what the platform POSTs to the webhook endpoint
//! - [`ReplyMessageRequest`]: what linebridge POSTs back to the reply API
//!
//! Only the fields linebridge reads or writes are modelled. Event and message
//! types linebridge does not handle deserialize into an `Other` variant so a
//! single unfamiliar event never fails a whole payload.

mod messaging;
mod webhook;

pub use messaging::{
    ApiErrorDetail, ApiErrorResponse, OutboundMessage, ReplyMessageRequest, TextReply,
};
pub use webhook::{
    DeliveryContext, MessageContent, MessageEvent, Source, SourceKind, TextMessage,
    WebhookEvent, WebhookPayload,
};

/// Header carrying the base64 HMAC-SHA256 of the request body.
pub const SIGNATURE_HEADER: &str = "x-line-signature";
