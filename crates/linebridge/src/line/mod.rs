//! LINE Messaging API: webhook signature checks and the reply client.

mod client;
mod error;
mod signature;

pub use client::{LineMessagingClient, ReplySender};
pub use error::LineError;
pub use signature::{sign, verify_signature};
