//! linebridge - a LINE bot that relays Chinese and Vietnamese messages through machine translation.

// ============================================================================
// Always Available
// ============================================================================

pub mod build_info;
pub mod config;
pub mod language;
pub mod line;
pub mod reply;
pub mod routing;
pub mod translate;

// ============================================================================
// Server-only (behind `server` feature)
// ============================================================================

#[cfg(feature = "server")]
pub mod handlers;
#[cfg(feature = "server")]
pub mod response;
#[cfg(feature = "server")]
pub mod server;

#[cfg(test)]
mod test_support;
