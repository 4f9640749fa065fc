//! Compile-time package metadata.

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `linebridge/0.1.0`, sent as the outbound `User-Agent`.
pub fn user_agent() -> String {
    format!("{NAME}/{VERSION}")
}
