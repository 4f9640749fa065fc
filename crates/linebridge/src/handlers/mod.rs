//! HTTP request handlers.

mod callback;
mod health;
mod version;

pub use callback::{DispatchError, callback};
pub use health::{livez, readyz};
pub use version::version;
