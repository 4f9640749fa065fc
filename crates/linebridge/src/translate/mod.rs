//! Language detection and machine translation clients.

mod error;
mod google;
mod provider;
mod types;

pub use error::TranslateError;
pub use google::GoogleTranslate;
pub use provider::{LanguageDetector, Translator};
