use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::line::LineMessagingClient;
use crate::translate::GoogleTranslate;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_saphyr::from_str(&contents)?)
    }
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

// ============================================================================
// LineConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LineConfig {
    #[serde(default = "default_line_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_client_timeout")]
    pub timeout_seconds: u64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_line_base_url(),
            timeout_seconds: default_client_timeout(),
        }
    }
}

fn default_line_base_url() -> String {
    LineMessagingClient::DEFAULT_BASE_URL.to_string()
}

// ============================================================================
// TranslationConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translation_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_client_timeout")]
    pub timeout_seconds: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_translation_base_url(),
            timeout_seconds: default_client_timeout(),
        }
    }
}

fn default_translation_base_url() -> String {
    GoogleTranslate::DEFAULT_BASE_URL.to_string()
}

fn default_client_timeout() -> u64 {
    10
}

// ============================================================================
// Credentials
// ============================================================================

/// Secrets read from the environment once at startup.
#[derive(Clone)]
pub struct Credentials {
    pub channel_access_token: String,
    pub channel_secret: String,
    pub google_api_key: String,
}

impl Credentials {
    pub const CHANNEL_ACCESS_TOKEN: &'static str = "CHANNEL_ACCESS_TOKEN";
    pub const CHANNEL_SECRET: &'static str = "CHANNEL_SECRET";
    pub const GOOGLE_API_KEY: &'static str = "GOOGLE_API_KEY";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnv(key))
        };

        Ok(Self {
            channel_access_token: require(Self::CHANNEL_ACCESS_TOKEN)?,
            channel_secret: require(Self::CHANNEL_SECRET)?,
            google_api_key: require(Self::GOOGLE_API_KEY)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("channel_access_token", &"<redacted>")
            .field("channel_secret", &"<redacted>")
            .field("google_api_key", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}

// ============================================================================
// Tests
// ============================================================================
