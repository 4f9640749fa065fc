use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use reqwest::Client;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::build_info;
use crate::config::{Config, Credentials};
use crate::handlers;
use crate::line::{LineMessagingClient, ReplySender};
use crate::routing::TranslationRouter;
use crate::translate::GoogleTranslate;

/// Shared application state.
///
/// Everything here is immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub router: TranslationRouter,
    pub replies: Arc<dyn ReplySender>,
    pub channel_secret: Arc<str>,
}

impl AppState {
    /// Wire the Google and LINE clients from configuration.
    pub fn from_config(
        config: &Config,
        credentials: &Credentials,
    ) -> Result<Self, reqwest::Error> {
        let google = Arc::new(GoogleTranslate::new(
            http_client(config.translation.timeout_seconds)?,
            credentials.google_api_key.clone(),
            config.translation.api_base_url.clone(),
        ));
        let line = LineMessagingClient::new(
            http_client(config.line.timeout_seconds)?,
            credentials.channel_access_token.clone(),
            config.line.api_base_url.clone(),
        );

        Ok(Self {
            router: TranslationRouter::new(google.clone(), google),
            replies: Arc::new(line),
            channel_secret: Arc::from(credentials.channel_secret.as_str()),
        })
    }
}

fn http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(build_info::user_agent())
        .build()
}

/// Assemble the HTTP surface.
///
/// `/callback` is bounded by the outbound client timeouts, not by
/// `request_timeout_secs`: an upstream stall has to surface as a logged 500.
pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    let webhook = Router::new()
        .route("/callback", post(handlers::callback))
        .with_state(state);

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
        .merge(webhook)
        .layer(TraceLayer::new_for_http())
}
