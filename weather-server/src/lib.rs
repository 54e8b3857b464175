//! HTTP front door for the weather proxy.
//!
//! Exposes the weather lookup, the mock chat endpoint and the static page
//! behind a single axum [`Router`] with an open CORS policy.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use weather_core::Config;

use crate::handlers::{chat, page, weather};

pub const ROUTE_INDEX: &str = "/";
pub const ROUTE_WEATHER: &str = "/api/weather";
pub const ROUTE_CHAT: &str = "/api/ai/chat";

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded once at startup.
    pub config: Arc<Config>,
    /// Pooled client for upstream calls.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

/// Builds the router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    // Credentials cannot be combined with a literal `*`, so every allow list
    // mirrors the request instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route(ROUTE_INDEX, get(page::serve_index))
        .route(ROUTE_WEATHER, get(weather::get_weather))
        .route(ROUTE_CHAT, post(chat::chat_with_ai))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
