use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::upstream::UpstreamClient;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state.
///
/// The upstream configuration is folded into the client once at startup and
/// never mutated afterwards; handlers stay stateless.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

// ============================================================================
// Server Setup
// ============================================================================

pub fn build_app(state: AppState, request_timeout_seconds: u64) -> Router {
    // Proxy routes - with request timeout, small bodies only
    let api_routes = Router::new()
        .route("/agents", get(handlers::get_agents))
        .route("/agents/count", get(handlers::get_agent_count))
        .route(
            "/users",
            get(handlers::get_user).post(handlers::create_user),
        )
        .route("/chat", post(handlers::send_chat))
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(256 * 1024)) // 256 KB
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )));

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .with_state(state)
        .nest("/api", api_routes)
}
