//! Common test utilities.

// Each test binary pulls in its own subset of these helpers.
#![allow(dead_code)]

use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

use agentry::config::UpstreamConfig;
use agentry::server::{self, AppState};
use agentry::upstream::UpstreamClient;

/// The API key mock upstreams expect from the proxy.
pub const TEST_API_KEY: &str = "test-key";

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Create a test `AppState` whose upstream client points at `base_url`.
pub fn test_state(base_url: &str) -> AppState {
    let config = UpstreamConfig {
        base_url: Some(base_url.to_string()),
        api_key: Some(TEST_API_KEY.to_string()),
    };
    AppState {
        upstream: UpstreamClient::new(&config),
    }
}

/// Build a proxy app wired to the given upstream base URL.
pub fn proxy_app(upstream_url: &str) -> Router {
    server::build_app(test_state(upstream_url), 30)
}

/// Build a proxy app with no upstream configuration at all.
pub fn unconfigured_app() -> Router {
    let state = AppState {
        upstream: UpstreamClient::new(&UpstreamConfig::default()),
    };
    server::build_app(state, 30)
}

/// Spawn a mock upstream, then build a proxy app pointed at it.
pub async fn proxy_with_upstream(upstream: Router) -> Router {
    let url = spawn_server(upstream).await;
    proxy_app(&url)
}

/// Spawn a mock upstream and a proxy in front of it; returns the proxy URL.
pub async fn spawn_proxy(upstream: Router) -> String {
    let upstream_url = spawn_server(upstream).await;
    spawn_server(proxy_app(&upstream_url)).await
}

/// A base URL that refuses connections: bind an ephemeral port, then drop
/// the listener before anyone dials it.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Read a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
