//! HTTP client for the upstream storefront API.
//!
//! This is the only place the API key is ever attached to a request; the
//! rest of the crate (and every browser-facing response) sees the proxy
//! surface only. Bodies stay untyped [`Value`]s because the proxy forwards
//! them verbatim.

mod error;

pub use error::{Result, UpstreamError};

use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};

use crate::config::UpstreamConfig;

/// Client for the upstream agents/users/chat API.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    credentials: Option<Credentials>,
}

#[derive(Clone)]
struct Credentials {
    base_url: String,
    api_key: String,
}

impl UpstreamClient {
    /// Create a new client from the loaded configuration.
    ///
    /// At most one trailing slash is stripped from the base URL. A half
    /// configured upstream (one credential missing) counts as unconfigured;
    /// requests will fail fast without touching the network.
    #[must_use]
    pub fn new(config: &UpstreamConfig) -> Self {
        let credentials = config.credentials().map(|(base_url, api_key)| Credentials {
            base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
            api_key: api_key.to_string(),
        });
        Self {
            http: Client::new(),
            credentials,
        }
    }

    /// Whether both credential halves were present at startup.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    // ----------------------------------------------------------------------------
    // Agents
    // ----------------------------------------------------------------------------

    /// Fetch one page of the agent catalog.
    ///
    /// `page` and `limit` pass through as the strings the caller sent; the
    /// upstream owns their validation.
    pub async fn fetch_agents_page(&self, page: &str, limit: &str) -> Result<Value> {
        self.get(&format!("/agents?page={page}&limit={limit}"), "fetch agents")
            .await
    }

    /// Fetch a single agent by its id.
    pub async fn fetch_agent(&self, agent_id: &str) -> Result<Value> {
        self.get(
            &format!("/agents/by-agent-id?agentId={agent_id}"),
            "fetch agent",
        )
        .await
    }

    /// Fetch the total number of agents. The response shape is loose;
    /// callers reconcile it through [`crate::store::extract_count`].
    pub async fn fetch_agent_count(&self) -> Result<Value> {
        self.get("/agents/count", "fetch agents count").await
    }

    // ----------------------------------------------------------------------------
    // Users
    // ----------------------------------------------------------------------------

    /// Look up the account for a (normalized) wallet address.
    pub async fn fetch_user(&self, wallet_address: &str) -> Result<Value> {
        self.get(
            &format!("/users?walletAddress={wallet_address}"),
            "fetch user",
        )
        .await
    }

    /// Create an account for a (normalized) wallet address.
    ///
    /// The upstream answers 400 when the account already exists; that body
    /// flows back to the caller untouched.
    pub async fn create_user(&self, wallet_address: &str) -> Result<Value> {
        self.post(
            "/users/create",
            &json!({ "walletAddress": wallet_address }),
            "create user",
        )
        .await
    }

    // ----------------------------------------------------------------------------
    // Chat
    // ----------------------------------------------------------------------------

    /// Forward one chat turn and return the upstream's complete reply.
    pub async fn send_chat(&self, request: &impl Serialize) -> Result<Value> {
        self.post("/chat", request, "process chat request").await
    }

    // ----------------------------------------------------------------------------
    // Helpers
    // ----------------------------------------------------------------------------

    fn credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or(UpstreamError::Configuration)
    }

    async fn get(&self, path_and_query: &str, resource: &str) -> Result<Value> {
        let credentials = self.credentials()?;
        let response = self
            .http
            .get(format!("{}{path_and_query}", credentials.base_url))
            .header("x-api-key", &credentials.api_key)
            .header("accept", "*/*")
            .send()
            .await
            .map_err(UpstreamError::from_transport)?;
        decode(response, resource).await
    }

    async fn post(&self, path: &str, body: &impl Serialize, resource: &str) -> Result<Value> {
        let credentials = self.credentials()?;
        let response = self
            .http
            .post(format!("{}{path}", credentials.base_url))
            .header("x-api-key", &credentials.api_key)
            .header("accept", "*/*")
            .json(body)
            .send()
            .await
            .map_err(UpstreamError::from_transport)?;
        decode(response, resource).await
    }
}

/// Turn an upstream response into a JSON value or an [`UpstreamError::Api`].
///
/// Error bodies are read best-effort: the upstream's own `error` field wins,
/// otherwise the message is `Failed to <resource>: <status>`.
async fn decode(response: reqwest::Response, resource: &str) -> Result<Value> {
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(UpstreamError::Decode);
    }

    let body: Value = response
        .json()
        .await
        .unwrap_or_else(|_| Value::Object(Default::default()));
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Failed to {resource}: {}", status.as_u16()));

    Err(UpstreamError::Api {
        status: status.as_u16(),
        message,
    })
}
