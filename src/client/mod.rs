//! HTTP client library for the agentry proxy.
//!
//! Provides `DashboardClient` for the terminal views (store, leaderboard,
//! chat, account) to interact with a running proxy over HTTP. The upstream
//! API key stays on the server; this client only ever sees the proxy
//! surface and its uniform error envelope.

mod error;

pub use crate::api::{Agent, AgentStatus, AgentsPage, ChatMessage, ChatReply, ChatRequest, UserAccount};
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Response from the /readyz health check endpoint.
#[derive(Debug, Deserialize)]
pub struct ReadyzResponse {
    pub status: String,
    #[serde(default)]
    pub upstream_configured: bool,
}

/// HTTP client for the agentry proxy.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
    http: Client,
}

impl DashboardClient {
    /// Create a new client pointing to the given base URL.
    ///
    /// Example: `DashboardClient::new("http://localhost:8080")`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Check if the proxy is healthy.
    ///
    /// Calls GET /readyz and reports whether the upstream is configured.
    pub async fn health(&self) -> Result<ReadyzResponse> {
        let url = format!("{}/readyz", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::ServerUnhealthy {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    // ----------------------------------------------------------------------------
    // Agents
    // ----------------------------------------------------------------------------

    /// Fetch one page of the agent catalog.
    pub async fn agents_page(&self, page: u32, limit: u32) -> Result<AgentsPage> {
        let url = format!(
            "{}/api/agents?page={}&limit={}",
            self.base_url, page, limit
        );
        let response = self.http.get(&url).send().await?;
        self.json_response(response).await
    }

    /// Fetch a single agent by id.
    pub async fn agent(&self, agent_id: &str) -> Result<Agent> {
        let url = format!("{}/api/agents?agentId={}", self.base_url, agent_id);
        let response = self.http.get(&url).send().await?;
        self.json_response(response).await
    }

    /// Fetch the raw agent count body.
    ///
    /// The shape is not guaranteed; callers run it through
    /// [`crate::store::extract_count`].
    pub async fn agent_count(&self) -> Result<Value> {
        let url = format!("{}/api/agents/count", self.base_url);
        let response = self.http.get(&url).send().await?;
        self.json_response(response).await
    }

    // ----------------------------------------------------------------------------
    // Users
    // ----------------------------------------------------------------------------

    /// Look up the account for a wallet address.
    pub async fn user(&self, wallet_address: &str) -> Result<UserAccount> {
        let url = format!(
            "{}/api/users?walletAddress={}",
            self.base_url, wallet_address
        );
        let response = self.http.get(&url).send().await?;
        self.json_response(response).await
    }

    /// Create the account for a wallet address.
    pub async fn create_user(&self, wallet_address: &str) -> Result<UserAccount> {
        let url = format!("{}/api/users", self.base_url);
        let body = serde_json::json!({ "walletAddress": wallet_address });

        let response = self.http.post(&url).json(&body).send().await?;
        self.json_response(response).await
    }

    // ----------------------------------------------------------------------------
    // Chat
    // ----------------------------------------------------------------------------

    /// Send one chat turn and return the complete assistant response.
    ///
    /// `chat_history` must already include the user's latest message.
    pub async fn send_chat(
        &self,
        agent_id: &str,
        user_wallet: &str,
        chat_history: &[ChatMessage],
    ) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            agent_id: agent_id.to_string(),
            user_wallet: user_wallet.to_string(),
            chat_history: chat_history.to_vec(),
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let reply: ChatReply = self.json_response(response).await?;
        Ok(reply.response)
    }

    // ----------------------------------------------------------------------------
    // Helpers
    // ----------------------------------------------------------------------------

    /// Parse an error response into a ClientError.
    async fn parse_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();

        if let Ok(envelope) = response.json::<ErrorEnvelope>().await {
            let message = match envelope.details {
                Some(details) => format!("{} ({details})", envelope.error),
                None => envelope.error,
            };
            ClientError::ApiError { status, message }
        } else {
            ClientError::ApiError {
                status,
                message: format!("HTTP {}", status),
            }
        }
    }

    /// Parse a successful JSON response or convert error response.
    async fn json_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.parse_error(response).await)
        }
    }
}

/// The proxy's uniform error envelope.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    details: Option<String>,
}
