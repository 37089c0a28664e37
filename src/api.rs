//! Wire types shared by the proxy surface and the dashboard client.
//!
//! The upstream API speaks camelCase JSON and is loose about which fields it
//! populates, so everything optional carries a default. The proxy itself
//! forwards bodies untyped; these types are the dashboard's typed view.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hosts the upstream uses for "no real image yet" placeholder URLs.
pub const PLACEHOLDER_IMAGE_HOSTS: [&str; 2] = ["your-cdn.com", "example.com"];

// ============================================================================
// Agents
// ============================================================================

/// Where an agent is in its lifecycle. Upstream-owned; a listing starts out
/// `building` and flips to `live` once deployed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Building,
    Live,
}

impl AgentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Live => "live",
        }
    }
}

/// One agent listing from the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(rename = "agentId")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Deployment domain, if the agent has gone live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub owner_wallet: String,
    #[serde(default)]
    pub status: AgentStatus,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default)]
    pub conversation_starters: Vec<String>,
}

impl Agent {
    /// True when the image URL is missing or points at a known placeholder
    /// host, so the dashboard should render a stand-in glyph instead.
    #[must_use]
    pub fn has_placeholder_image(&self) -> bool {
        self.image_url.is_empty()
            || PLACEHOLDER_IMAGE_HOSTS
                .iter()
                .any(|host| self.image_url.contains(host))
    }
}

/// One page of the catalog as returned by `GET /api/agents`.
///
/// `total` is kept untyped: the upstream populates it inconsistently and the
/// store reconciles it through [`crate::store::extract_positive`].
#[derive(Debug, Clone, Deserialize)]
pub struct AgentsPage {
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub total: Option<Value>,
}

// ============================================================================
// Users
// ============================================================================

/// A wallet-keyed user account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub tokens: u64,
}

// ============================================================================
// Chat
// ============================================================================

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation.
///
/// `is_streaming` is presentation state for the playback renderer and never
/// goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip)]
    pub is_streaming: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            is_streaming: false,
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            is_streaming: false,
        }
    }

    /// The empty in-progress assistant message appended when a send starts.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            is_streaming: true,
        }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub agent_id: String,
    pub user_wallet: String,
    pub chat_history: Vec<ChatMessage>,
}

/// Response body for `POST /api/chat`. The upstream returns the complete
/// text in one shot; pacing is the renderer's job.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: String,
}
