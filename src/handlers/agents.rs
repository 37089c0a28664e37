//! Agent catalog proxy handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use crate::handlers::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AgentsQuery {
    /// Switches the operation to a single-agent lookup when present.
    #[serde(rename = "agentId")]
    pub agent_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// GET /api/agents
///
/// With `agentId` the upstream by-id lookup is proxied as-is, errors
/// included. Otherwise one catalog page is proxied; `page` and `limit`
/// default to `"1"` and `"20"` and travel as uninterpreted strings, since
/// the upstream owns their validation.
pub async fn get_agents(
    State(state): State<AppState>,
    Query(query): Query<AgentsQuery>,
) -> Result<Json<Value>, ApiError> {
    if let Some(agent_id) = query.agent_id.as_deref().filter(|id| !id.is_empty()) {
        let agent = state.upstream.fetch_agent(agent_id).await?;
        return Ok(Json(agent));
    }

    let page = query.page.as_deref().unwrap_or("1");
    let limit = query.limit.as_deref().unwrap_or("20");
    let body = state.upstream.fetch_agents_page(page, limit).await?;

    // A 200 without an agents array is a schema violation, not a success.
    if !body.get("agents").is_some_and(Value::is_array) {
        return Err(ApiError::invalid_format("response has no agents array"));
    }

    Ok(Json(body))
}

/// GET /api/agents/count
///
/// Forwarded verbatim; the body shape is the upstream's business and the
/// dashboard reconciles it client-side.
pub async fn get_agent_count(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.upstream.fetch_agent_count().await?))
}
