//! Chat proxy handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};

use crate::handlers::error::ApiError;
use crate::server::AppState;
use crate::wallet;

/// Message for chat requests missing any of their three required fields.
pub const CHAT_FIELDS_REQUIRED_MESSAGE: &str =
    "Agent ID, user wallet, and chat history are required";

/// POST /api/chat
///
/// Forwards one completed turn upstream: the agent id, the normalized user
/// wallet, and the full history including the user's latest message. The
/// history itself travels uninspected; an empty one is rejected because the
/// upstream would have nothing to answer.
pub async fn send_chat(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?;

    let agent_id = body
        .get("agent_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty());
    let user_wallet = body.get("user_wallet").filter(|w| !w.is_null());
    let chat_history = body
        .get("chat_history")
        .and_then(Value::as_array)
        .filter(|history| !history.is_empty());

    let (Some(agent_id), Some(user_wallet), Some(chat_history)) =
        (agent_id, user_wallet, chat_history)
    else {
        return Err(ApiError::validation(CHAT_FIELDS_REQUIRED_MESSAGE));
    };

    let payload = json!({
        "agent_id": agent_id,
        "user_wallet": wallet::normalize(user_wallet),
        "chat_history": chat_history,
    });

    Ok(Json(state.upstream.send_chat(&payload).await?))
}
