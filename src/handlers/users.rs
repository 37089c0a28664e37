//! User account proxy handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use crate::handlers::error::ApiError;
use crate::server::AppState;
use crate::wallet;

/// Message for user operations missing their wallet address.
pub const WALLET_REQUIRED_MESSAGE: &str = "Wallet address is required";

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "walletAddress")]
    pub wallet_address: Option<String>,
}

/// GET /api/users?walletAddress=
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Value>, ApiError> {
    let Some(wallet_address) = query.wallet_address.filter(|w| !w.is_empty()) else {
        return Err(ApiError::validation(WALLET_REQUIRED_MESSAGE));
    };

    Ok(Json(state.upstream.fetch_user(&wallet_address).await?))
}

/// POST /api/users
///
/// The wallet may arrive as a string or as the raw byte-index object some
/// wallet adapters serialize; it is normalized before the upstream call. A
/// duplicate-account 400 from the upstream flows back verbatim.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?;

    let Some(raw_wallet) = body.get("walletAddress").filter(|v| !v.is_null()) else {
        return Err(ApiError::validation(WALLET_REQUIRED_MESSAGE));
    };
    let wallet_address = wallet::normalize(raw_wallet);
    if wallet_address.is_empty() {
        return Err(ApiError::validation(WALLET_REQUIRED_MESSAGE));
    }

    Ok(Json(state.upstream.create_user(&wallet_address).await?))
}
