//! Route handler functions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stylux_chat::resolver::{RecommendRequest, RecommendResponse};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    /// Name of the resolver answering recommendations.
    pub resolver: String,
    /// Number of rules in the built-in reply table.
    pub rules: usize,
}

/// GET /health - liveness and basic server info.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        resolver: state.resolver.name().to_string(),
        rules: state.rules.len(),
    })
}

/// POST /api/recommend - answer one chat message.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let Json(request) = payload?;

    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message cannot be empty".to_string()));
    }

    let reply = state.resolver.resolve(&request.message).await;
    tracing::debug!(
        message_len = request.message.len(),
        reply_len = reply.len(),
        "Recommendation served"
    );
    Ok(Json(RecommendResponse { reply }))
}
