//! Health check handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Server timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1703494800000_i64)]
    pub timestamp_ms: Option<i64>,
}

/// Health check endpoint
///
/// Pings the store. Does NOT expose any internal detail in the response.
///
/// - Healthy: 200 OK + {status: "ok", timestampMs}
/// - Unhealthy: 503 Service Unavailable + {status: "unavailable"}
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Service unavailable", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.pages.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                timestamp_ms: Some(Utc::now().timestamp_millis()),
            }),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] Store ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    timestamp_ms: None,
                }),
            )
        }
    }
}
