//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health` — reports version and identity store reachability.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_connected = state.sessions.credentials().ping().await;
    if !store_connected {
        warn!("identity store unreachable");
    }
    Json(HealthResponse {
        status: if store_connected { "ok" } else { "degraded" }.to_string(),
        version: warden_core::version().to_string(),
        store_connected,
    })
}
