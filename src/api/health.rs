use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::warn;

use super::{AppState, HealthLiveResponse, HealthReadinessChecks, HealthReadyResponse};

/// `GET /health`
pub async fn live(State(state): State<Arc<AppState>>) -> Json<HealthLiveResponse> {
    Json(HealthLiveResponse {
        status: "OK",
        message: "Server is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// `GET /health/ready`
///
/// Pings the database when one is attached. The in-memory store is always
/// ready.
pub async fn ready(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReadyResponse>) {
    let storage = match &state.store {
        Some(store) => match store.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Readiness check failed: {}", e);
                false
            }
        },
        None => true,
    };

    let status = if storage {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthReadyResponse {
            ready: storage,
            checks: HealthReadinessChecks { storage },
        }),
    )
}
