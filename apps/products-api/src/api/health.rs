//! Health check endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    mongodb: bool,
}

/// Create a health check router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB connection
///
/// Responds 503 while MongoDB is unreachable so orchestrators stop
/// routing traffic to this instance.
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let health = database::mongodb::check_health_detailed(&state.mongo_client).await;

    if !health.healthy {
        tracing::warn!(
            detail = ?health.message,
            response_time_ms = health.response_time_ms,
            "MongoDB readiness check failed"
        );
    }

    let status = if health.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyResponse {
            status: if health.healthy { "ready" } else { "unhealthy" }.to_string(),
            mongodb: health.healthy,
        }),
    )
}
