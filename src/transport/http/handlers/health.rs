use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::time::Instant;

/// Pings the joke store and reports how long the round trip took.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = ApiResponse),
        (status = 503, description = "Store unreachable", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let probe = state.controller.store().ping().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let (status, body) = match probe {
        Ok(()) => (
            StatusCode::OK,
            ApiResponse::data(json!({ "status": "ok", "store_latency_ms": latency_ms })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, latency_ms, "store ping failed");
            let mut body = ApiResponse::failure(format!("Store ping failed: {}", e));
            body.data = Some(json!({ "status": "unhealthy", "store_latency_ms": latency_ms }));
            (StatusCode::SERVICE_UNAVAILABLE, body)
        }
    };
    (status, Json(body)).into_response()
}
