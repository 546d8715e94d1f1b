use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: bool,
    pub inference_gateway: bool,
    pub gateway_provider: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

/// 200 only when storage answers and the gateway can reach its model.
pub async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.conversation_repository.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: storage unavailable");
            false
        }
    };
    let inference_gateway = state.inference_gateway.is_ready().await;

    let ready = database && inference_gateway;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            status: if ready { "ready" } else { "degraded" }.to_string(),
            database,
            inference_gateway,
            gateway_provider: state.inference_gateway.name().to_string(),
        }),
    )
}
