use axum::response::Json;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
}

/// Liveness only; the products service is not probed
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { healthy: true })
}
