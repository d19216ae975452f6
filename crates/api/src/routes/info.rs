//! Service info endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub app: &'static str,
    pub status: &'static str,
}

/// GET / — describes the running service.
pub async fn get() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Hello from Kubernetes!",
        app: "Calculator API",
        status: "running",
    })
}
