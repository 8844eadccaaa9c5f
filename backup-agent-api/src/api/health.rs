//! Health check endpoint.

use super::AppState;
use crate::providers::uptime::describe_uptime;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime: String,
    pub timestamp: String,
    pub version: &'static str,
}

/// GET /health - Liveness probe; never fails
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime: describe_uptime(&state.config.paths.uptime_source).await,
        timestamp: super::timestamp(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
