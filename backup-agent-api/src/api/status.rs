//! Backup status endpoint.

use super::{error::ApiError, AppState};
use crate::providers::status::{read_status, StatusLookup};
use crate::Config;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// GET /status - Last known backup status
pub async fn status(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match read_status(&state.config.paths.status_file).await {
        StatusLookup::Found(document) => Ok(Json(document)),
        StatusLookup::Absent => Ok(Json(default_status(&state.config))),
        StatusLookup::Invalid(details) => Err(ApiError::InvalidStatus(details)),
    }
}

/// Status reported before the backup script has ever written one.
pub fn default_status(config: &Config) -> Value {
    json!({
        "status": "idle",
        "last_backup": "never",
        "last_result": "unknown",
        "next_scheduled": "unknown",
        "repository": config.repository_label(),
        "hostname": reported_hostname(config),
    })
}

fn reported_hostname(config: &Config) -> String {
    config.agent.hostname.clone().unwrap_or_else(|| {
        hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string())
    })
}
