//! Backup trigger endpoint.

use super::{error::ApiError, AppState};
use crate::trigger::TriggerError;
use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct TriggerBackupResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Parse the optional request body. Malformed input is treated as empty.
pub fn parse_trigger_params(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!("Ignoring malformed backup request body: {}", e);
        Value::Object(Map::new())
    })
}

/// POST /backup - Start a backup run in the background
pub async fn trigger_backup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TriggerBackupResponse>, ApiError> {
    // Accepted but not interpreted
    let params = parse_trigger_params(&body);
    tracing::debug!("Backup trigger parameters: {}", params);

    tracing::info!("Triggering backup via API...");
    match state.trigger.trigger(&state.config.paths.log_file).await {
        Ok(()) => Ok(Json(TriggerBackupResponse {
            status: "triggered",
            message: "Backup started in background",
            timestamp: super::timestamp(),
        })),
        Err(TriggerError::ExecutableMissing(path)) => {
            tracing::error!("Backup script not found: {}", path.display());
            Err(ApiError::BackupScriptNotFound(path))
        }
        Err(TriggerError::Spawn(e)) => Err(ApiError::BackupSpawn(e.to_string())),
    }
}
