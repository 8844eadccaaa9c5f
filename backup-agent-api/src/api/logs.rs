//! Recent backup log output.

use super::{error::ApiError, AppState};
use crate::providers::logs::{read_tail, LOG_TAIL_LINES};
use axum::extract::State;

const NO_LOGS: &str = "No logs available yet";

/// GET /logs - Last 100 lines of the backup log as plain text
pub async fn logs(State(state): State<AppState>) -> Result<String, ApiError> {
    match read_tail(&state.config.paths.log_file, LOG_TAIL_LINES).await {
        Ok(Some(tail)) => Ok(tail),
        Ok(None) => Ok(NO_LOGS.to_string()),
        Err(e) => Err(ApiError::LogUnreadable(e.to_string())),
    }
}
