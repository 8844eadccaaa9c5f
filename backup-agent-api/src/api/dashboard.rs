//! Dashboard web UI.

use super::{error::ApiError, AppState};
use axum::{extract::State, response::Html};
use std::io::ErrorKind;

/// GET / and /dashboard.html - Serve the dashboard asset
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = &state.config.paths.dashboard;
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Html(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ApiError::DashboardNotFound(path.clone())),
        Err(e) => Err(ApiError::DashboardUnreadable(e.to_string())),
    }
}
