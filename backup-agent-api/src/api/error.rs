//! Error responses for the HTTP API.
//!
//! Every failure is reported as a JSON document with an `error` field; the
//! serving loop itself never sees these.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Dashboard not found")]
    DashboardNotFound(PathBuf),

    #[error("Failed to read dashboard")]
    DashboardUnreadable(String),

    #[error("Invalid status file")]
    InvalidStatus(String),

    #[error("Failed to read log file")]
    LogUnreadable(String),

    #[error("Backup script not found")]
    BackupScriptNotFound(PathBuf),

    #[error("Failed to start backup")]
    BackupSpawn(String),

    #[error("Not found")]
    NotFound {
        path: String,
        endpoints: &'static [&'static str],
    },

    #[error("Unsupported method")]
    UnsupportedMethod(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DashboardNotFound(_) | ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::UnsupportedMethod(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::DashboardUnreadable(_)
            | ApiError::InvalidStatus(_)
            | ApiError::LogUnreadable(_)
            | ApiError::BackupScriptNotFound(_)
            | ApiError::BackupSpawn(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();
        let body = match self {
            ApiError::DashboardNotFound(path) | ApiError::BackupScriptNotFound(path) => {
                json!({ "error": error, "path": path.display().to_string() })
            }
            ApiError::DashboardUnreadable(details)
            | ApiError::InvalidStatus(details)
            | ApiError::LogUnreadable(details)
            | ApiError::BackupSpawn(details) => {
                tracing::warn!("{}: {}", error, details);
                json!({ "error": error, "details": details })
            }
            ApiError::NotFound { path, endpoints } => {
                json!({ "error": error, "path": path, "available_endpoints": endpoints })
            }
            ApiError::UnsupportedMethod(method) => {
                json!({ "error": error, "method": method })
            }
        };
        (status, Json(body)).into_response()
    }
}
