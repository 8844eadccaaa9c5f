//! Fallback for unmatched routes; lists what the API does offer.

use super::error::ApiError;
use axum::http::{Method, Uri};

pub const GET_ENDPOINTS: &[&str] = &[
    "/ - Dashboard web UI",
    "/status - Current backup status (JSON)",
    "/health - Health check (JSON)",
    "/logs - Recent backup logs (text)",
    "/backup - Trigger backup (POST)",
];

pub const POST_ENDPOINTS: &[&str] = &["/backup - Trigger backup (POST)"];

/// Fallback for any path or method without a handler
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    let path = uri.path().to_string();
    match method {
        Method::GET | Method::HEAD => ApiError::NotFound {
            path,
            endpoints: GET_ENDPOINTS,
        },
        Method::POST => ApiError::NotFound {
            path,
            endpoints: POST_ENDPOINTS,
        },
        other => ApiError::UnsupportedMethod(other.to_string()),
    }
}
