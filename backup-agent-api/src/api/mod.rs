//! HTTP API module for the backup agent.

pub mod backup;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod logs;
pub mod not_found;
pub mod status;

use crate::config::Config;
use crate::trigger::{BackupTrigger, ScriptTrigger};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDateTime, Timelike};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared application state. Immutable; handlers re-read external state per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub trigger: Arc<dyn BackupTrigger>,
}

/// Create shared application state backed by the configured backup script
pub fn create_app_state(config: Config) -> AppState {
    let trigger = ScriptTrigger::new(config.paths.backup_script.clone());
    AppState {
        config: Arc::new(config),
        trigger: Arc::new(trigger),
    }
}

/// Create the API router with all endpoints
pub fn create_router(config: Config) -> Router {
    create_router_with_state(create_app_state(config))
}

/// Create the API router with a pre-built state (allows injecting a trigger)
pub fn create_router_with_state(state: AppState) -> Router {
    let fallback = not_found::not_found;

    Router::new()
        // Dashboard
        .route("/", get(dashboard::dashboard).fallback(fallback))
        .route("/dashboard.html", get(dashboard::dashboard).fallback(fallback))
        // Read-only state
        .route("/status", get(status::status).fallback(fallback))
        .route("/health", get(health::health).fallback(fallback))
        .route("/logs", get(logs::logs).fallback(fallback))
        // Backup trigger
        .route("/backup", post(backup::trigger_backup).fallback(fallback))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CONNECTION,
            HeaderValue::from_static("close"),
        ))
}

/// Current local time, ISO-8601 without offset.
pub(crate) fn timestamp() -> String {
    isoformat(chrono::Local::now().naive_local())
}

/// `YYYY-MM-DDTHH:MM:SS[.ffffff]`; the fraction is omitted when it is zero.
pub(crate) fn isoformat(at: NaiveDateTime) -> String {
    // Leap seconds report nanoseconds >= 1e9
    let micros = (at.nanosecond() / 1_000) % 1_000_000;
    let seconds = at.format("%Y-%m-%dT%H:%M:%S");
    if micros == 0 {
        seconds.to_string()
    } else {
        format!("{}.{:06}", seconds, micros)
    }
}
