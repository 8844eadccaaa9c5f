//! Logging configuration using tracing.

use crate::config::LogConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` first, then the configured level, then `info`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber (compact output, no module targets).
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(tracing_subscriber::fmt::layer().compact().with_target(false))
        .try_init()?;

    Ok(())
}
