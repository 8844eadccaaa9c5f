//! Backup Agent API Library
//!
//! Monitoring and control HTTP surface for the backup agent: status, logs,
//! liveness and remote backup triggering.

pub mod api;
pub mod config;
pub mod daemon;
pub mod providers;
pub mod trigger;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use utils::errors::AgentError;
pub type Result<T> = std::result::Result<T, AgentError>;
