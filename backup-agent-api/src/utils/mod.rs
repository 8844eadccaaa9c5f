//! Utility modules for the backup agent API.

pub mod errors;
pub mod logger;

pub use errors::{AgentError, Result};
