//! Read-only access to state owned by the backup process.
//!
//! Nothing in here writes: the status file and log are produced by the
//! backup script, uptime by the kernel.

pub mod logs;
pub mod status;
pub mod uptime;
