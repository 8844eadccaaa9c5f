//! Backup trigger - launches the backup executable in the background.
//!
//! The launched process is never awaited by the request that started it and
//! nothing limits how many runs are in flight at once.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::fs::File;
use tokio::process::Command;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum TriggerError {
    #[error("Backup script not found: {}", .0.display())]
    ExecutableMissing(PathBuf),

    #[error("Failed to start backup: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Capability to start a backup run whose output goes to `output`.
#[async_trait]
pub trait BackupTrigger: Send + Sync {
    /// Start the run and return as soon as it is launched.
    async fn trigger(&self, output: &Path) -> Result<(), TriggerError>;
}

/// Runs an executable on disk, e.g. `/usr/local/bin/backup`.
#[derive(Debug, Clone)]
pub struct ScriptTrigger {
    executable: PathBuf,
}

impl ScriptTrigger {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl BackupTrigger for ScriptTrigger {
    async fn trigger(&self, output: &Path) -> Result<(), TriggerError> {
        // Check before touching the log so a missing script leaves it intact
        match tokio::fs::metadata(&self.executable).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TriggerError::ExecutableMissing(self.executable.clone()));
            }
            Err(e) => return Err(TriggerError::Spawn(e)),
        }

        // stdout and stderr share one truncated file, like `> log 2>&1`
        let stdout = File::create(output).await?.into_std().await;
        let stderr = stdout.try_clone()?;

        let mut child = Command::new(&self.executable)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()?;

        let pid = child.id();
        info!(
            "Started {} (pid: {:?}), output -> {}",
            self.executable.display(),
            pid,
            output.display()
        );

        // Reap in the background; the response does not wait for this
        let executable = self.executable.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    info!("Backup run {} finished successfully", executable.display());
                }
                Ok(status) => {
                    warn!("Backup run {} exited with: {}", executable.display(), status);
                }
                Err(e) => {
                    error!("Failed to wait for backup run {}: {}", executable.display(), e);
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_executable_leaves_log_untouched() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("backup.log");
        std::fs::write(&log, "previous run\n").unwrap();

        let trigger = ScriptTrigger::new(dir.path().join("no-such-backup"));
        let result = trigger.trigger(&log).await;

        assert!(matches!(result, Err(TriggerError::ExecutableMissing(_))));
        assert_eq!(std::fs::read_to_string(&log).unwrap(), "previous run\n");
    }

    #[tokio::test]
    async fn test_missing_log_directory_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("backup");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        let log = dir.path().join("missing").join("backup.log");

        let result = ScriptTrigger::new(&script).trigger(&log).await;

        assert!(matches!(result, Err(TriggerError::Spawn(_))));
        assert!(!log.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_script_output_redirected_to_log() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script = dir.path().join("backup");
        std::fs::write(&script, "#!/bin/sh\necho starting\necho failing >&2\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let log = dir.path().join("backup.log");
        std::fs::write(&log, "stale content from an earlier run\n").unwrap();

        ScriptTrigger::new(&script).trigger(&log).await.unwrap();

        let mut content = String::new();
        for _ in 0..50 {
            content = std::fs::read_to_string(&log).unwrap();
            if content.contains("starting") && content.contains("failing") {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }

        assert!(content.contains("starting"));
        assert!(content.contains("failing"));
        assert!(!content.contains("stale"));
    }
}
