//! Status document written by the backup script.

use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading the status document.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLookup {
    /// Parsed document, returned to clients unchanged
    Found(Value),
    /// No status file yet (first run)
    Absent,
    /// File exists but could not be read or parsed
    Invalid(String),
}

/// Read and parse the status document at `path`.
pub async fn read_status(path: &Path) -> StatusLookup {
    match tokio::fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => StatusLookup::Found(value),
            Err(e) => StatusLookup::Invalid(e.to_string()),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => StatusLookup::Absent,
        Err(e) => StatusLookup::Invalid(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let lookup = read_status(&dir.path().join("status.json")).await;
        assert_eq!(lookup, StatusLookup::Absent);
    }

    #[tokio::test]
    async fn test_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, r#"{"status":"success","last_backup":"2026-10-15T02:00:00"}"#).unwrap();

        let lookup = read_status(&path).await;
        assert_eq!(
            lookup,
            StatusLookup::Found(json!({"status": "success", "last_backup": "2026-10-15T02:00:00"}))
        );
    }

    #[tokio::test]
    async fn test_malformed_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, "{\"status\": ").unwrap();

        match read_status(&path).await {
            StatusLookup::Invalid(details) => assert!(!details.is_empty()),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
