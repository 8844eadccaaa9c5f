//! System uptime for the health endpoint.

use std::path::Path;

/// Placeholder reported when uptime cannot be read.
pub const UNKNOWN_UPTIME: &str = "unknown";

/// Parse the first field of a `/proc/uptime` style document.
pub fn parse_uptime(content: &str) -> Option<f64> {
    content
        .split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
}

/// Format seconds as `"<H>h <M>m"`.
pub fn format_uptime(secs: f64) -> String {
    let total = secs as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Human readable uptime from `source`, or `"unknown"`.
pub async fn describe_uptime(source: &Path) -> String {
    match tokio::fs::read_to_string(source).await {
        Ok(content) => parse_uptime(&content)
            .map(format_uptime)
            .unwrap_or_else(|| UNKNOWN_UPTIME.to_string()),
        Err(e) => {
            tracing::debug!("Uptime source {} unavailable: {}", source.display(), e);
            UNKNOWN_UPTIME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0.0), "0h 0m");
        assert_eq!(format_uptime(59.9), "0h 0m");
        assert_eq!(format_uptime(3725.4), "1h 2m");
        assert_eq!(format_uptime(90_061.0), "25h 1m");
    }

    #[test]
    fn test_parse_uptime() {
        assert_eq!(parse_uptime("3725.40 14321.88\n"), Some(3725.4));
        assert_eq!(parse_uptime(""), None);
        assert_eq!(parse_uptime("garbage 1.0"), None);
        assert_eq!(parse_uptime("-5.0 1.0"), None);
    }

    #[tokio::test]
    async fn test_describe_uptime_missing_source() {
        let dir = TempDir::new().unwrap();
        assert_eq!(describe_uptime(&dir.path().join("uptime")).await, "unknown");
    }

    #[tokio::test]
    async fn test_describe_uptime_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uptime");
        std::fs::write(&path, "7260.00 100.00\n").unwrap();
        assert_eq!(describe_uptime(&path).await, "2h 1m");
    }
}
