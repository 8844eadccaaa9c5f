//! Windowed access to the backup log.

use std::io::ErrorKind;
use std::path::Path;

/// Number of trailing lines served by `/logs`.
pub const LOG_TAIL_LINES: usize = 100;

/// Split on every line boundary a log writer may emit: `\n`, `\r\n`, a bare
/// `\r` (progress output), and the vertical tab, form feed, file/group/record
/// separators, NEL, LS and PS characters. A trailing boundary does not yield
/// an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let end = match ch {
            '\r' => {
                if matches!(chars.peek(), Some(&(_, '\n'))) {
                    chars.next();
                    idx + 2
                } else {
                    idx + 1
                }
            }
            '\n' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}' => idx + ch.len_utf8(),
            _ => continue,
        };
        lines.push(&text[start..idx]);
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Return the last `max_lines` lines of `text`, joined with `\n`.
pub fn tail_lines(text: &str, max_lines: usize) -> String {
    let lines = split_lines(text);
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}

/// Read the tail of the log at `path`.
///
/// Returns `Ok(None)` when the log does not exist yet. Invalid UTF-8 is
/// replaced rather than rejected.
pub async fn read_tail(path: &Path, max_lines: usize) -> std::io::Result<Option<String>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(tail_lines(&String::from_utf8_lossy(&bytes), max_lines))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
