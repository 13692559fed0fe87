use super::Store;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// One activity-log line. Every mutating operation appends one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the activity log.
pub fn dlog(store: &Store, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let line = serde_json::to_string(&entry)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store.log_file())?;
    writeln!(file, "{line}")?;

    Ok(())
}

/// Read every entry of the activity log, oldest first. Lines that fail to
/// parse are reported rather than skipped.
pub fn read_all(store: &Store) -> AppResult<Vec<LogEntry>> {
    let path = store.log_file();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&path)?;
    let mut entries = Vec::new();

    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: LogEntry = serde_json::from_str(line).map_err(|e| {
            AppError::Malformed(super::LOG_FILE.to_string(), format!("line {}: {e}", n + 1))
        })?;
        entries.push(entry);
    }

    Ok(entries)
}
