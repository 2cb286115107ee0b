//! Logging service - structured event logging to a JSONL file
//!
//! Provides a privacy-safe event log stored as one JSON object per line in
//! `events.jsonl` inside the data directory. No personal data (emails,
//! names, titles, descriptions, images) is ever logged - only record ids
//! and event metadata.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::domain::id::generate_id;
use crate::domain::result::Result;

/// Log file name inside the data directory
const LOG_FILE: &str = "events.jsonl";

/// Get current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            user_id: None,
            item_id: None,
            error_message: None,
        }
    }

    /// Set the command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the acting user (id only, never the email)
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the item context (id only, never the title)
    pub fn with_item(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// A log entry as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: i64,
    pub entry_point: EntryPoint,
    pub app_version: String,
    pub platform: String,
    #[serde(flatten)]
    pub event: LogEvent,
}

/// Service for structured event logging
pub struct LoggingService {
    log_path: PathBuf,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    pub fn new(data_dir: &Path, entry_point: EntryPoint, app_version: &str) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            log_path: data_dir.join(LOG_FILE),
            entry_point,
            app_version: app_version.to_string(),
            platform: detect_platform(),
        })
    }

    /// Append one event to the log
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            id: generate_id(),
            timestamp: now_ms(),
            entry_point: self.entry_point,
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        let mut line = serde_json::to_vec(&entry)?;
        line.push(b'\n');
        file.write_all(&line)?;
        Ok(())
    }

    /// The most recent entries, newest first. Malformed lines are skipped.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.log_path)?;
        let mut entries: Vec<LogEntry> = content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn logger(dir: &TempDir) -> LoggingService {
        LoggingService::new(dir.path(), EntryPoint::Cli, "0.1.0-test").unwrap()
    }

    #[test]
    fn test_log_and_read_back() {
        let dir = TempDir::new().unwrap();
        let logging = logger(&dir);

        logging
            .log(LogEvent::new("item_listed").with_command("add").with_item("item-1"))
            .unwrap();
        logging
            .log(LogEvent::new("swap_requested").with_item("item-1").with_user("user-2"))
            .unwrap();

        let entries = logging.recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        // Newest first
        assert_eq!(entries[0].event.event, "swap_requested");
        assert_eq!(entries[1].event.event, "item_listed");
        assert_eq!(entries[1].event.command.as_deref(), Some("add"));
    }

    #[test]
    fn test_recent_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let logging = logger(&dir);
        logging.log(LogEvent::new("login")).unwrap();

        use std::io::Write as _;
        let mut file = OpenOptions::new()
            .append(true)
            .open(dir.path().join(LOG_FILE))
            .unwrap();
        writeln!(file, "not json").unwrap();

        let entries = logging.recent(10).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_recent_respects_limit() {
        let dir = TempDir::new().unwrap();
        let logging = logger(&dir);
        for i in 0..5 {
            logging.log(LogEvent::new(format!("event_{}", i))).unwrap();
        }
        assert_eq!(logging.recent(3).unwrap().len(), 3);
    }
}
