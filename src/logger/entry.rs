//! Log entry and severity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A single recorded diagnostic record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Instant the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Severity level.
    pub level: LogLevel,
    /// Free-text origin tag supplied by the caller.
    pub source: String,
    /// Human-readable text.
    pub message: String,
    /// Optional structured payload; retained only in detailed mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl LogEntry {
    /// Build an entry stamped with the current time.
    pub fn new(
        level: LogLevel,
        source: impl Into<String>,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            source: source.into(),
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_displays_uppercase() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn level_ordering_tracks_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn entry_serializes_without_absent_data() {
        let entry = LogEntry::new(LogLevel::Info, "ui", "ready", None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["level"], "info");
    }
}
