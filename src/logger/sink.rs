//! Console mirroring for log entries.

use crate::logger::entry::LogEntry;

/// Destination for console-mirrored entries.
///
/// The service formats the line; the sink decides where it goes. Tests
/// substitute a capturing implementation.
pub trait ConsoleSink: Send + Sync {
    /// Emit one formatted line, with the structured payload as a second
    /// argument when present.
    fn write(&self, line: &str, data: Option<&serde_json::Value>);
}

/// Default sink writing to stderr.
pub struct StderrSink;

impl ConsoleSink for StderrSink {
    fn write(&self, line: &str, data: Option<&serde_json::Value>) {
        match data {
            Some(data) => eprintln!("{line} {data}"),
            None => eprintln!("{line}"),
        }
    }
}

/// Render an entry as `[HH:MM:SS.mmm] [LEVEL] [source] message`.
pub fn format_line(entry: &LogEntry) -> String {
    format!(
        "[{}] [{}] [{}] {}",
        entry.timestamp.format("%H:%M:%S%.3f"),
        entry.level,
        entry.source,
        entry.message
    )
}
