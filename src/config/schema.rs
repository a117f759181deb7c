//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files;
//! every field has a default so a minimal (or absent) config works.

use serde::{Deserialize, Serialize};

/// Logging fidelity: whether structured payloads are retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerbosityMode {
    /// Message only; `data` payloads are dropped.
    #[default]
    Minimal,
    /// Message plus structured payload.
    Detailed,
}

/// Configuration for the logger service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Buffer capacity; oldest entries are evicted beyond this.
    pub max_entries: usize,

    /// Whether entries are mirrored to the console sink.
    pub log_to_console: bool,

    /// Verbosity mode (payload retention).
    pub mode: VerbosityMode,

    /// Global on/off switch; when off, logging is a no-op.
    pub enabled: bool,

    /// Throttle window for subscriber notification, in milliseconds.
    /// Read once at service construction.
    pub notify_interval_ms: u64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            log_to_console: true,
            mode: VerbosityMode::Minimal,
            enabled: true,
            notify_interval_ms: 300,
        }
    }
}
