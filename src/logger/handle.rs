//! Per-source logging handles.

use crate::logger::entry::LogLevel;
use crate::logger::service::LoggerService;

/// A [`LoggerService`] handle with a bound source tag.
///
/// Obtained via [`LoggerService::for_source`]; the typical consumer holds
/// one of these instead of threading the source string through every
/// call.
#[derive(Clone)]
pub struct SourceLogger {
    service: LoggerService,
    source: String,
}

impl SourceLogger {
    pub(crate) fn new(service: LoggerService, source: String) -> Self {
        Self { service, source }
    }

    /// The bound source tag.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message, None);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message, None);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message, None);
    }

    /// Record an entry with a structured payload (retained only in
    /// detailed mode).
    pub fn log_with(&self, level: LogLevel, message: impl Into<String>, data: serde_json::Value) {
        self.log(level, message, Some(data));
    }

    fn log(&self, level: LogLevel, message: impl Into<String>, data: Option<serde_json::Value>) {
        self.service.log(level, self.source.as_str(), message, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LoggerConfig;

    #[tokio::test(start_paused = true)]
    async fn bound_source_flows_into_entries() {
        let service = LoggerService::with_sink(
            LoggerConfig {
                log_to_console: false,
                ..LoggerConfig::default()
            },
            crate::logger::sink::StderrSink,
        );
        let logger = service.for_source("checkout");

        logger.info("starting");
        logger.warn("slow response");

        let logs = service.get_logs();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|e| e.source == "checkout"));
        assert_eq!(logs[1].level, LogLevel::Warn);
    }
}
