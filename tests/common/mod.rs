//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use diaglog::ConsoleSink;

/// Console sink capturing every line for assertions.
#[derive(Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<(String, Option<serde_json::Value>)>>>,
}

impl CaptureSink {
    pub fn lines(&self) -> Vec<(String, Option<serde_json::Value>)> {
        self.lines.lock().unwrap().clone()
    }
}

impl ConsoleSink for CaptureSink {
    fn write(&self, line: &str, data: Option<&serde_json::Value>) {
        self.lines
            .lock()
            .unwrap()
            .push((line.to_string(), data.cloned()));
    }
}
