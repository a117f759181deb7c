//! Shared diagnostic sink with throttled subscriber fan-out.

use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, Weak};
use std::time::Duration;

use arc_swap::ArcSwap;
use dashmap::DashMap;

use crate::config::schema::{LoggerConfig, VerbosityMode};
use crate::limiter::Throttle;
use crate::logger::entry::{LogEntry, LogLevel};
use crate::logger::handle::SourceLogger;
use crate::logger::sink::{format_line, ConsoleSink, StderrSink};

/// Source tag used for the service's own failure records.
const INTERNAL_SOURCE: &str = "logger";

type SubscriberFn = Arc<dyn Fn(&[LogEntry]) + Send + Sync>;

struct ServiceShared {
    /// Runtime-mutable configuration; reads are lock-free, last writer
    /// wins.
    config: ArcSwap<LoggerConfig>,
    /// Bounded entry buffer, oldest evicted first.
    buffer: Mutex<VecDeque<LogEntry>>,
    subscribers: DashMap<u64, SubscriberFn>,
    next_subscriber_id: AtomicU64,
    sink: Box<dyn ConsoleSink>,
    /// Set once during construction; the throttle callback holds a weak
    /// reference back to this struct.
    notifier: OnceLock<Throttle<()>>,
}

impl ServiceShared {
    fn push_entry(&self, entry: LogEntry, max_entries: usize) {
        let mut buffer = self.buffer.lock().expect("log buffer mutex poisoned");
        buffer.push_back(entry);
        while buffer.len() > max_entries {
            buffer.pop_front();
        }
    }

    fn trim(&self, max_entries: usize) {
        let mut buffer = self.buffer.lock().expect("log buffer mutex poisoned");
        while buffer.len() > max_entries {
            buffer.pop_front();
        }
    }

    /// Deliver the current buffer snapshot to every subscriber.
    ///
    /// A panicking callback is absorbed and recorded; it never breaks
    /// delivery to the remaining subscribers, and the failure record
    /// does not schedule another notification pass.
    fn notify_subscribers(&self) {
        let snapshot: Vec<LogEntry> = {
            let buffer = self.buffer.lock().expect("log buffer mutex poisoned");
            buffer.iter().cloned().collect()
        };

        // Clone the callbacks out first so no map guard is held during
        // delivery; a callback may subscribe or drop its own
        // Subscription, which needs write access to the same map.
        let subscribers: Vec<(u64, SubscriberFn)> = self
            .subscribers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        for (id, callback) in subscribers {
            let delivery = std::panic::catch_unwind(AssertUnwindSafe(|| {
                callback(&snapshot);
            }));
            if delivery.is_err() {
                self.record_subscriber_failure(id);
            }
        }
    }

    fn record_subscriber_failure(&self, id: u64) {
        tracing::error!(subscriber_id = id, "log subscriber callback panicked");
        let config = self.config.load();
        if !config.enabled {
            return;
        }
        self.push_entry(
            LogEntry::new(
                LogLevel::Error,
                INTERNAL_SOURCE,
                format!("subscriber {id} callback panicked"),
                None,
            ),
            config.max_entries,
        );
    }
}

/// Process-wide diagnostic sink.
///
/// A `LoggerService` is a cheap-clone handle over shared state: a bounded
/// log buffer, runtime-mutable configuration, an optional console mirror
/// and a set of subscribers notified with buffer snapshots through a
/// throttled fan-out. Construct one instance at startup and pass clones
/// to consumers; tests instantiate independent instances.
///
/// No operation here returns an error or panics outward; all runtime
/// failure is absorbed and reported through the same logging channel.
#[derive(Clone)]
pub struct LoggerService {
    shared: Arc<ServiceShared>,
}

impl LoggerService {
    /// Create a service mirroring to stderr.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, StderrSink)
    }

    /// Create a service with a custom console sink.
    pub fn with_sink(config: LoggerConfig, sink: impl ConsoleSink + 'static) -> Self {
        let interval = Duration::from_millis(config.notify_interval_ms);
        let shared = Arc::new(ServiceShared {
            config: ArcSwap::from_pointee(config),
            buffer: Mutex::new(VecDeque::new()),
            subscribers: DashMap::new(),
            next_subscriber_id: AtomicU64::new(0),
            sink: Box::new(sink),
            notifier: OnceLock::new(),
        });

        let weak = Arc::downgrade(&shared);
        let notifier = Throttle::new(interval, move |()| {
            if let Some(shared) = weak.upgrade() {
                shared.notify_subscribers();
            }
        });
        let _ = shared.notifier.set(notifier);

        Self { shared }
    }

    /// Record an entry.
    ///
    /// No-op while the service is disabled. `data` is dropped unless the
    /// service is in detailed mode. Bursts of calls coalesce into a
    /// single subscriber notification per throttle window.
    pub fn log(
        &self,
        level: LogLevel,
        source: impl Into<String>,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) {
        let config = self.shared.config.load();
        if !config.enabled {
            return;
        }

        let data = match config.mode {
            VerbosityMode::Detailed => data,
            VerbosityMode::Minimal => None,
        };
        let entry = LogEntry::new(level, source, message, data);

        if config.log_to_console {
            self.shared
                .sink
                .write(&format_line(&entry), entry.data.as_ref());
        }

        self.shared.push_entry(entry, config.max_entries);
        self.notifier().call(());
    }

    /// Register a callback receiving the buffer snapshot on each
    /// throttled notification. Dropping (or cancelling) the returned
    /// [`Subscription`] deregisters it.
    pub fn subscribe(&self, callback: impl Fn(&[LogEntry]) + Send + Sync + 'static) -> Subscription {
        let id = self.shared.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.shared.subscribers.insert(id, Arc::new(callback));
        Subscription {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Bind a source tag, yielding per-level convenience methods.
    pub fn for_source(&self, source: impl Into<String>) -> SourceLogger {
        SourceLogger::new(self.clone(), source.into())
    }

    /// Replace the whole configuration. Shrinking `max_entries` trims
    /// the buffer immediately. The notification window is fixed at
    /// construction and is not re-read here.
    pub fn configure(&self, config: LoggerConfig) {
        let max_entries = config.max_entries;
        self.shared.config.store(Arc::new(config));
        self.shared.trim(max_entries);
    }

    /// Toggle the global on/off switch.
    pub fn set_enabled(&self, enabled: bool) {
        self.update_config(|config| config.enabled = enabled);
    }

    /// Switch verbosity mode.
    pub fn set_mode(&self, mode: VerbosityMode) {
        self.update_config(|config| config.mode = mode);
    }

    /// Toggle console mirroring.
    pub fn set_console_output(&self, log_to_console: bool) {
        self.update_config(|config| config.log_to_console = log_to_console);
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig::clone(&self.shared.config.load())
    }

    /// Snapshot of the buffered entries, oldest first.
    pub fn get_logs(&self) -> Vec<LogEntry> {
        let buffer = self.shared.buffer.lock().expect("log buffer mutex poisoned");
        buffer.iter().cloned().collect()
    }

    /// Empty the buffer and notify subscribers through the throttled
    /// path (the empty snapshot is delivered immediately only when the
    /// window happens to be open).
    pub fn clear_logs(&self) {
        {
            let mut buffer = self.shared.buffer.lock().expect("log buffer mutex poisoned");
            buffer.clear();
        }
        self.notifier().call(());
    }

    fn update_config(&self, mutate: impl Fn(&mut LoggerConfig)) {
        self.shared.config.rcu(|current| {
            let mut next = LoggerConfig::clone(current);
            mutate(&mut next);
            Arc::new(next)
        });
    }

    fn notifier(&self) -> &Throttle<()> {
        self.shared
            .notifier
            .get()
            .expect("notifier is set during construction")
    }
}

impl Default for LoggerService {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

/// Handle deregistering a subscriber when cancelled or dropped.
pub struct Subscription {
    id: u64,
    shared: Weak<ServiceShared>,
}

impl Subscription {
    /// Deregister the callback. Deliveries already in flight inside the
    /// current throttle window are best-effort.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.subscribers.remove(&self.id);
        }
    }
}
