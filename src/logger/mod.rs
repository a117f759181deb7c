//! Logging service subsystem.
//!
//! # Data Flow
//! ```text
//! caller → LoggerService::log (or a SourceLogger handle)
//!     → console sink (if mirroring enabled)
//!     → bounded buffer (oldest evicted first)
//!     → throttled notifier → subscriber callbacks with a snapshot
//! ```
//!
//! # Design Decisions
//! - Mutation is synchronous; only the notification is rate-limited
//! - Subscribers get an eventually-consistent snapshot, never a stream
//!   of individual entries
//! - A failing subscriber is absorbed and recorded, never re-entered in
//!   the same pass

pub mod entry;
pub mod handle;
pub mod service;
pub mod sink;

pub use entry::{LogEntry, LogLevel};
pub use handle::SourceLogger;
pub use service::{LoggerService, Subscription};
pub use sink::{ConsoleSink, StderrSink};
