//! In-process diagnostics: a shared logging service with throttled
//! subscriber notification, plus the rate-limiting and task-queue
//! primitives it is built from.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │              LoggerService               │
//!                      │                                          │
//!   log(level, src, …) │  ┌────────┐   ┌─────────┐   ┌─────────┐  │
//!   ───────────────────┼─▶│ config │──▶│ console │   │ bounded │  │
//!                      │  │ gate   │   │  sink   │   │ buffer  │  │
//!                      │  └────────┘   └─────────┘   └────┬────┘  │
//!                      │                                  │       │
//!                      │                            ┌─────▼─────┐ │
//!   subscriber ◀───────┼────────────────────────────│ throttled │ │
//!   callbacks          │         snapshot fan-out   │ notifier  │ │
//!                      │                            └───────────┘ │
//!                      └──────────────────────────────────────────┘
//!
//!   Standalone primitives: limiter::{Throttle, Debounce},
//!   queue::TaskQueue: usable on their own, the service composes the
//!   throttle internally.
//! ```
//!
//! Every entry is recorded synchronously; only the subscriber
//! notification is rate-limited. All timing runs on `tokio::time`, so
//! the whole crate is testable on a paused clock.

// Core subsystems
pub mod config;
pub mod logger;

// Primitives
pub mod limiter;
pub mod queue;

pub use config::{LoggerConfig, VerbosityMode};
pub use limiter::{Debounce, Throttle};
pub use logger::{ConsoleSink, LogEntry, LogLevel, LoggerService, SourceLogger, Subscription};
pub use queue::TaskQueue;
