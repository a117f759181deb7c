//! Rate-limiting primitives.
//!
//! # Data Flow
//! ```text
//! caller → Throttle::call / Debounce::call
//!     → leading edge fires synchronously (throttle, immediate debounce)
//!     → later calls coalesce; trailing edge fires from a spawned sleep
//! ```
//!
//! # Design Decisions
//! - Timing goes through tokio::time so tests run on a paused clock
//! - Only the most recent arguments of a burst survive
//! - Handles are cheap clones over shared state

pub mod debounce;
pub mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
