//! Sequential task execution.
//!
//! # Design Decisions
//! - Strict FIFO, at most one task in flight
//! - Task failure (error or panic) is absorbed and reported, never
//!   propagated to the enqueuer
//! - clear() drops pending work only; in-flight work always settles

pub mod task_queue;

pub use task_queue::{TaskQueue, TaskResult};
