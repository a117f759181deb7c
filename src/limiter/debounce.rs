//! Quiet-period debounce with an optional immediate leading edge.

use std::sync::{Arc, Mutex};
use std::time::Duration;

struct DebounceState<T> {
    /// Arguments of the last call in the current burst.
    pending: Option<T>,
    /// Bumped on every call; stale timers check it and bail.
    generation: u64,
    /// Whether a burst is currently open (a timer is pending).
    timer_active: bool,
}

struct DebounceShared<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    wait: Duration,
    immediate: bool,
    state: Mutex<DebounceState<T>>,
}

/// Rate limiter that delays execution until a quiet period of fixed
/// length has elapsed since the last call.
///
/// Every call resets the pending timer; the callback ultimately receives
/// only the arguments of the last call in the burst. The immediate
/// variant fires the first call of a burst synchronously instead and
/// suppresses the trailing edge for that burst. Timers run on
/// `tokio::time`, so a `Debounce` must be used inside a Tokio runtime.
pub struct Debounce<T> {
    shared: Arc<DebounceShared<T>>,
}

impl<T> Clone for Debounce<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Send + 'static> Debounce<T> {
    /// Trailing-edge debounce: fire after `wait` of quiet.
    pub fn new(wait: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::build(wait, false, callback)
    }

    /// Leading-edge debounce: fire on the first call of a burst, then
    /// stay quiet until the burst ends.
    pub fn immediate(wait: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::build(wait, true, callback)
    }

    fn build(wait: Duration, immediate: bool, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            shared: Arc::new(DebounceShared {
                callback: Box::new(callback),
                wait,
                immediate,
                state: Mutex::new(DebounceState {
                    pending: None,
                    generation: 0,
                    timer_active: false,
                }),
            }),
        }
    }

    /// Invoke the wrapped callback, subject to the debounce policy.
    pub fn call(&self, args: T) {
        let (generation, leading) = {
            let mut state = self
                .shared
                .state
                .lock()
                .expect("debounce state mutex poisoned");
            state.generation += 1;
            let fire_leading = self.shared.immediate && !state.timer_active;
            state.timer_active = true;
            if fire_leading {
                (state.generation, Some(args))
            } else {
                state.pending = Some(args);
                (state.generation, None)
            }
        };

        if let Some(args) = leading {
            (self.shared.callback)(args);
        }

        // Pin the deadline now; the spawned task may be polled later.
        let deadline = tokio::time::Instant::now() + self.shared.wait;
        let shared = self.shared.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let args = {
                let mut state = shared.state.lock().expect("debounce state mutex poisoned");
                if state.generation != generation {
                    // A later call reset the timer; this one is stale.
                    return;
                }
                state.timer_active = false;
                state.pending.take()
            };
            if let Some(args) = args {
                if !shared.immediate {
                    (shared.callback)(args);
                }
            }
        });
    }
}
