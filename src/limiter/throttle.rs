//! Leading-edge throttle with a coalesced trailing call.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// State tracked between calls.
struct ThrottleState<T> {
    /// When the callback last actually fired.
    last_fired: Option<Instant>,
    /// Arguments of the most recent coalesced call.
    pending: Option<T>,
    /// Whether a trailing-edge task is already sleeping.
    trailing_scheduled: bool,
}

struct ThrottleShared<T> {
    callback: Box<dyn Fn(T) + Send + Sync>,
    interval: Duration,
    state: Mutex<ThrottleState<T>>,
}

/// Rate limiter guaranteeing immediate execution on the first call of a
/// quiescent period and at most one trailing execution per window.
///
/// Calls landing inside the window are coalesced: only the most recent
/// arguments survive, and exactly one trailing invocation fires once the
/// interval has elapsed since the last actual invocation. The trailing
/// edge is driven by a spawned sleep, so a `Throttle` must be used inside
/// a Tokio runtime.
pub struct Throttle<T> {
    shared: Arc<ThrottleShared<T>>,
}

impl<T> Clone for Throttle<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Send + 'static> Throttle<T> {
    /// Wrap `callback` so it fires at most once per `interval`.
    pub fn new(interval: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            shared: Arc::new(ThrottleShared {
                callback: Box::new(callback),
                interval,
                state: Mutex::new(ThrottleState {
                    last_fired: None,
                    pending: None,
                    trailing_scheduled: false,
                }),
            }),
        }
    }

    /// Invoke the wrapped callback, subject to the throttle policy.
    pub fn call(&self, args: T) {
        let mut state = self
            .shared
            .state
            .lock()
            .expect("throttle state mutex poisoned");

        let now = Instant::now();
        let window_open = !state.trailing_scheduled
            && match state.last_fired {
                None => true,
                Some(last) => now >= last + self.shared.interval,
            };

        if window_open {
            state.last_fired = Some(now);
            drop(state);
            (self.shared.callback)(args);
            return;
        }

        // Inside the window: remember only the latest arguments.
        state.pending = Some(args);
        if !state.trailing_scheduled {
            state.trailing_scheduled = true;
            let deadline = state
                .last_fired
                .expect("trailing edge scheduled without a prior invocation")
                + self.shared.interval;
            let shared = self.shared.clone();
            drop(state);

            tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                let args = {
                    let mut state = shared.state.lock().expect("throttle state mutex poisoned");
                    state.trailing_scheduled = false;
                    state.last_fired = Some(Instant::now());
                    state.pending.take()
                };
                if let Some(args) = args {
                    (shared.callback)(args);
                }
            });
        }
    }
}
