//! Fixed-interval polling tied to a component lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The read dashboard ticks once on mount and then every interval until its
//! `PollGate` is stopped from `on_cleanup`. The driver is generic over the
//! sleep future so tests can run it without a browser timer.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared liveness flag for one polling loop.
#[derive(Clone, Debug)]
pub struct PollGate {
    alive: Arc<AtomicBool>,
}

impl Default for PollGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PollGate {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the loop; the next wake-up exits without ticking.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Call `tick` now and after every `interval` until `gate` stops.
///
/// `tick` should hand the cycle's work off (e.g. `spawn_local`) so a slow
/// cycle does not push back the next one.
pub async fn drive_poll<S, F, T>(gate: &PollGate, interval: Duration, mut sleep: S, mut tick: T)
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    T: FnMut(),
{
    while gate.is_alive() {
        tick();
        sleep(interval).await;
    }
}
