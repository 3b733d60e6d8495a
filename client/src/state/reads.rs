//! Read dashboard state, replaced wholesale by each successful poll cycle.
//!
//! Cycles are numbered as they are issued. Overlapping cycles may finish out
//! of order; a result older than the last applied cycle is dropped.

#[cfg(test)]
#[path = "reads_test.rs"]
mod reads_test;

use std::time::Duration;

use crate::net::types::{ReadStats, TagRead};

/// Delay between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, Default)]
pub struct ReadsState {
    pub tags: Vec<TagRead>,
    pub stats: Option<ReadStats>,
    pub graph_url: Option<String>,
    pub last_error: Option<String>,
    /// Id of the newest cycle whose result is on screen.
    pub applied_cycle: u64,
}

impl ReadsState {
    /// Whether a result from `cycle` is newer than what is displayed.
    pub fn accepts(&self, cycle: u64) -> bool {
        cycle > self.applied_cycle
    }

    /// Install a cycle's result. Stale cycles are ignored; returns whether it applied.
    pub fn apply_cycle(&mut self, cycle: u64, tags: Vec<TagRead>, stats: ReadStats, graph_url: Option<String>) -> bool {
        if !self.accepts(cycle) {
            return false;
        }
        self.applied_cycle = cycle;
        self.tags = tags;
        self.stats = Some(stats);
        if graph_url.is_some() {
            self.graph_url = graph_url;
        }
        self.last_error = None;
        true
    }

    /// Note a failed cycle; the previous display stays as it was.
    pub fn record_failure(&mut self, cycle: u64, message: String) {
        if self.accepts(cycle) {
            self.last_error = Some(message);
        }
    }
}

/// Badge text and modifier class for a read's validity.
pub fn validity_badge(valid: bool) -> (&'static str, &'static str) {
    if valid { ("Válido", "read-feed__badge--valid") } else { ("Inválido", "read-feed__badge--invalid") }
}
