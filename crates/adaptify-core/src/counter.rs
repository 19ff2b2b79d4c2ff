//! Rolling-window click counting and the threshold table.
//!
//! The counter resets lazily: a call that arrives more than one window after
//! the previous call starts a fresh cycle before incrementing. Each call
//! therefore also pushes the reset point forward (cancel-and-reschedule).

use std::time::Duration;

use crate::clock::Timestamp;
use crate::config::ThresholdRule;
use crate::easter_egg::EasterEgg;

/// Counts invocations that arrive within a rolling window of each other.
#[derive(Debug, Clone)]
pub struct InteractionCounter {
    count: u32,
    last: Option<Timestamp>,
    window: Duration,
}

impl InteractionCounter {
    /// Create a counter with the given rolling window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            count: 0,
            last: None,
            window,
        }
    }

    /// Record one invocation and return the count including it.
    pub fn record(&mut self, now: Timestamp) -> u32 {
        if self.is_stale(now) {
            self.count = 0;
        }
        self.count = self.count.saturating_add(1);
        self.last = Some(now);
        self.count
    }

    /// Forget the current cycle.
    pub const fn reset(&mut self) {
        self.count = 0;
        self.last = None;
    }

    fn is_stale(&self, now: Timestamp) -> bool {
        self.last
            .is_some_and(|last| now.saturating_since(last) > self.window)
    }
}

/// Mapping from exact counts to events, checked in increasing order.
#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
    rules: Vec<ThresholdRule>,
}

impl ThresholdTable {
    /// Build a table. Rules are sorted by count; duplicates keep the first.
    #[must_use]
    pub fn new(mut rules: Vec<ThresholdRule>) -> Self {
        rules.sort_by_key(|r| r.count);
        rules.dedup_by_key(|r| r.count);
        Self { rules }
    }

    /// Event mapped to exactly `count`, if any.
    #[must_use]
    pub fn event_for(&self, count: u32) -> Option<EasterEgg> {
        self.rules
            .iter()
            .take_while(|r| r.count <= count)
            .find(|r| r.count == count)
            .map(|r| r.egg)
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }
}
