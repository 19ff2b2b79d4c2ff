//! Monotonic time source for transition and counter deadlines.
//!
//! `std::time::Instant` is unavailable on `wasm32-unknown-unknown`, so the
//! core works in plain milliseconds from an arbitrary origin. The browser
//! implementation reads `performance.now()`; tests drive a [`ManualClock`].

use std::ops::Add;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A point on a monotonic millisecond timeline.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The origin of the timeline.
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from milliseconds since the clock origin.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the clock origin.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, or zero if `earlier` is in the future.
    #[must_use]
    pub const fn saturating_since(self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Time remaining until `later`, or zero if it already passed.
    #[must_use]
    pub const fn until(self, later: Self) -> Duration {
        later.saturating_since(self)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.as_millis() as u64))
    }
}

/// Source of monotonic timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current time on the clock's timeline.
    fn now(&self) -> Timestamp;
}

/// A clock that only moves when told to.
///
/// Clones share the same timeline, so a test can keep one handle and give
/// another to the controller under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at `start`.
    #[must_use]
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(start.as_millis())),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, to: Timestamp) {
        self.millis.fetch_max(to.as_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_add_duration() {
        let t = Timestamp::from_millis(250) + Duration::from_millis(750);
        assert_eq!(t.as_millis(), 1000);
    }

    #[test]
    fn test_saturating_since_never_underflows() {
        let early = Timestamp::from_millis(10);
        let late = Timestamp::from_millis(40);
        assert_eq!(late.saturating_since(early), Duration::from_millis(30));
        assert_eq!(early.saturating_since(late), Duration::ZERO);
        assert_eq!(early.until(late), Duration::from_millis(30));
    }

    #[test]
    fn test_manual_clock_shares_timeline() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(120));
        assert_eq!(clock.now(), Timestamp::from_millis(120));
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::starting_at(Timestamp::from_millis(500));
        clock.set(Timestamp::from_millis(100));
        assert_eq!(clock.now().as_millis(), 500);
        clock.set(Timestamp::from_millis(900));
        assert_eq!(clock.now().as_millis(), 900);
    }

    #[test]
    fn test_mock_clock() {
        let mut mock = MockClock::new();
        mock.expect_now()
            .times(1)
            .return_const(Timestamp::from_millis(42));
        assert_eq!(mock.now().as_millis(), 42);
    }
}
