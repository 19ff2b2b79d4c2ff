//! Named one-shot overlay events.
//!
//! Each [`EasterEgg`] is an opaque name with a fixed display lifetime. At
//! most one is shown at a time through an [`EggSlot`]. While an event is
//! displaying, newly fired events are dropped rather than queued or allowed
//! to replace it.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Timestamp;

/// A named decorative sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasterEgg {
    /// Short burst of sparks around the toggle.
    Sparkle,
    /// Falling glyph columns.
    MatrixRain,
    /// Rotating lighthouse beam sweeping the page.
    Lighthouse,
    /// Emoji confetti from the language toggle.
    Confetti,
    /// Sailing-boat bonus sequence, unlocked by the lighthouse.
    Voyage,
}

impl EasterEgg {
    /// Every event, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Sparkle,
        Self::MatrixRain,
        Self::Lighthouse,
        Self::Confetti,
        Self::Voyage,
    ];

    /// Opaque event name, also used as the overlay's CSS modifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sparkle => "sparkle",
            Self::MatrixRain => "matrix-rain",
            Self::Lighthouse => "lighthouse",
            Self::Confetti => "confetti",
            Self::Voyage => "voyage",
        }
    }

    /// How long the overlay stays on screen.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Sparkle => Duration::from_millis(1200),
            Self::MatrixRain => Duration::from_millis(4000),
            Self::Lighthouse => Duration::from_millis(5000),
            Self::Confetti => Duration::from_millis(4000),
            Self::Voyage => Duration::from_millis(4500),
        }
    }
}

impl fmt::Display for EasterEgg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEgg {
    /// Which event.
    pub egg: EasterEgg,
    /// When it started.
    pub started_at: Timestamp,
    /// When it clears itself.
    pub expires_at: Timestamp,
}

/// Single-occupancy display slot.
#[derive(Debug, Clone, Default)]
pub struct EggSlot {
    active: Option<ActiveEgg>,
}

impl EggSlot {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// The event on screen, if any.
    #[must_use]
    pub const fn active(&self) -> Option<ActiveEgg> {
        self.active
    }

    /// Show `egg` unless another event is still displaying.
    /// Returns the newly shown event.
    pub fn fire(&mut self, egg: EasterEgg, now: Timestamp) -> Option<ActiveEgg> {
        self.expire(now);
        if let Some(current) = self.active {
            debug!(
                dropped = %egg,
                showing = %current.egg,
                "Easter egg dropped, another is displaying"
            );
            return None;
        }
        let active = ActiveEgg {
            egg,
            started_at: now,
            expires_at: now + egg.duration(),
        };
        self.active = Some(active);
        debug!(egg = %egg, "Easter egg fired");
        Some(active)
    }

    /// Clear the slot if its event has run its course. Returns the cleared
    /// event.
    pub fn expire(&mut self, now: Timestamp) -> Option<EasterEgg> {
        match self.active {
            Some(active) if now >= active.expires_at => {
                self.active = None;
                Some(active.egg)
            }
            _ => None,
        }
    }

    /// Clear the slot unconditionally.
    pub const fn clear(&mut self) -> Option<ActiveEgg> {
        self.active.take()
    }
}
