//! Appearance mode and the transition state machine.
//!
//! The machine has two states, idle and transitioning. An accepted toggle
//! flips the mode immediately and opens a transition window of fixed length;
//! toggles that arrive while the window is open are ignored. Closing the
//! window is driven by [`AppearanceMachine::poll`] against a monotonic clock,
//! so the machine and the renderer agree on when the transition started.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::Timestamp;
use crate::error::Error;
use crate::geometry::Origin;

/// The site's colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Light scheme.
    Light,
    /// Dark scheme (used when nothing else decides).
    #[default]
    Dark,
}

impl AppearanceMode {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Storage and root-class representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class set on the document root. The other mode's class is removed.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        self.as_str()
    }

    /// Value for `<meta name="theme-color">`.
    #[must_use]
    pub const fn theme_color(self) -> &'static str {
        match self {
            Self::Light => "#FAFBFC",
            Self::Dark => "#0a0a0a",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppearanceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Where the startup mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    /// A previously stored preference.
    Stored,
    /// The environment's colour-scheme preference.
    System,
    /// No information at all.
    Default,
}

/// Resolve the startup mode: stored value, then the environment's
/// "prefers dark" signal, then dark.
///
/// A stored value that does not parse is treated as absent.
pub fn resolve_initial_mode(
    stored: Option<&str>,
    prefers_dark: Option<bool>,
) -> (AppearanceMode, ModeSource) {
    if let Some(raw) = stored {
        match raw.parse::<AppearanceMode>() {
            Ok(mode) => return (mode, ModeSource::Stored),
            Err(e) => tracing::warn!("Ignoring stored appearance mode: {}", e),
        }
    }
    match prefers_dark {
        Some(true) => (AppearanceMode::Dark, ModeSource::System),
        Some(false) => (AppearanceMode::Light, ModeSource::System),
        None => (AppearanceMode::default(), ModeSource::Default),
    }
}

/// Snapshot of the current or most recent transition.
///
/// Positional fields keep their last values after the window closes; only
/// read them while `is_animating` is true.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionState {
    /// Whether a transition is in flight.
    pub is_animating: bool,
    /// Point the effect emanates from.
    pub origin: Origin,
    /// Mode being entered.
    pub target_mode: AppearanceMode,
    /// Mode being left.
    pub previous_mode: AppearanceMode,
    /// Clock reading taken when the toggle was accepted.
    pub started_at: Timestamp,
}

impl TransitionState {
    /// Resting state for a machine in `mode` that never transitioned.
    #[must_use]
    pub const fn idle(mode: AppearanceMode) -> Self {
        Self {
            is_animating: false,
            origin: Origin::new(0.0, 0.0),
            target_mode: mode,
            previous_mode: mode,
            started_at: Timestamp::ZERO,
        }
    }
}

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleOutcome {
    /// A new transition started and the mode flipped.
    Started(TransitionState),
    /// A transition was already in flight; nothing changed.
    Ignored {
        /// Time left in the current window.
        remaining: Duration,
    },
}

impl ToggleOutcome {
    /// Whether the toggle started a transition.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Two-state appearance machine.
#[derive(Debug, Clone)]
pub struct AppearanceMachine {
    mode: AppearanceMode,
    transition: TransitionState,
    deadline: Option<Timestamp>,
    wave_duration: Duration,
}

impl AppearanceMachine {
    /// Create an idle machine in `mode`.
    #[must_use]
    pub const fn new(mode: AppearanceMode, wave_duration: Duration) -> Self {
        Self {
            mode,
            transition: TransitionState::idle(mode),
            deadline: None,
            wave_duration,
        }
    }

    /// Current mode. Already the target mode while a transition plays.
    #[must_use]
    pub const fn mode(&self) -> AppearanceMode {
        self.mode
    }

    /// Current transition snapshot.
    #[must_use]
    pub const fn transition(&self) -> &TransitionState {
        &self.transition
    }

    /// Whether a transition window is open.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_animating
    }

    /// When the open window closes, if one is open.
    #[must_use]
    pub const fn deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Length of each transition window.
    #[must_use]
    pub const fn wave_duration(&self) -> Duration {
        self.wave_duration
    }

    /// Request a mode switch emanating from `origin`.
    ///
    /// A window whose deadline has passed counts as closed even if nobody
    /// polled it yet.
    pub fn toggle(&mut self, now: Timestamp, origin: Origin) -> ToggleOutcome {
        self.poll(now);
        if let Some(deadline) = self.deadline {
            debug!(
                remaining_ms = now.until(deadline).as_millis() as u64,
                "Toggle ignored, transition in flight"
            );
            return ToggleOutcome::Ignored {
                remaining: now.until(deadline),
            };
        }

        let previous = self.mode;
        let target = previous.toggled();
        self.mode = target;
        self.transition = TransitionState {
            is_animating: true,
            origin,
            target_mode: target,
            previous_mode: previous,
            started_at: now,
        };
        self.deadline = Some(now + self.wave_duration);

        info!(
            from = %previous,
            to = %target,
            x = origin.x,
            y = origin.y,
            "Appearance transition started"
        );
        ToggleOutcome::Started(self.transition)
    }

    /// Close the window if its deadline has passed. Returns true when this
    /// call closed it.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.finish();
                debug!(mode = %self.mode, "Appearance transition finished");
                true
            }
            _ => false,
        }
    }

    /// Close any open window immediately.
    pub const fn finish(&mut self) {
        self.transition.is_animating = false;
        self.deadline = None;
    }

    /// Set the mode without a transition. Returns true if it changed.
    pub fn set_mode(&mut self, mode: AppearanceMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        if !self.transition.is_animating {
            self.transition = TransitionState::idle(mode);
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const WAVE: Duration = Duration::from_millis(1000);

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("dark".parse::<AppearanceMode>().unwrap(), AppearanceMode::Dark);
        assert_eq!(" light ".parse::<AppearanceMode>().unwrap(), AppearanceMode::Light);
        assert!(matches!(
            "sepia".parse::<AppearanceMode>(),
            Err(Error::InvalidMode(_))
        ));
        assert_eq!(AppearanceMode::Light.to_string(), "light");
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&AppearanceMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }

    #[test]
    fn test_theme_color_per_mode() {
        assert_eq!(AppearanceMode::Dark.theme_color(), "#0a0a0a");
        assert_eq!(AppearanceMode::Light.theme_color(), "#FAFBFC");
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        let (mode, source) = resolve_initial_mode(Some("light"), Some(true));
        assert_eq!(mode, AppearanceMode::Light);
        assert_eq!(source, ModeSource::Stored);
    }

    #[test]
    fn test_resolve_falls_back_to_system_signal() {
        assert_eq!(
            resolve_initial_mode(None, Some(true)),
            (AppearanceMode::Dark, ModeSource::System)
        );
        assert_eq!(
            resolve_initial_mode(None, Some(false)),
            (AppearanceMode::Light, ModeSource::System)
        );
    }

    #[test]
    fn test_resolve_without_signal_is_dark() {
        assert_eq!(
            resolve_initial_mode(None, None),
            (AppearanceMode::Dark, ModeSource::Default)
        );
    }

    #[test]
    fn test_resolve_ignores_garbage_stored_value() {
        assert_eq!(
            resolve_initial_mode(Some("blue"), Some(false)),
            (AppearanceMode::Light, ModeSource::System)
        );
    }

    #[test]
    fn test_toggle_flips_mode_immediately() {
        let mut machine = AppearanceMachine::new(AppearanceMode::Light, WAVE);
        let outcome = machine.toggle(at(0), Origin::new(100.0, 50.0));

        let ToggleOutcome::Started(state) = outcome else {
            panic!("expected a started transition");
        };
        assert_eq!(machine.mode(), AppearanceMode::Dark);
        assert!(state.is_animating);
        assert_eq!(state.origin, Origin::new(100.0, 50.0));
        assert_eq!(state.previous_mode, AppearanceMode::Light);
        assert_eq!(state.target_mode, AppearanceMode::Dark);
        assert_eq!(machine.deadline(), Some(at(1000)));
    }

    #[test]
    fn test_toggle_during_transition_is_ignored() {
        let mut machine = AppearanceMachine::new(AppearanceMode::Dark, WAVE);
        assert!(machine.toggle(at(0), Origin::default()).is_started());

        let second = machine.toggle(at(300), Origin::new(5.0, 5.0));
        assert_eq!(
            second,
            ToggleOutcome::Ignored {
                remaining: Duration::from_millis(700)
            }
        );
        assert_eq!(machine.mode(), AppearanceMode::Light);
        assert_eq!(machine.deadline(), Some(at(1000)));
        assert_eq!(machine.transition().origin, Origin::default());
    }

    #[test]
    fn test_poll_closes_window_at_deadline() {
        let mut machine = AppearanceMachine::new(AppearanceMode::Dark, WAVE);
        machine.toggle(at(50), Origin::new(1.0, 2.0));

        assert!(!machine.poll(at(1049)));
        assert!(machine.is_animating());
        assert!(machine.poll(at(1050)));
        assert!(!machine.is_animating());
        assert!(!machine.poll(at(2000)));
        // Positional fields survive the close.
        assert_eq!(machine.transition().origin, Origin::new(1.0, 2.0));
    }

    #[test]
    fn test_toggle_accepted_again_after_window() {
        let mut machine = AppearanceMachine::new(AppearanceMode::Dark, WAVE);
        machine.toggle(at(0), Origin::default());
        machine.poll(at(1000));
        assert!(machine.toggle(at(1000), Origin::default()).is_started());
        assert_eq!(machine.mode(), AppearanceMode::Dark);
    }

    #[test]
    fn test_toggle_after_unpolled_deadline_starts() {
        let mut machine = AppearanceMachine::new(AppearanceMode::Light, WAVE);
        machine.toggle(at(0), Origin::default());
        let late = machine.toggle(at(1200), Origin::new(3.0, 4.0));
        assert!(late.is_started());
        assert_eq!(machine.mode(), AppearanceMode::Light);
        assert_eq!(machine.deadline(), Some(at(2200)));
    }

    #[test]
    fn test_set_mode_without_transition() {
        let mut machine = AppearanceMachine::new(AppearanceMode::Dark, WAVE);
        assert!(!machine.set_mode(AppearanceMode::Dark));
        assert!(machine.set_mode(AppearanceMode::Light));
        assert_eq!(machine.mode(), AppearanceMode::Light);
        assert!(!machine.is_animating());
        assert_eq!(machine.deadline(), None);
    }
}
