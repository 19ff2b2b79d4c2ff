//! The theme controller: one explicit object owning appearance state.
//!
//! The controller wires the appearance machine, the rapid-toggle counter
//! and the easter-egg slot to a preference store and a clock. Every
//! operation reads the clock once, so the mode flip, the transition start
//! and the counter all see the same instant.
//!
//! # Example
//!
//! ```rust
//! use adaptify_core::{
//!     AppearanceMode, ManualClock, MemoryStore, Origin, ThemeConfig, ThemeController, Viewport,
//! };
//!
//! let clock = ManualClock::default();
//! let mut theme = ThemeController::init(MemoryStore::new(), clock.clone(), ThemeConfig::default(), Some(false));
//! assert_eq!(theme.mode(), AppearanceMode::Light);
//!
//! let report = theme.toggle(Some(Origin::new(100.0, 50.0)), Viewport::default());
//! assert!(report.outcome.is_started());
//! assert_eq!(theme.mode(), AppearanceMode::Dark);
//!
//! clock.advance(theme.config().wave_duration());
//! assert!(theme.poll().transition_finished);
//! ```

use tracing::{debug, info};

use crate::appearance::{
    AppearanceMachine, AppearanceMode, ModeSource, ToggleOutcome, TransitionState,
    resolve_initial_mode,
};
use crate::clock::{Clock, Timestamp};
use crate::config::ThemeConfig;
use crate::counter::{InteractionCounter, ThresholdTable};
use crate::easter_egg::{ActiveEgg, EasterEgg, EggSlot};
use crate::geometry::{Origin, Viewport};
use crate::preferences::{PreferenceStore, Preferences, THEME_KEY};

/// What a toggle request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleReport {
    /// Whether a transition started.
    pub outcome: ToggleOutcome,
    /// Rapid-toggle count including this request.
    pub count: u32,
    /// Easter egg shown because of this request.
    pub fired: Option<ActiveEgg>,
}

/// What a poll closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    /// The transition window closed during this poll.
    pub transition_finished: bool,
    /// The easter egg that cleared during this poll.
    pub egg_cleared: Option<EasterEgg>,
}

impl PollReport {
    /// Whether anything changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.transition_finished || self.egg_cleared.is_some()
    }
}

/// Appearance state owner.
#[derive(Debug)]
pub struct ThemeController<S, C> {
    prefs: Preferences<S>,
    clock: C,
    config: ThemeConfig,
    machine: AppearanceMachine,
    counter: InteractionCounter,
    thresholds: ThresholdTable,
    eggs: EggSlot,
    source: ModeSource,
    bonus_unlocked: bool,
}

impl<S: PreferenceStore, C: Clock> ThemeController<S, C> {
    /// Resolve the startup mode and build an idle controller.
    ///
    /// `prefers_dark` is the environment's colour-scheme signal, `None` when
    /// the environment has none.
    pub fn init(store: S, clock: C, config: ThemeConfig, prefers_dark: Option<bool>) -> Self {
        let prefs = Preferences::new(store);
        let stored = prefs.read(THEME_KEY);
        let (mode, source) = resolve_initial_mode(stored.as_deref(), prefers_dark);
        info!(mode = %mode, source = ?source, "Resolved initial appearance");

        Self {
            machine: AppearanceMachine::new(mode, config.wave_duration()),
            counter: InteractionCounter::new(config.rolling_window()),
            thresholds: ThresholdTable::new(config.thresholds.clone()),
            eggs: EggSlot::new(),
            prefs,
            clock,
            config,
            source,
            bonus_unlocked: false,
        }
    }

    /// Current mode.
    pub const fn mode(&self) -> AppearanceMode {
        self.machine.mode()
    }

    /// Where the current mode came from.
    pub const fn source(&self) -> ModeSource {
        self.source
    }

    /// Current transition snapshot.
    pub const fn transition(&self) -> &TransitionState {
        self.machine.transition()
    }

    /// Easter egg on screen, if any.
    pub const fn active_egg(&self) -> Option<ActiveEgg> {
        self.eggs.active()
    }

    /// Configuration in use.
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Preference view used for persistence.
    pub const fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    /// Current clock reading.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Whether the bonus sequence is waiting to be claimed.
    pub const fn bonus_unlocked(&self) -> bool {
        self.bonus_unlocked
    }

    /// Handle a toggle request.
    ///
    /// `origin` is the centre of the control that was activated; when it is
    /// unknown the transition starts from the viewport's top-right corner.
    /// The request always counts toward the rapid-toggle thresholds, even
    /// when the machine ignores it.
    pub fn toggle(&mut self, origin: Option<Origin>, viewport: Viewport) -> ToggleReport {
        let now = self.clock.now();
        let origin =
            origin.unwrap_or_else(|| Origin::fallback(viewport, self.config.origin_inset_px));

        let outcome = self.machine.toggle(now, origin);
        if let ToggleOutcome::Started(state) = outcome {
            self.prefs.write(THEME_KEY, state.target_mode.as_str());
            self.source = ModeSource::Stored;
        }

        let count = self.counter.record(now);
        let fired = self
            .thresholds
            .event_for(count)
            .and_then(|egg| self.eggs.fire(egg, now));
        if let Some(active) = fired {
            info!(egg = %active.egg, count, "Rapid-toggle threshold reached");
            if active.egg == EasterEgg::Lighthouse {
                self.bonus_unlocked = true;
            }
        }

        ToggleReport {
            outcome,
            count,
            fired,
        }
    }

    /// Close whatever has expired as of now.
    pub fn poll(&mut self) -> PollReport {
        let now = self.clock.now();
        PollReport {
            transition_finished: self.machine.poll(now),
            egg_cleared: self.eggs.expire(now),
        }
    }

    /// Earliest moment a [`poll`](Self::poll) would change something.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        let egg = self.eggs.active().map(|a| a.expires_at);
        match (self.machine.deadline(), egg) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Set the mode directly, without a transition, and persist it.
    pub fn set_mode(&mut self, mode: AppearanceMode) {
        if self.machine.set_mode(mode) {
            info!(mode = %mode, "Appearance set without transition");
        }
        self.prefs.write(THEME_KEY, mode.as_str());
        self.source = ModeSource::Stored;
    }

    /// Follow a change of the environment's colour-scheme preference.
    ///
    /// Applies only while the user has never chosen a mode and no transition
    /// is playing. Returns true if the mode changed.
    pub fn follow_system(&mut self, prefers_dark: bool) -> bool {
        if self.source == ModeSource::Stored || self.machine.is_animating() {
            debug!("System colour-scheme change ignored");
            return false;
        }
        self.source = ModeSource::System;
        let mode = if prefers_dark {
            AppearanceMode::Dark
        } else {
            AppearanceMode::Light
        };
        let changed = self.machine.set_mode(mode);
        if changed {
            info!(mode = %mode, "Following system colour scheme");
        }
        changed
    }

    /// Show `egg` now, unless another event still occupies the slot.
    ///
    /// Events raised outside the toggle, such as the language toggle's
    /// confetti, go through here so only one event is ever on screen.
    pub fn fire(&mut self, egg: EasterEgg) -> Option<ActiveEgg> {
        let now = self.clock.now();
        let fired = self.eggs.fire(egg, now);
        if let Some(active) = fired {
            info!(egg = %active.egg, "Easter egg fired");
        }
        fired
    }

    /// Claim the bonus sequence unlocked by the lighthouse.
    ///
    /// The unlock is one-shot: it is consumed once the bonus is shown. If
    /// another event still occupies the slot, the unlock stays pending.
    pub fn trigger_bonus(&mut self) -> Option<ActiveEgg> {
        if !self.bonus_unlocked {
            return None;
        }
        let now = self.clock.now();
        let fired = self.eggs.fire(EasterEgg::Voyage, now);
        if fired.is_some() {
            self.bonus_unlocked = false;
            info!("Bonus sequence claimed");
        }
        fired
    }

    /// Drop all pending deadlines. Called when the view is torn down.
    pub fn teardown(&mut self) {
        self.machine.finish();
        self.eggs.clear();
        self.counter.reset();
        debug!("Theme controller torn down");
    }
}
