//! Theme context shared across the component tree.
//!
//! [`ThemeContext`] wraps the core [`ThemeController`] in a stored value and
//! mirrors its observable state into signals. Exactly one browser timer is
//! armed at a time, for the controller's next deadline; every toggle and
//! poll cancels it and arms a fresh one.

use adaptify_core::{
    ActiveEgg, AppearanceMode, EasterEgg, Origin, SiteConfig, ThemeController, TransitionState,
};
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::browser::{self, BrowserStorage, PerformanceClock};

/// Theme controller bound to browser storage and clock.
pub type BrowserTheme = ThemeController<BrowserStorage, PerformanceClock>;

/// Context for appearance state.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: StoredValue<BrowserTheme>,
    site: StoredValue<SiteConfig>,
    timer: StoredValue<Option<TimeoutHandle>>,
    /// Current appearance mode.
    pub mode: ReadSignal<AppearanceMode>,
    set_mode: WriteSignal<AppearanceMode>,
    /// Current transition snapshot.
    pub transition: ReadSignal<TransitionState>,
    set_transition: WriteSignal<TransitionState>,
    /// Easter egg on screen.
    pub egg: ReadSignal<Option<ActiveEgg>>,
    set_egg: WriteSignal<Option<ActiveEgg>>,
}

impl ThemeContext {
    /// Resolve the startup mode from browser storage and the colour-scheme
    /// preference.
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        let controller = ThemeController::init(
            BrowserStorage,
            PerformanceClock,
            site.theme.clone(),
            browser::prefers_dark(),
        );
        let (mode, set_mode) = signal(controller.mode());
        let (transition, set_transition) = signal(*controller.transition());
        let (egg, set_egg) = signal(controller.active_egg());

        Self {
            controller: StoredValue::new(controller),
            site: StoredValue::new(site),
            timer: StoredValue::new(None),
            mode,
            set_mode,
            transition,
            set_transition,
            egg,
            set_egg,
        }
    }

    /// Read the site configuration.
    pub fn with_site<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> Option<R> {
        self.site.try_with_value(f)
    }

    /// Toggle the mode from `origin`, the centre of the activated control.
    pub fn toggle(&self, origin: Option<Origin>) {
        let viewport = browser::viewport();
        let Some(report) = self
            .controller
            .try_update_value(|c| c.toggle(origin, viewport))
        else {
            return;
        };
        debug!(count = report.count, started = report.outcome.is_started(), "Theme toggle");
        self.sync();
        self.reschedule();
    }

    /// Set the mode directly, without a transition.
    pub fn set_mode(&self, mode: AppearanceMode) {
        if self.controller.try_update_value(|c| c.set_mode(mode)).is_some() {
            self.sync();
        }
    }

    /// Forward an OS colour-scheme change.
    pub fn follow_system(&self, prefers_dark: bool) {
        if self
            .controller
            .try_update_value(|c| c.follow_system(prefers_dark))
            .unwrap_or(false)
        {
            self.sync();
        }
    }

    /// Show `egg` unless another event is on screen. Returns true if it
    /// fired.
    pub fn fire(&self, egg: EasterEgg) -> bool {
        let fired = self
            .controller
            .try_update_value(|c| c.fire(egg))
            .flatten()
            .is_some();
        if fired {
            self.sync();
            self.reschedule();
        } else {
            debug!(egg = %egg, "Event slot busy");
        }
        fired
    }

    /// Claim the bonus sequence, if the lighthouse unlocked it.
    pub fn trigger_bonus(&self) {
        let fired = self
            .controller
            .try_update_value(|c| c.trigger_bonus())
            .flatten();
        if fired.is_some() {
            self.sync();
            self.reschedule();
        }
    }

    /// Cancel the timer and drop every pending deadline.
    pub fn teardown(&self) {
        self.cancel_timer();
        self.controller.try_update_value(|c| c.teardown());
    }

    fn poll(&self) {
        self.timer.try_set_value(None);
        let Some(report) = self.controller.try_update_value(|c| c.poll()) else {
            return;
        };
        if report.changed() {
            self.sync();
        }
        self.reschedule();
    }

    fn sync(&self) {
        let Some((mode, transition, egg)) = self
            .controller
            .try_with_value(|c| (c.mode(), *c.transition(), c.active_egg()))
        else {
            return;
        };
        if self.mode.get_untracked() != mode {
            self.set_mode.set(mode);
        }
        if self.transition.get_untracked() != transition {
            self.set_transition.set(transition);
        }
        if self.egg.get_untracked() != egg {
            self.set_egg.set(egg);
        }
    }

    fn cancel_timer(&self) {
        if let Some(Some(handle)) = self.timer.try_get_value() {
            handle.clear();
        }
        self.timer.try_set_value(None);
    }

    fn reschedule(&self) {
        self.cancel_timer();
        let delay = self
            .controller
            .try_with_value(|c| c.next_deadline().map(|d| d.saturating_since(c.now())))
            .flatten();
        let Some(delay) = delay else {
            return;
        };

        let ctx = *self;
        match set_timeout_with_handle(move || ctx.poll(), delay) {
            Ok(handle) => {
                self.timer.try_set_value(Some(handle));
            }
            Err(e) => warn!("Failed to arm theme timer: {:?}", e),
        }
    }
}

/// Get the theme context.
///
/// # Panics
///
/// Panics if called outside of a `ThemeProvider`.
#[must_use]
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Provider component that sets up the theme context.
///
/// Keeps the root class and `meta[name=theme-color]` in step with the mode
/// and follows OS colour-scheme changes until the visitor picks a mode.
#[component]
pub fn ThemeProvider(
    /// Site configuration.
    site: SiteConfig,
    /// Child components that can access the theme context.
    children: Children,
) -> impl IntoView {
    let ctx = ThemeContext::new(site);
    provide_context(ctx);

    Effect::new(move |_| browser::apply_mode(ctx.mode.get()));
    browser::watch_color_scheme(move |dark| ctx.follow_system(dark));
    on_cleanup(move || ctx.teardown());

    children()
}
