//! Language toggle with a spinning globe.
//!
//! A burst of clicks asks the theme context for the confetti event; the
//! easter-egg overlay draws it.

use std::time::Duration;

use adaptify_core::{Clock, EasterEgg, Language, LanguageClick, LanguageSwitcher, SiteConfig};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::browser::{self, BrowserStorage, PerformanceClock};
use crate::context::ThemeContext;

/// Root class that softens headlines while the language changes.
const HEADLINE_EMPHASIS_CLASS: &str = "headline-emphasis";

/// Language switcher bound to browser storage.
pub type BrowserLanguage = LanguageSwitcher<BrowserStorage>;

#[derive(Debug, Clone, Copy, Default)]
struct Timers {
    switch: Option<TimeoutHandle>,
    rotation: Option<TimeoutHandle>,
}

impl Timers {
    fn clear_all(&mut self) {
        for handle in [self.switch.take(), self.rotation.take()].into_iter().flatten() {
            handle.clear();
        }
    }
}

/// Context for the site language.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    switcher: StoredValue<BrowserLanguage>,
    timers: StoredValue<Timers>,
    theme: Option<ThemeContext>,
    /// Language the page is rendered in.
    pub language: ReadSignal<Language>,
    set_language: WriteSignal<Language>,
    /// Whether the globe is spinning.
    pub rotating: ReadSignal<bool>,
    set_rotating: WriteSignal<bool>,
}

impl LanguageContext {
    /// Resolve the startup language. `theme` receives the bonus claim on
    /// every language switch and the confetti requests.
    #[must_use]
    pub fn new(site: &SiteConfig, theme: Option<ThemeContext>) -> Self {
        let navigator = browser::navigator_language();
        let switcher =
            LanguageSwitcher::init(BrowserStorage, site.language.clone(), navigator.as_deref());
        browser::set_document_lang(switcher.current().code());

        let (language, set_language) = signal(switcher.current());
        let (rotating, set_rotating) = signal(false);
        Self {
            switcher: StoredValue::new(switcher),
            timers: StoredValue::new(Timers::default()),
            theme,
            language,
            set_language,
            rotating,
            set_rotating,
        }
    }

    /// Handle a click on the toggle.
    pub fn click(&self, alt_key: bool) {
        let now = PerformanceClock.now();
        let Some((outcome, config)) = self
            .switcher
            .try_update_value(|s| (s.click(now, alt_key), s.config().clone()))
        else {
            return;
        };

        match outcome {
            LanguageClick::Switch(language) => {
                let ctx = *self;
                self.set_rotating.set(true);
                browser::set_root_class(HEADLINE_EMPHASIS_CLASS, true);
                self.arm(
                    |t| &mut t.switch,
                    Duration::from_millis(config.switch_delay_ms),
                    move || {
                        ctx.set_language.try_set(language);
                        browser::set_document_lang(language.code());
                        browser::set_root_class(HEADLINE_EMPHASIS_CLASS, false);
                    },
                );
                self.arm(
                    |t| &mut t.rotation,
                    Duration::from_millis(config.rotation_ms),
                    move || {
                        ctx.set_rotating.try_set(false);
                    },
                );
                if let Some(theme) = self.theme {
                    theme.trigger_bonus();
                }
            }
            LanguageClick::Confetti => {
                if let Some(theme) = self.theme {
                    theme.fire(EasterEgg::Confetti);
                }
            }
        }
    }

    /// Cancel every timer and drop pending state.
    pub fn teardown(&self) {
        self.timers.try_update_value(Timers::clear_all);
        browser::set_root_class(HEADLINE_EMPHASIS_CLASS, false);
        self.switcher.try_update_value(|s| s.teardown());
    }

    fn arm(
        &self,
        slot: fn(&mut Timers) -> &mut Option<TimeoutHandle>,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => {
                self.timers.try_update_value(|t| {
                    if let Some(previous) = slot(t).replace(handle) {
                        previous.clear();
                    }
                });
            }
            Err(e) => warn!("Failed to arm language timer: {:?}", e),
        }
    }
}

/// Get the language context.
///
/// # Panics
///
/// Panics if called outside of a `LanguageProvider`.
#[must_use]
pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}

/// Provider component that sets up the language context.
#[component]
pub fn LanguageProvider(
    /// Site configuration.
    site: SiteConfig,
    /// Child components that can access the language context.
    children: Children,
) -> impl IntoView {
    let ctx = LanguageContext::new(&site, use_context::<ThemeContext>());
    provide_context(ctx);
    on_cleanup(move || ctx.teardown());

    children()
}

/// Delay before the toggle starts glowing to draw attention.
const GLOW_DELAY_MS: u32 = 1000;

/// The language toggle button.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let ctx = use_language();
    let (glow, set_glow) = signal(false);

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(GLOW_DELAY_MS).await;
        set_glow.try_set(true);
    });

    view! {
        <button
            class="language-toggle"
            class:rotating=move || ctx.rotating.get()
            class:glow=move || glow.get()
            on:click=move |ev: MouseEvent| ctx.click(ev.alt_key())
            aria-label=move || match ctx.language.get() {
                Language::De => "Switch to English",
                Language::En => "Auf Deutsch wechseln",
            }
            data-testid="language-toggle"
        >
            <svg class="language-globe" viewBox="0 0 24 24" width="18" height="18" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10"/>
                <path d="M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>
            </svg>
            <span class="language-label">{move || ctx.language.get().label()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_emphasis_is_styled() {
        let css = include_str!("../../styles/main.css");
        assert!(css.contains(&format!(".{HEADLINE_EMPHASIS_CLASS} :is(h1, h2, h3)")));
    }
}
