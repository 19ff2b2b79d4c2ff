//! Cookie consent banner.

use std::time::Duration;

use adaptify_core::{Consent, ConsentDecision, Route};
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::warn;

use crate::browser::BrowserStorage;
use crate::context::use_theme;

/// Step between mounting the banner and starting its slide-in.
const ANIMATE_STEP: Duration = Duration::from_millis(50);

/// Bottom banner asking for cookie consent. Shown after a delay when no
/// decision is stored; closing it counts as declining.
#[component]
pub fn CookieBanner() -> impl IntoView {
    let ctx = use_theme();
    let config = ctx.with_site(|s| s.consent.clone()).unwrap_or_default();
    let consent = StoredValue::new(Consent::new(BrowserStorage, config));
    let timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    let (visible, set_visible) = signal(false);
    let (animating, set_animating) = signal(false);

    let arm = move |delay: Duration, callback: Box<dyn FnOnce() + 'static>| {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => {
                timer.try_update_value(|slot| {
                    if let Some(previous) = slot.replace(handle) {
                        previous.clear();
                    }
                });
            }
            Err(e) => warn!("Failed to arm cookie banner timer: {:?}", e),
        }
    };

    let should_show = consent.with_value(Consent::banner_should_show);
    if should_show {
        let delay = consent.with_value(Consent::banner_delay);
        arm(
            delay,
            Box::new(move || {
                set_visible.try_set(true);
                arm(
                    ANIMATE_STEP,
                    Box::new(move || {
                        set_animating.try_set(true);
                    }),
                );
            }),
        );
    }

    on_cleanup(move || {
        if let Some(Some(handle)) = timer.try_get_value() {
            handle.clear();
        }
    });

    let decide = move |decision: ConsentDecision| {
        consent.with_value(|c| c.record(decision));
        set_animating.set(false);
        let close = consent.with_value(Consent::close_duration);
        arm(
            close,
            Box::new(move || {
                set_visible.try_set(false);
            }),
        );
    };

    view! {
        <Show when=move || visible.get()>
            <div
                class="cookie-banner"
                class:is-open=move || animating.get()
                role="dialog"
                aria-live="polite"
                aria-label="Cookie-Hinweis"
                data-testid="cookie-banner"
            >
                <div class="cookie-banner-card">
                    <button
                        class="cookie-banner-close"
                        aria-label="Schließen"
                        on:click=move |_| decide(ConsentDecision::Declined)
                    >
                        "×"
                    </button>
                    <div class="cookie-banner-icon" aria-hidden="true">"🍪"</div>
                    <div class="cookie-banner-text">
                        <h3>"Wir nutzen Cookies 🍪"</h3>
                        <p>
                            "Wir verwenden Cookies, um deine Erfahrung auf unserer Website zu verbessern. "
                            <A href=Route::Datenschutz.path()>"Mehr erfahren"</A>
                        </p>
                    </div>
                    <div class="cookie-banner-actions">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| decide(ConsentDecision::Declined)
                            data-testid="cookie-decline"
                        >
                            "Ablehnen"
                        </button>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| decide(ConsentDecision::Accepted)
                            data-testid="cookie-accept"
                        >
                            "Alle akzeptieren"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
