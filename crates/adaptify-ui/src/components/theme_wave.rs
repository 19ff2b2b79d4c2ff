//! The transition overlay.
//!
//! A fixed, click-through layer that reveals the target mode with a growing
//! circular clip, a glowing ring along the clip edge and particles thrown
//! outward. It mounts when a transition starts. When the theme context
//! closes the window the layer fades out over the plan's grace and unmounts
//! at its removal deadline.

use adaptify_core::{Clock, WavePlan};
use leptos::prelude::*;
use tracing::warn;

use crate::browser::{self, PerformanceClock};
use crate::context::use_theme;

/// Overlay for the transition in flight, if any.
#[component]
pub fn ThemeWave() -> impl IntoView {
    let ctx = use_theme();
    let live = Memo::new(move |_| {
        let transition = ctx.transition.get();
        ctx.with_site(|site| {
            WavePlan::new(
                &transition,
                browser::viewport(),
                &site.wave,
                &site.theme,
                browser::prefers_reduced_motion(),
            )
        })
        .flatten()
    });

    // The plan on screen; outlives `live` by the grace window.
    let shown = RwSignal::new(None::<WavePlan>);
    let leaving = RwSignal::new(false);
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let cancel = move || {
        if let Some(Some(handle)) = timer.try_get_value() {
            handle.clear();
        }
        timer.try_set_value(None);
    };

    Effect::new(move |_| {
        if let Some(plan) = live.get() {
            cancel();
            leaving.set(false);
            shown.set(Some(plan));
            return;
        }
        let Some(plan) = shown.get_untracked() else {
            return;
        };

        let now = PerformanceClock.now();
        if !plan.is_visible(now) {
            shown.set(None);
            leaving.set(false);
            return;
        }
        leaving.set(true);
        let delay = plan.removal_deadline.saturating_since(now);
        match set_timeout_with_handle(
            move || {
                timer.try_set_value(None);
                shown.try_set(None);
                leaving.try_set(false);
            },
            delay,
        ) {
            Ok(handle) => {
                timer.try_set_value(Some(handle));
            }
            Err(e) => {
                warn!("Failed to arm overlay removal: {:?}", e);
                shown.set(None);
            }
        }
    });
    on_cleanup(cancel);

    move || {
        shown.get().map(|plan| {
            let particles = plan
                .particles
                .iter()
                .map(|particle| {
                    let style = plan.particle_style(particle);
                    view! { <div class="theme-wave-particle" style=style></div> }
                })
                .collect_view();

            view! {
                <div
                    class=format!("theme-wave theme-wave-{}", plan.target_mode)
                    class:theme-wave-leaving=move || leaving.get()
                    style=plan.css_variables()
                    aria-hidden="true"
                    data-testid="theme-wave"
                >
                    <div class="theme-wave-reveal"></div>
                    <div class="theme-wave-ring"></div>
                    {particles}
                </div>
            }
        })
    }
}
