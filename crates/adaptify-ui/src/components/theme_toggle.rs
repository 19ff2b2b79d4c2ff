//! The appearance toggle button.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_theme;

/// Delay before the toggle starts glowing to invite a click.
const GLOW_DELAY_MS: u32 = 800;

/// Round sun/moon switch. The transition emanates from its centre.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || ctx.mode.get().is_dark();
    let (glow, set_glow) = signal(false);

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(GLOW_DELAY_MS).await;
        set_glow.try_set(true);
    });

    view! {
        <button
            class="theme-toggle"
            class:is-dark=is_dark
            class:is-animating=move || ctx.transition.get().is_animating
            class:glow=move || glow.get()
            role="switch"
            aria-checked=move || (!is_dark()).to_string()
            aria-label=move || if is_dark() { "Light Mode aktivieren" } else { "Dark Mode aktivieren" }
            on:click=move |ev: MouseEvent| ctx.toggle(browser::event_origin(&ev))
            data-testid="theme-toggle"
        >
            <span class="theme-toggle-ring">
                <span class="theme-toggle-sun" aria-hidden="true">
                    <span class="theme-toggle-sun-core"></span>
                    {[0, 60, 120, 180, 240, 300]
                        .into_iter()
                        .map(|angle| {
                            let style = format!("transform: rotate({angle}deg) translateY(-11px);");
                            view! { <span class="theme-toggle-ray" style=style></span> }
                        })
                        .collect_view()}
                </span>
                <span class="theme-toggle-moon" aria-hidden="true">
                    <svg viewBox="0 0 24 24" width="18" height="18" fill="currentColor">
                        <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>
                    </svg>
                </span>
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_invitation_glow_is_styled() {
        let css = include_str!("../../styles/main.css");
        assert!(css.contains(".theme-toggle.glow"));
    }
}
