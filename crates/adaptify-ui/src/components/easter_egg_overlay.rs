//! Overlays for the named easter eggs.
//!
//! Rapid theme toggling fires most of them; the language toggle fires the
//! confetti. All of them share one slot, so this layer shows at most one.

use adaptify_core::{EasterEgg, confetti};
use leptos::prelude::*;

use crate::browser;
use crate::context::use_theme;

const MATRIX_COLUMNS: usize = 24;
const MATRIX_GLYPHS: &str = "アイウエオカキクケコ01ADAPTIFY";

fn matrix_column(index: usize) -> String {
    let glyphs: Vec<char> = MATRIX_GLYPHS.chars().collect();
    (0..16)
        .map(|row| glyphs[(index * 7 + row * 3) % glyphs.len()])
        .collect()
}

fn egg_body(egg: EasterEgg, confetti_particles: usize) -> AnyView {
    match egg {
        EasterEgg::Sparkle => (0..12)
            .map(|i| {
                let style = format!("--spark-angle: {}deg; animation-delay: {}ms;", i * 30, i * 25);
                view! { <span class="egg-spark" style=style>"✦"</span> }
            })
            .collect_view()
            .into_any(),
        EasterEgg::MatrixRain => (0..MATRIX_COLUMNS)
            .map(|i| {
                let style = format!(
                    "left: {:.2}%; animation-delay: {}ms;",
                    i as f64 * 100.0 / MATRIX_COLUMNS as f64,
                    (i * 137) % 900
                );
                view! { <span class="egg-matrix-column" style=style>{matrix_column(i)}</span> }
            })
            .collect_view()
            .into_any(),
        EasterEgg::Lighthouse => view! {
            <div class="egg-lighthouse-beam"></div>
            <div class="egg-lighthouse-tower">"🗼"</div>
            <p class="egg-caption">"Leuchtturm in Sicht!"</p>
        }
        .into_any(),
        EasterEgg::Voyage => view! {
            <div class="egg-voyage-sea"></div>
            <div class="egg-voyage-boat">"⛵"</div>
            <p class="egg-caption">"Volle Fahrt voraus!"</p>
        }
        .into_any(),
        EasterEgg::Confetti => confetti(confetti_particles, browser::random)
            .into_iter()
            .map(|piece| {
                let style = format!(
                    "left: {:.1}%; animation-delay: {}ms;",
                    piece.x_percent,
                    piece.delay.as_millis()
                );
                view! { <span class="confetti-piece" style=style>{piece.emoji}</span> }
            })
            .collect_view()
            .into_any(),
    }
}

/// Layer above the transition overlay showing the active easter egg.
#[component]
pub fn EasterEggOverlay() -> impl IntoView {
    let ctx = use_theme();
    let particles = ctx
        .with_site(|site| site.language.confetti_particles)
        .unwrap_or_default();

    move || {
        ctx.egg.get().map(|active| {
            let duration = active.expires_at.saturating_since(active.started_at);
            view! {
                <div
                    class=format!("easter-egg easter-egg-{}", active.egg.name())
                    style=format!("--egg-duration: {}ms;", duration.as_millis())
                    aria-hidden="true"
                    data-testid="easter-egg"
                    data-egg=active.egg.name()
                >
                    {egg_body(active.egg, particles)}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_columns_differ() {
        assert_eq!(matrix_column(0).chars().count(), 16);
        assert_ne!(matrix_column(0), matrix_column(1));
    }
}
