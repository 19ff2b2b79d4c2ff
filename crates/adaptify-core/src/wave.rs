//! Geometry and timing for the theme transition overlay.
//!
//! A [`WavePlan`] is computed once per accepted toggle from the transition
//! snapshot. The overlay reveals the target mode with a circular clip that
//! grows from the origin until it covers the farthest viewport corner, a
//! glowing ring along its edge, and a handful of particles thrown outward.

use std::f64::consts::TAU;
use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::appearance::{AppearanceMode, TransitionState};
use crate::clock::Timestamp;
use crate::config::{ThemeConfig, WaveConfig};
use crate::geometry::{Origin, Viewport};

/// The ring's radial gradient is drawn at this radius before scaling.
const RING_BASE_RADIUS: f64 = 50.0;

/// Colours used by the overlay for one target mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Particle fill and inner ring colour.
    pub primary: &'static str,
    /// Particle glow and outer ring colour.
    pub secondary: &'static str,
    /// Background revealed by the clip.
    pub backdrop: &'static str,
}

impl Palette {
    /// Palette for the mode being entered.
    #[must_use]
    pub const fn for_mode(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::Dark => Self {
                primary: "#06B6D4",
                secondary: "#7C3AED",
                backdrop: mode.theme_color(),
            },
            AppearanceMode::Light => Self {
                primary: "#FB923C",
                secondary: "#F97316",
                backdrop: mode.theme_color(),
            },
        }
    }
}

/// One particle: where it ends up relative to the origin, and when it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal travel in pixels.
    pub dx: f64,
    /// Vertical travel in pixels.
    pub dy: f64,
    /// Launch delay after the transition start.
    pub delay: Duration,
}

/// Everything the overlay needs to draw one transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavePlan {
    /// Centre of the reveal.
    pub origin: Origin,
    /// Mode being revealed.
    pub target_mode: AppearanceMode,
    /// Radius that covers the whole viewport.
    pub radius: f64,
    /// Colours for the target mode.
    pub palette: Palette,
    /// Particles, evenly spaced around the origin.
    pub particles: Vec<Particle>,
    /// Shared start time with the state machine.
    pub started_at: Timestamp,
    /// Length of the reveal.
    pub duration: Duration,
    /// Moment after which the overlay must be gone.
    pub removal_deadline: Timestamp,
}

/// Smallest circle radius around `origin` that reaches every viewport
/// corner, scaled by `buffer` and rounded up to a whole pixel.
#[must_use]
pub fn cover_radius(origin: Origin, viewport: Viewport, buffer: f64) -> f64 {
    let max_x = origin.x.max(viewport.width - origin.x);
    let max_y = origin.y.max(viewport.height - origin.y);
    (max_x.hypot(max_y) * buffer).ceil()
}

impl WavePlan {
    /// Plan the overlay for an in-flight transition.
    ///
    /// Returns `None` when nothing should be drawn: the transition is not
    /// animating, the viewport is too narrow, or the user asked for reduced
    /// motion. The mode switch itself is unaffected in all three cases.
    #[must_use]
    pub fn new(
        transition: &TransitionState,
        viewport: Viewport,
        wave: &WaveConfig,
        theme: &ThemeConfig,
        reduced_motion: bool,
    ) -> Option<Self> {
        if !transition.is_animating {
            return None;
        }
        if reduced_motion || viewport.width < wave.narrow_viewport_px {
            debug!(
                width = viewport.width,
                reduced_motion, "Transition overlay skipped"
            );
            return None;
        }

        let radius = cover_radius(transition.origin, viewport, wave.radius_buffer);
        let count = if viewport.width < wave.compact_viewport_px {
            wave.compact_particles
        } else {
            wave.particles
        };
        let travel = radius * wave.particle_travel;
        let particles = (0..count)
            .map(|i| {
                let angle = f64::from(i) / f64::from(count) * TAU;
                Particle {
                    dx: angle.cos() * travel,
                    dy: angle.sin() * travel,
                    delay: Duration::from_millis(wave.particle_stagger_ms * u64::from(i)),
                }
            })
            .collect();

        let duration = theme.wave_duration();
        Some(Self {
            origin: transition.origin,
            target_mode: transition.target_mode,
            radius,
            palette: Palette::for_mode(transition.target_mode),
            particles,
            started_at: transition.started_at,
            duration,
            removal_deadline: transition.started_at + duration + theme.wave_grace(),
        })
    }

    /// Fade-out window between the end of the reveal and the removal
    /// deadline.
    #[must_use]
    pub fn grace(&self) -> Duration {
        self.removal_deadline.saturating_since(self.started_at + self.duration)
    }

    /// Whether the overlay may still be on screen at `now`.
    #[must_use]
    pub fn is_visible(&self, now: Timestamp) -> bool {
        now < self.removal_deadline
    }

    /// Scale factor applied to the ring gradient.
    #[must_use]
    pub fn ring_scale(&self) -> f64 {
        self.radius / RING_BASE_RADIUS
    }

    /// CSS custom properties for the overlay root.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "--wave-x: {}px; --wave-y: {}px; --wave-radius: {}px; --wave-ring-scale: {:.3}; \
             --wave-duration: {}ms; --wave-grace: {}ms; --wave-primary: {}; --wave-secondary: {}; \
             --wave-backdrop: {};",
            self.origin.x,
            self.origin.y,
            self.radius,
            self.ring_scale(),
            self.duration.as_millis(),
            self.grace().as_millis(),
            self.palette.primary,
            self.palette.secondary,
            self.palette.backdrop,
        );
        css
    }

    /// Inline style for one particle.
    #[must_use]
    pub fn particle_style(&self, particle: &Particle) -> String {
        format!(
            "left: {}px; top: {}px; --dx: {:.1}px; --dy: {:.1}px; animation-delay: {}ms;",
            self.origin.x,
            self.origin.y,
            particle.dx,
            particle.dy,
            particle.delay.as_millis(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn animating(origin: Origin, target: AppearanceMode) -> TransitionState {
        TransitionState {
            is_animating: true,
            origin,
            target_mode: target,
            previous_mode: target.toggled(),
            started_at: Timestamp::from_millis(200),
        }
    }

    fn plan(viewport: Viewport, reduced_motion: bool) -> Option<WavePlan> {
        WavePlan::new(
            &animating(Origin::new(100.0, 50.0), AppearanceMode::Dark),
            viewport,
            &WaveConfig::default(),
            &ThemeConfig::default(),
            reduced_motion,
        )
    }

    #[test]
    fn test_cover_radius_reaches_far_corner() {
        // Far corner is (1280, 800): dx 1180, dy 750.
        let radius = cover_radius(Origin::new(100.0, 50.0), Viewport::new(1280.0, 800.0), 1.0);
        assert_eq!(radius, (1180.0_f64.hypot(750.0)).ceil());

        let buffered = cover_radius(Origin::new(100.0, 50.0), Viewport::new(1280.0, 800.0), 1.2);
        assert!(buffered > radius);
    }

    #[test]
    fn test_cover_radius_from_centre() {
        let radius = cover_radius(Origin::new(300.0, 400.0), Viewport::new(600.0, 800.0), 1.0);
        assert_eq!(radius, 500.0);
    }

    #[test]
    fn test_full_viewport_plan() {
        let plan = plan(Viewport::new(1280.0, 800.0), false).unwrap();
        assert_eq!(plan.particles.len(), 8);
        assert_eq!(plan.palette, Palette::for_mode(AppearanceMode::Dark));
        assert_eq!(plan.palette.backdrop, "#0a0a0a");
        assert_eq!(plan.particles[3].delay, Duration::from_millis(60));
        assert_eq!(plan.removal_deadline, Timestamp::from_millis(1300));

        // First particle heads straight right, half the radius out.
        let first = plan.particles[0];
        assert!((first.dx - plan.radius * 0.5).abs() < 1e-9);
        assert!(first.dy.abs() < 1e-9);
    }

    #[test]
    fn test_compact_viewport_uses_fewer_particles() {
        let plan = plan(Viewport::new(800.0, 600.0), false).unwrap();
        assert_eq!(plan.particles.len(), 4);
    }

    #[test]
    fn test_narrow_viewport_or_reduced_motion_renders_nothing() {
        assert!(plan(Viewport::new(639.0, 900.0), false).is_none());
        assert!(plan(Viewport::new(1280.0, 800.0), true).is_none());
    }

    #[test]
    fn test_idle_transition_renders_nothing() {
        let idle = TransitionState::idle(AppearanceMode::Light);
        assert!(
            WavePlan::new(
                &idle,
                Viewport::default(),
                &WaveConfig::default(),
                &ThemeConfig::default(),
                false
            )
            .is_none()
        );
    }

    #[test]
    fn test_visibility_ends_at_removal_deadline() {
        let plan = plan(Viewport::default(), false).unwrap();
        assert!(plan.is_visible(Timestamp::from_millis(1299)));
        assert!(!plan.is_visible(Timestamp::from_millis(1300)));
    }

    #[test]
    fn test_overlay_outlives_the_reveal_by_the_grace() {
        let plan = plan(Viewport::default(), false).unwrap();
        assert_eq!(plan.grace(), Duration::from_millis(100));
        // The window closes at the end of the reveal; the fade still runs.
        assert!(plan.is_visible(plan.started_at + plan.duration));
    }

    #[test]
    fn test_css_variables_carry_geometry_and_palette() {
        let plan = plan(Viewport::default(), false).unwrap();
        let css = plan.css_variables();
        assert!(css.contains("--wave-x: 100px;"));
        assert!(css.contains("--wave-y: 50px;"));
        assert!(css.contains("--wave-primary: #06B6D4;"));
        assert!(css.contains("--wave-duration: 1000ms;"));
        assert!(css.contains("--wave-grace: 100ms;"));
        assert!(plan.particle_style(&plan.particles[1]).contains("animation-delay: 20ms;"));
    }

    #[test]
    fn test_light_palette() {
        let palette = Palette::for_mode(AppearanceMode::Light);
        assert_eq!(palette.primary, "#FB923C");
        assert_eq!(palette.secondary, "#F97316");
        assert_eq!(palette.backdrop, "#FAFBFC");
    }
}
