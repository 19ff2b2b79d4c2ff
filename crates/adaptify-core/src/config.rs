//! Site configuration.
//!
//! Every timing constant the site uses lives here so the state machine and
//! the renderer read the same values. All fields default, so an empty JSON
//! object is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::easter_egg::EasterEgg;
use crate::error::{Error, Result};

/// Default length of the theme transition window (milliseconds).
pub const DEFAULT_WAVE_DURATION_MS: u64 = 1000;

/// Default extra time the overlay may stay mounted after the window closes.
pub const DEFAULT_WAVE_GRACE_MS: u64 = 100;

/// Default rolling window for counting rapid toggles (milliseconds).
pub const DEFAULT_ROLLING_WINDOW_MS: u64 = 2500;

/// Default inset of the fallback transition origin from the top-right corner.
pub const DEFAULT_ORIGIN_INSET_PX: f64 = 40.0;

/// A threshold in the rapid-toggle table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdRule {
    /// Toggle count that fires the event.
    pub count: u32,
    /// Event fired when the count is reached.
    pub egg: EasterEgg,
}

/// Appearance state machine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Length of the transition window.
    #[serde(default = "default_wave_duration_ms")]
    pub wave_duration_ms: u64,
    /// Grace period the renderer may use after the window closes.
    #[serde(default = "default_wave_grace_ms")]
    pub wave_grace_ms: u64,
    /// Rolling window for the interaction counter.
    #[serde(default = "default_rolling_window_ms")]
    pub rolling_window_ms: u64,
    /// Inset of the fallback origin from the viewport's top-right corner.
    #[serde(default = "default_origin_inset_px")]
    pub origin_inset_px: f64,
    /// Rapid-toggle thresholds, checked in increasing order.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<ThresholdRule>,
}

const fn default_wave_duration_ms() -> u64 {
    DEFAULT_WAVE_DURATION_MS
}

const fn default_wave_grace_ms() -> u64 {
    DEFAULT_WAVE_GRACE_MS
}

const fn default_rolling_window_ms() -> u64 {
    DEFAULT_ROLLING_WINDOW_MS
}

const fn default_origin_inset_px() -> f64 {
    DEFAULT_ORIGIN_INSET_PX
}

fn default_thresholds() -> Vec<ThresholdRule> {
    vec![
        ThresholdRule {
            count: 3,
            egg: EasterEgg::Sparkle,
        },
        ThresholdRule {
            count: 5,
            egg: EasterEgg::MatrixRain,
        },
        ThresholdRule {
            count: 7,
            egg: EasterEgg::Lighthouse,
        },
    ]
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            wave_duration_ms: DEFAULT_WAVE_DURATION_MS,
            wave_grace_ms: DEFAULT_WAVE_GRACE_MS,
            rolling_window_ms: DEFAULT_ROLLING_WINDOW_MS,
            origin_inset_px: DEFAULT_ORIGIN_INSET_PX,
            thresholds: default_thresholds(),
        }
    }
}

impl ThemeConfig {
    /// Transition window as a [`Duration`].
    #[must_use]
    pub const fn wave_duration(&self) -> Duration {
        Duration::from_millis(self.wave_duration_ms)
    }

    /// Renderer grace period as a [`Duration`].
    #[must_use]
    pub const fn wave_grace(&self) -> Duration {
        Duration::from_millis(self.wave_grace_ms)
    }

    /// Counter rolling window as a [`Duration`].
    #[must_use]
    pub const fn rolling_window(&self) -> Duration {
        Duration::from_millis(self.rolling_window_ms)
    }

    /// Set the transition window.
    #[must_use]
    pub fn with_wave_duration(mut self, duration: Duration) -> Self {
        self.wave_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the counter rolling window.
    #[must_use]
    pub fn with_rolling_window(mut self, window: Duration) -> Self {
        self.rolling_window_ms = window.as_millis() as u64;
        self
    }

    /// Replace the threshold table.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Vec<ThresholdRule>) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Transition renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaveConfig {
    /// Viewports narrower than this render no overlay at all.
    #[serde(default = "default_narrow_viewport_px")]
    pub narrow_viewport_px: f64,
    /// Viewports narrower than this render the reduced particle set.
    #[serde(default = "default_compact_viewport_px")]
    pub compact_viewport_px: f64,
    /// Particles on full-size viewports.
    #[serde(default = "default_particles")]
    pub particles: u32,
    /// Particles on compact viewports.
    #[serde(default = "default_compact_particles")]
    pub compact_particles: u32,
    /// Multiplier applied to the corner distance so the reveal fully covers.
    #[serde(default = "default_radius_buffer")]
    pub radius_buffer: f64,
    /// Delay between consecutive particles.
    #[serde(default = "default_particle_stagger_ms")]
    pub particle_stagger_ms: u64,
    /// Fraction of the cover radius each particle travels.
    #[serde(default = "default_particle_travel")]
    pub particle_travel: f64,
}

const fn default_narrow_viewport_px() -> f64 {
    640.0
}

const fn default_compact_viewport_px() -> f64 {
    1024.0
}

const fn default_particles() -> u32 {
    8
}

const fn default_compact_particles() -> u32 {
    4
}

const fn default_radius_buffer() -> f64 {
    1.2
}

const fn default_particle_stagger_ms() -> u64 {
    20
}

const fn default_particle_travel() -> f64 {
    0.5
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            narrow_viewport_px: default_narrow_viewport_px(),
            compact_viewport_px: default_compact_viewport_px(),
            particles: default_particles(),
            compact_particles: default_compact_particles(),
            radius_buffer: default_radius_buffer(),
            particle_stagger_ms: default_particle_stagger_ms(),
            particle_travel: default_particle_travel(),
        }
    }
}

/// Language toggle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Window in which repeated clicks count toward the confetti burst.
    #[serde(default = "default_click_window_ms")]
    pub click_window_ms: u64,
    /// Clicks within the window that fire confetti.
    #[serde(default = "default_confetti_clicks")]
    pub confetti_clicks: u32,
    /// Delay before the visible language switch.
    #[serde(default = "default_switch_delay_ms")]
    pub switch_delay_ms: u64,
    /// Duration of the globe spin.
    #[serde(default = "default_rotation_ms")]
    pub rotation_ms: u64,
    /// Confetti particles per burst.
    #[serde(default = "default_confetti_particles")]
    pub confetti_particles: usize,
}

const fn default_click_window_ms() -> u64 {
    400
}

const fn default_confetti_clicks() -> u32 {
    3
}

const fn default_switch_delay_ms() -> u64 {
    150
}

const fn default_rotation_ms() -> u64 {
    600
}

const fn default_confetti_particles() -> usize {
    25
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            click_window_ms: default_click_window_ms(),
            confetti_clicks: default_confetti_clicks(),
            switch_delay_ms: default_switch_delay_ms(),
            rotation_ms: default_rotation_ms(),
            confetti_particles: default_confetti_particles(),
        }
    }
}

impl LanguageConfig {
    /// Click-counting window as a [`Duration`].
    #[must_use]
    pub const fn click_window(&self) -> Duration {
        Duration::from_millis(self.click_window_ms)
    }
}

/// Cookie banner configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsentConfig {
    /// Delay before the banner slides in.
    #[serde(default = "default_banner_delay_ms")]
    pub banner_delay_ms: u64,
    /// Duration of the close animation.
    #[serde(default = "default_close_ms")]
    pub close_ms: u64,
}

const fn default_banner_delay_ms() -> u64 {
    1500
}

const fn default_close_ms() -> u64 {
    300
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            banner_delay_ms: default_banner_delay_ms(),
            close_ms: default_close_ms(),
        }
    }
}

/// Contact form configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Endpoint receiving the URL-encoded POST.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Value of the hidden `form-name` field.
    #[serde(default = "default_form_name")]
    pub form_name: String,
    /// How long the confirmation stays before the modal closes.
    #[serde(default = "default_success_dismiss_ms")]
    pub success_dismiss_ms: u64,
    /// Address shown when submission fails.
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
}

fn default_endpoint() -> String {
    "/".to_string()
}

fn default_form_name() -> String {
    "contact".to_string()
}

const fn default_success_dismiss_ms() -> u64 {
    2500
}

fn default_fallback_email() -> String {
    "kontakt@adaptify.de".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            form_name: default_form_name(),
            success_dismiss_ms: default_success_dismiss_ms(),
            fallback_email: default_fallback_email(),
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Appearance state machine settings.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Transition renderer settings.
    #[serde(default)]
    pub wave: WaveConfig,
    /// Language toggle settings.
    #[serde(default)]
    pub language: LanguageConfig,
    /// Cookie banner settings.
    #[serde(default)]
    pub consent: ConsentConfig,
    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse site config: {e}")))?;
        config.validate()?;
        debug!(
            wave_ms = config.theme.wave_duration_ms,
            window_ms = config.theme.rolling_window_ms,
            "Loaded site config"
        );
        Ok(config)
    }

    /// Reject configurations the state machines cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.theme.wave_duration_ms == 0 {
            return Err(Error::Configuration(
                "wave_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.theme.rolling_window_ms == 0 {
            return Err(Error::Configuration(
                "rolling_window_ms must be greater than zero".to_string(),
            ));
        }
        if self.language.click_window_ms == 0 || self.language.confetti_clicks == 0 {
            return Err(Error::Configuration(
                "language click window and confetti clicks must be greater than zero"
                    .to_string(),
            ));
        }
        if self.wave.narrow_viewport_px > self.wave.compact_viewport_px {
            return Err(Error::Configuration(
                "narrow_viewport_px must not exceed compact_viewport_px".to_string(),
            ));
        }
        if self.wave.radius_buffer < 1.0 {
            return Err(Error::Configuration(
                "radius_buffer must be at least 1.0".to_string(),
            ));
        }

        let mut previous = 0;
        for rule in &self.theme.thresholds {
            if rule.count <= previous {
                return Err(Error::Configuration(format!(
                    "threshold counts must be strictly increasing and non-zero (got {} after {})",
                    rule.count, previous
                )));
            }
            previous = rule.count;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.theme.wave_duration(), Duration::from_millis(1000));
        assert_eq!(config.theme.rolling_window(), Duration::from_millis(2500));
    }

    #[test]
    fn test_default_thresholds_are_ordered() {
        let counts: Vec<u32> = ThemeConfig::default()
            .thresholds
            .iter()
            .map(|r| r.count)
            .collect();
        assert_eq!(counts, vec![3, 5, 7]);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "theme": { "wave_duration_ms": 800 }, "contact": { "endpoint": "/form" } }"#,
        )
        .unwrap();
        assert_eq!(config.theme.wave_duration_ms, 800);
        assert_eq!(config.theme.rolling_window_ms, DEFAULT_ROLLING_WINDOW_MS);
        assert_eq!(config.contact.endpoint, "/form");
        assert_eq!(config.contact.form_name, "contact");
    }

    #[test]
    fn test_thresholds_parse_by_event_name() {
        let config = SiteConfig::from_json(
            r#"{ "theme": { "thresholds": [ { "count": 2, "egg": "lighthouse" } ] } }"#,
        )
        .unwrap();
        assert_eq!(
            config.theme.thresholds,
            vec![ThresholdRule {
                count: 2,
                egg: EasterEgg::Lighthouse
            }]
        );
    }

    #[test]
    fn test_rejects_zero_wave_duration() {
        let err = SiteConfig::from_json(r#"{ "theme": { "wave_duration_ms": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let config = SiteConfig {
            theme: ThemeConfig::default().with_thresholds(vec![
                ThresholdRule {
                    count: 5,
                    egg: EasterEgg::MatrixRain,
                },
                ThresholdRule {
                    count: 3,
                    egg: EasterEgg::Sparkle,
                },
            ]),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SiteConfig::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse site config"));
    }

    #[test]
    fn test_builder() {
        let theme = ThemeConfig::default()
            .with_wave_duration(Duration::from_millis(900))
            .with_rolling_window(Duration::from_secs(3));
        assert_eq!(theme.wave_duration_ms, 900);
        assert_eq!(theme.rolling_window_ms, 3000);
    }
}
