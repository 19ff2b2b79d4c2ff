//! Site language and the language toggle.
//!
//! German is the primary language, English the fallback. The toggle switches
//! on a single click; a burst of clicks (or an alt-click) requests the
//! confetti event instead. Confetti shares the theme controller's egg slot,
//! so the caller fires it through [`ThemeController::fire`].
//!
//! [`ThemeController::fire`]: crate::controller::ThemeController::fire

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::Timestamp;
use crate::config::LanguageConfig;
use crate::error::Error;
use crate::preferences::{LANGUAGE_KEY, PreferenceStore, Preferences};

/// Emoji used for confetti pieces.
pub const CONFETTI_EMOJI: [&str; 7] = ["🇪🇺", "🇺🇸", "⛵", "🌍", "✨", "🚀", "💻"];

/// Longest launch delay of a confetti piece.
pub const CONFETTI_MAX_DELAY: Duration = Duration::from_millis(500);

/// Supported site languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German.
    #[default]
    De,
    /// English.
    En,
}

impl Language {
    /// Two-letter code, also the stored value and the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    /// Label shown on the toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::De => "DE",
            Self::En => "EN",
        }
    }

    /// The other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }

    /// Parse a BCP 47 tag such as `en-US` by its primary subtag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().get(..2)?;
        primary.to_ascii_lowercase().parse().ok()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "de" => Ok(Self::De),
            "en" => Ok(Self::En),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

/// Resolve the startup language: stored value, then the browser language,
/// then German.
pub fn resolve_language(stored: Option<&str>, navigator: Option<&str>) -> Language {
    stored
        .and_then(|s| s.parse().ok())
        .or_else(|| navigator.and_then(Language::from_tag))
        .unwrap_or_default()
}

/// One falling confetti piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiPiece {
    /// Glyph to draw.
    pub emoji: &'static str,
    /// Launch delay.
    pub delay: Duration,
    /// Horizontal position as a percentage of the viewport width.
    pub x_percent: f64,
}

/// Lay out `count` confetti pieces using `random`, a source of values in
/// `[0, 1)`.
pub fn confetti<R>(count: usize, mut random: R) -> Vec<ConfettiPiece>
where
    R: FnMut() -> f64,
{
    (0..count)
        .map(|_| {
            let pick = (random().clamp(0.0, 1.0) * CONFETTI_EMOJI.len() as f64) as usize;
            let emoji = CONFETTI_EMOJI[pick.min(CONFETTI_EMOJI.len() - 1)];
            let delay_ms = random().clamp(0.0, 1.0) * CONFETTI_MAX_DELAY.as_millis() as f64;
            ConfettiPiece {
                emoji,
                delay: Duration::from_millis(delay_ms as u64),
                x_percent: random().clamp(0.0, 1.0) * 100.0,
            }
        })
        .collect()
}

/// What a click on the language toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageClick {
    /// The language switched and was persisted.
    Switch(Language),
    /// The confetti event was requested; the language did not change.
    Confetti,
}

/// State behind the language toggle.
#[derive(Debug)]
pub struct LanguageSwitcher<S> {
    prefs: Preferences<S>,
    current: Language,
    clicks: u32,
    last_click: Option<Timestamp>,
    config: LanguageConfig,
}

impl<S: PreferenceStore> LanguageSwitcher<S> {
    /// Resolve the startup language against `store` and the browser's
    /// reported language.
    pub fn init(store: S, config: LanguageConfig, navigator: Option<&str>) -> Self {
        let prefs = Preferences::new(store);
        let stored = prefs.read(LANGUAGE_KEY);
        let current = resolve_language(stored.as_deref(), navigator);
        info!(language = %current, "Resolved site language");
        Self {
            prefs,
            current,
            clicks: 0,
            last_click: None,
            config,
        }
    }

    /// Active language.
    pub const fn current(&self) -> Language {
        self.current
    }

    /// Configuration in use.
    pub const fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// Handle a click on the toggle.
    pub fn click(&mut self, now: Timestamp, alt_key: bool) -> LanguageClick {
        if alt_key {
            debug!("Alt-click on language toggle");
            return LanguageClick::Confetti;
        }

        let lapsed = self
            .last_click
            .is_some_and(|last| now.saturating_since(last) > self.config.click_window());
        if lapsed {
            self.clicks = 0;
        }
        self.clicks += 1;
        self.last_click = Some(now);

        if self.clicks >= self.config.confetti_clicks {
            self.clicks = 0;
            self.last_click = None;
            return LanguageClick::Confetti;
        }

        self.set(self.current.toggled());
        LanguageClick::Switch(self.current)
    }

    /// Switch to `language` and persist it.
    pub fn set(&mut self, language: Language) {
        self.current = language;
        self.prefs.write(LANGUAGE_KEY, language.code());
        info!(language = %language, "Language switched");
    }

    /// Drop pending click state.
    pub fn teardown(&mut self) {
        self.clicks = 0;
        self.last_click = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    fn switcher(store: MemoryStore) -> LanguageSwitcher<MemoryStore> {
        LanguageSwitcher::init(store, LanguageConfig::default(), None)
    }

    #[test]
    fn test_from_tag_uses_primary_subtag() {
        assert_eq!(Language::from_tag("en-US"), Some(Language::En));
        assert_eq!(Language::from_tag("DE-at"), Some(Language::De));
        assert_eq!(Language::from_tag("fr-FR"), None);
        assert_eq!(Language::from_tag("e"), None);
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(resolve_language(Some("en"), Some("de-DE")), Language::En);
        assert_eq!(resolve_language(None, Some("en-GB")), Language::En);
        assert_eq!(resolve_language(Some("xx"), Some("fr")), Language::De);
        assert_eq!(resolve_language(None, None), Language::De);
    }

    #[test]
    fn test_single_click_switches_and_persists() {
        let mut lang = switcher(MemoryStore::new());
        assert_eq!(lang.click(at(0), false), LanguageClick::Switch(Language::En));
        assert_eq!(lang.prefs.read(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_spaced_clicks_keep_switching() {
        let mut lang = switcher(MemoryStore::new());
        lang.click(at(0), false);
        lang.click(at(500), false);
        assert_eq!(lang.click(at(1000), false), LanguageClick::Switch(Language::En));
    }

    #[test]
    fn test_third_rapid_click_fires_confetti() {
        let mut lang = switcher(MemoryStore::new());
        lang.click(at(0), false);
        lang.click(at(200), false);
        assert_eq!(lang.click(at(400), false), LanguageClick::Confetti);
        // Two switches happened before the burst.
        assert_eq!(lang.current(), Language::De);
    }

    #[test]
    fn test_alt_click_fires_confetti_without_switching() {
        let mut lang = switcher(MemoryStore::with_entries([(LANGUAGE_KEY, "en")]));
        assert_eq!(lang.click(at(0), true), LanguageClick::Confetti);
        assert_eq!(lang.current(), Language::En);
        assert_eq!(lang.prefs.read(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_burst_resets_click_count() {
        let mut lang = switcher(MemoryStore::new());
        lang.click(at(0), false);
        lang.click(at(100), false);
        assert_eq!(lang.click(at(200), false), LanguageClick::Confetti);
        // The next click starts a fresh cycle.
        assert_eq!(lang.click(at(300), false), LanguageClick::Switch(Language::En));
    }

    #[test]
    fn test_confetti_layout() {
        let mut n = 0.0;
        let pieces = confetti(25, || {
            n = (n + 0.37) % 1.0;
            n
        });
        assert_eq!(pieces.len(), 25);
        for piece in &pieces {
            assert!(piece.delay <= CONFETTI_MAX_DELAY);
            assert!((0.0..=100.0).contains(&piece.x_percent));
            assert!(CONFETTI_EMOJI.contains(&piece.emoji));
        }
    }

    #[test]
    fn test_confetti_tolerates_out_of_range_random() {
        let pieces = confetti(3, || 1.0);
        assert!(pieces.iter().all(|p| p.emoji == "💻"));
    }
}
