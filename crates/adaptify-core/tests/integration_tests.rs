//! Integration tests for `Adaptify` core workflows.
//!
//! These tests drive the theme controller end to end:
//! - Mode resolution and persistence across simulated restarts
//! - Transition timing against a manual clock
//! - Rapid-toggle thresholds and the easter-egg slot
//! - Overlay planning for the transition a toggle starts
//!
//! Restart tests use a JSON file in a temporary directory as the store.

use std::time::Duration;

use adaptify_core::{
    // Appearance
    AppearanceMode,
    Clock,
    // Easter eggs
    EasterEgg,
    // Preferences
    JsonFileStore,
    // Language
    LanguageClick,
    LanguageConfig,
    LanguageSwitcher,
    ManualClock,
    MemoryStore,
    ModeSource,
    Origin,
    PreferenceStore,
    // Config
    SiteConfig,
    THEME_KEY,
    ThemeConfig,
    ThemeController,
    ThresholdRule,
    Timestamp,
    ToggleOutcome,
    Viewport,
    // Renderer
    WavePlan,
};
use tempfile::TempDir;

// =============================================================================
// Test Fixtures and Utilities
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("adaptify_core=debug")
        .with_test_writer()
        .try_init();
}

/// Controller over an in-memory store with a shared manual clock.
struct TestFixture {
    clock: ManualClock,
    theme: ThemeController<MemoryStore, ManualClock>,
}

impl TestFixture {
    fn new(store: MemoryStore, prefers_dark: Option<bool>) -> Self {
        init_tracing();
        let clock = ManualClock::default();
        let theme =
            ThemeController::init(store, clock.clone(), ThemeConfig::default(), prefers_dark);
        Self { clock, theme }
    }

    fn wave(&self) -> Duration {
        self.theme.config().wave_duration()
    }

    /// Toggle, wait out the window, and close it.
    fn toggle_and_settle(&mut self) {
        self.theme.toggle(None, Viewport::default());
        self.clock.advance(self.wave());
        self.theme.poll();
    }

    fn stored_mode(&self) -> Option<String> {
        self.theme
            .preferences()
            .store()
            .try_read(THEME_KEY)
            .expect("memory store reads")
    }
}

// =============================================================================
// Startup Resolution
// =============================================================================

#[test]
fn test_startup_prefers_stored_value() {
    let fixture = TestFixture::new(MemoryStore::with_entries([(THEME_KEY, "light")]), Some(true));
    assert_eq!(fixture.theme.mode(), AppearanceMode::Light);
    assert_eq!(fixture.theme.source(), ModeSource::Stored);
}

#[test]
fn test_startup_falls_back_to_system_signal() {
    let dark = TestFixture::new(MemoryStore::new(), Some(true));
    assert_eq!(dark.theme.mode(), AppearanceMode::Dark);

    let light = TestFixture::new(MemoryStore::new(), Some(false));
    assert_eq!(light.theme.mode(), AppearanceMode::Light);
}

#[test]
fn test_startup_without_signal_is_dark() {
    let fixture = TestFixture::new(MemoryStore::new(), None);
    assert_eq!(fixture.theme.mode(), AppearanceMode::Dark);
    assert_eq!(fixture.theme.source(), ModeSource::Default);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_mode_survives_restart() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("prefs").join("storage.json");

    let clock = ManualClock::default();
    let mut first = ThemeController::init(
        JsonFileStore::new(&path),
        clock.clone(),
        ThemeConfig::default(),
        Some(true),
    );
    assert_eq!(first.mode(), AppearanceMode::Dark);
    first.toggle(None, Viewport::default());
    assert_eq!(first.mode(), AppearanceMode::Light);
    first.teardown();
    drop(first);

    // The environment now says dark, but the stored choice wins.
    let second = ThemeController::init(
        JsonFileStore::new(&path),
        ManualClock::default(),
        ThemeConfig::default(),
        Some(true),
    );
    assert_eq!(second.mode(), AppearanceMode::Light);
    assert_eq!(second.source(), ModeSource::Stored);
}

#[test]
fn test_corrupt_store_falls_back() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{ not json").expect("write fixture");

    let mut theme = ThemeController::init(
        JsonFileStore::new(&path),
        ManualClock::default(),
        ThemeConfig::default(),
        Some(false),
    );
    assert_eq!(theme.mode(), AppearanceMode::Light);

    // Writes keep failing on the unreadable file; the in-memory flip still happens.
    assert!(theme.toggle(None, Viewport::default()).outcome.is_started());
    assert_eq!(theme.mode(), AppearanceMode::Dark);
}

// =============================================================================
// Transition Timing
// =============================================================================

#[test]
fn test_parity_over_spaced_toggles() {
    let mut fixture = TestFixture::new(MemoryStore::new(), Some(false));
    let start = fixture.theme.mode();

    for n in 1..=9 {
        // Space toggles beyond both the transition window and the counter window.
        fixture.toggle_and_settle();
        fixture.clock.advance(Duration::from_secs(3));
        let expected = if n % 2 == 0 { start } else { start.toggled() };
        assert_eq!(fixture.theme.mode(), expected, "after {n} toggles");
        assert_eq!(fixture.stored_mode().as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn test_window_opens_and_closes_on_time() {
    let mut fixture = TestFixture::new(MemoryStore::new(), Some(false));
    fixture.clock.set(Timestamp::from_millis(5_000));

    let report = fixture.theme.toggle(None, Viewport::default());
    assert!(report.outcome.is_started());
    assert!(fixture.theme.transition().is_animating);
    assert_eq!(fixture.theme.mode(), AppearanceMode::Dark);
    assert_eq!(fixture.stored_mode().as_deref(), Some("dark"));

    fixture.clock.advance(fixture.wave() - Duration::from_millis(1));
    assert!(!fixture.theme.poll().transition_finished);
    assert!(fixture.theme.transition().is_animating);

    fixture.clock.advance(Duration::from_millis(1));
    assert!(fixture.theme.poll().transition_finished);
    assert!(!fixture.theme.transition().is_animating);
}

#[test]
fn test_reentrant_toggle_ignored() {
    let mut fixture = TestFixture::new(MemoryStore::new(), Some(false));

    let first = fixture.theme.toggle(Some(Origin::new(10.0, 10.0)), Viewport::default());
    let deadline = fixture.theme.next_deadline();
    let second = fixture.theme.toggle(Some(Origin::new(500.0, 500.0)), Viewport::default());

    assert!(first.outcome.is_started());
    assert!(matches!(second.outcome, ToggleOutcome::Ignored { .. }));
    assert_eq!(second.count, 2);
    assert_eq!(fixture.theme.next_deadline(), deadline);
    assert_eq!(fixture.theme.mode(), AppearanceMode::Dark);
    assert_eq!(fixture.theme.transition().origin, Origin::new(10.0, 10.0));
}

#[test]
fn test_light_to_dark_scenario() {
    let mut fixture = TestFixture::new(MemoryStore::new(), Some(false));
    assert_eq!(fixture.theme.mode(), AppearanceMode::Light);

    fixture
        .theme
        .toggle(Some(Origin::new(100.0, 50.0)), Viewport::default());
    let transition = *fixture.theme.transition();
    assert_eq!(fixture.theme.mode(), AppearanceMode::Dark);
    assert!(transition.is_animating);
    assert_eq!(transition.origin, Origin::new(100.0, 50.0));
    assert_eq!(transition.previous_mode, AppearanceMode::Light);
    assert_eq!(transition.target_mode, AppearanceMode::Dark);

    fixture.clock.advance(fixture.wave());
    fixture.theme.poll();
    assert!(!fixture.theme.transition().is_animating);
    assert_eq!(fixture.stored_mode().as_deref(), Some("dark"));
}

// =============================================================================
// Rapid Toggles
// =============================================================================

#[test]
fn test_three_rapid_toggles_fire_once() {
    let mut fixture = TestFixture::new(MemoryStore::new(), None);
    let mut fired = Vec::new();

    for _ in 0..4 {
        let report = fixture.theme.toggle(None, Viewport::default());
        fired.extend(report.fired.map(|a| a.egg));
        fixture.clock.advance(Duration::from_millis(300));
    }
    assert_eq!(fired, vec![EasterEgg::Sparkle]);
}

#[test]
fn test_gap_before_third_toggle_prevents_event() {
    let mut fixture = TestFixture::new(MemoryStore::new(), None);
    fixture.theme.toggle(None, Viewport::default());
    fixture.clock.advance(Duration::from_millis(1200));
    fixture.theme.toggle(None, Viewport::default());

    fixture.clock.advance(Duration::from_millis(2600));
    let third = fixture.theme.toggle(None, Viewport::default());
    assert_eq!(third.count, 1);
    assert!(third.fired.is_none());
}

#[test]
fn test_all_thresholds_in_one_burst() {
    let mut fixture = TestFixture::new(MemoryStore::new(), None);
    let mut fired = Vec::new();

    for _ in 0..7 {
        let report = fixture.theme.toggle(None, Viewport::default());
        fired.extend(report.fired.map(|a| a.egg));
        // Long enough for each event to clear before the next threshold.
        fixture.clock.advance(Duration::from_millis(2_400));
        fixture.theme.poll();
    }
    assert_eq!(
        fired,
        vec![EasterEgg::Sparkle, EasterEgg::MatrixRain, EasterEgg::Lighthouse]
    );
    assert!(fixture.theme.bonus_unlocked());
}

#[test]
fn test_overlapping_events_are_dropped() {
    let mut fixture = TestFixture::new(MemoryStore::new(), None);
    let mut fired = Vec::new();

    // 700 ms apart: matrix rain at five is still running at seven.
    for _ in 0..7 {
        let report = fixture.theme.toggle(None, Viewport::default());
        fired.extend(report.fired.map(|a| a.egg));
        fixture.clock.advance(Duration::from_millis(700));
        fixture.theme.poll();
    }
    assert_eq!(fired, vec![EasterEgg::Sparkle, EasterEgg::MatrixRain]);
    assert!(!fixture.theme.bonus_unlocked());
}

#[test]
fn test_language_confetti_shares_the_event_slot() {
    init_tracing();
    let clock = ManualClock::default();
    let config = ThemeConfig::default().with_thresholds(vec![ThresholdRule {
        count: 1,
        egg: EasterEgg::Lighthouse,
    }]);
    let mut theme = ThemeController::init(MemoryStore::new(), clock.clone(), config, None);
    let mut language = LanguageSwitcher::init(MemoryStore::new(), LanguageConfig::default(), None);

    theme.toggle(None, Viewport::default());
    assert_eq!(
        theme.active_egg().map(|a| a.egg),
        Some(EasterEgg::Lighthouse)
    );

    assert_eq!(language.click(clock.now(), true), LanguageClick::Confetti);
    assert!(theme.fire(EasterEgg::Confetti).is_none());
    assert_eq!(
        theme.active_egg().map(|a| a.egg),
        Some(EasterEgg::Lighthouse),
        "only one named event may be on screen"
    );
}

// =============================================================================
// Overlay Planning
// =============================================================================

#[test]
fn test_wave_plan_matches_transition_timing() {
    let config = SiteConfig::default();
    let mut fixture = TestFixture::new(MemoryStore::new(), Some(true));
    fixture.clock.set(Timestamp::from_millis(250));
    fixture
        .theme
        .toggle(Some(Origin::new(1240.0, 40.0)), Viewport::default());

    let plan = WavePlan::new(
        fixture.theme.transition(),
        Viewport::default(),
        &config.wave,
        &config.theme,
        false,
    )
    .expect("wide viewport renders");
    assert_eq!(plan.target_mode, AppearanceMode::Light);
    assert_eq!(plan.started_at, Timestamp::from_millis(250));
    assert_eq!(
        plan.removal_deadline,
        Timestamp::from_millis(250) + config.theme.wave_duration() + config.theme.wave_grace()
    );

    fixture.clock.advance(fixture.wave());
    fixture.theme.poll();
    assert!(
        WavePlan::new(
            fixture.theme.transition(),
            Viewport::default(),
            &config.wave,
            &config.theme,
            false
        )
        .is_none()
    );
}
