//! `Adaptify` Core Library
//!
//! This crate provides the platform-independent core of the Adaptify site:
//! - Appearance mode resolution and the transition state machine
//! - Rapid-toggle counting and named easter-egg events
//! - Transition overlay geometry
//! - Language, cookie consent and contact form state
//! - Site configuration and preference persistence
//!
//! Nothing here touches the browser. Time comes from an injected [`Clock`]
//! and persistence from a [`PreferenceStore`], so every state machine can be
//! driven deterministically from tests.
//!
//! # Error Handling
//!
//! Fallible primitives return [`Result`]. Operations the visitor should never
//! see fail (preference reads and writes) log and swallow their errors. See
//! the [`error`] module for details.
//!
//! ```rust,ignore
//! use adaptify_core::{MemoryStore, ManualClock, SiteConfig, ThemeController};
//!
//! let config = SiteConfig::from_json("{}")?;
//! let theme = ThemeController::init(MemoryStore::new(), ManualClock::default(), config.theme, None);
//! ```

pub mod appearance;
pub mod clock;
pub mod config;
pub mod consent;
pub mod contact;
pub mod controller;
pub mod counter;
pub mod easter_egg;
pub mod error;
pub mod geometry;
pub mod language;
pub mod preferences;
pub mod route;
pub mod wave;

pub use appearance::{
    AppearanceMachine, AppearanceMode, ModeSource, ToggleOutcome, TransitionState,
    resolve_initial_mode,
};
pub use clock::{Clock, ManualClock, Timestamp};
pub use config::{
    ConsentConfig, ContactConfig, DEFAULT_ORIGIN_INSET_PX, DEFAULT_ROLLING_WINDOW_MS,
    DEFAULT_WAVE_DURATION_MS, DEFAULT_WAVE_GRACE_MS, LanguageConfig, SiteConfig, ThemeConfig,
    ThresholdRule, WaveConfig,
};
pub use consent::{Consent, ConsentDecision};
pub use contact::{
    ContactForm, FORM_NAME_FIELD, HONEYPOT_FIELD, SubmitAction, Submission, SubmissionState,
    ValidContact,
};
pub use controller::{PollReport, ThemeController, ToggleReport};
pub use counter::{InteractionCounter, ThresholdTable};
pub use easter_egg::{ActiveEgg, EasterEgg, EggSlot};
pub use error::{ContactFormError, Error, Result};
pub use geometry::{Origin, Rect, Viewport};
pub use language::{
    CONFETTI_EMOJI, CONFETTI_MAX_DELAY, ConfettiPiece, Language, LanguageClick, LanguageSwitcher,
    confetti, resolve_language,
};
pub use preferences::{
    CONSENT_KEY, JsonFileStore, LANGUAGE_KEY, MemoryStore, PreferenceStore, Preferences,
    THEME_KEY,
};
pub use route::Route;
pub use wave::{Palette, Particle, WavePlan, cover_radius};
