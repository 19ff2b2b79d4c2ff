//! UI components.

mod contact_form;
mod cookie_banner;
mod easter_egg_overlay;
mod header;
mod language_toggle;
mod theme_toggle;
mod theme_wave;

pub use contact_form::{ContactModal, validation_message};
pub use cookie_banner::CookieBanner;
pub use easter_egg_overlay::EasterEggOverlay;
pub use header::{Footer, Header};
pub use language_toggle::{
    BrowserLanguage, LanguageContext, LanguageProvider, LanguageToggle, use_language,
};
pub use theme_toggle::ThemeToggle;
pub use theme_wave::ThemeWave;

use leptos::prelude::*;

/// Whether the contact modal is open. Provided by the app shell.
#[derive(Clone, Copy)]
pub struct ContactRequest(pub RwSignal<bool>);

/// Get the contact modal switch.
///
/// # Panics
///
/// Panics if the app shell did not provide it.
#[must_use]
pub fn use_contact() -> RwSignal<bool> {
    expect_context::<ContactRequest>().0
}
