//! Main application component.

use adaptify_core::{Route, SiteConfig};
use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route as RouteView, Router, Routes},
    hooks::use_location,
};
use tracing::{info, warn};

use crate::browser;
use crate::components::{
    ContactModal, ContactRequest, CookieBanner, EasterEggOverlay, Footer, Header, LanguageProvider,
    ThemeWave,
};
use crate::context::ThemeProvider;
use crate::pages::{AboutPage, AgbPage, DatenschutzPage, ImpressumPage, LandingPage, NotFound};
use crate::theme::generate_css_variables;

/// Parse the bundled site configuration, falling back to defaults.
#[must_use]
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(include_str!("../site.json")) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default site config: {}", e);
            SiteConfig::default()
        }
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let site = load_site_config();
    let css_vars = generate_css_variables();
    info!("Starting Adaptify site");

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <ThemeProvider site=site.clone()>
            <LanguageProvider site=site>
                <Router>
                    <Shell/>
                </Router>
            </LanguageProvider>
        </ThemeProvider>
    }
}

/// Everything inside the router: chrome, pages and overlays.
#[component]
fn Shell() -> impl IntoView {
    let contact = RwSignal::new(false);
    provide_context(ContactRequest(contact));

    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        let title = Route::from_path(&path).map_or("Seite nicht gefunden | Adaptify", Route::title);
        browser::set_document_title(title);
    });

    view! {
        <Header/>
        <Routes fallback=NotFound>
            <RouteView path=StaticSegment("") view=LandingPage/>
            <RouteView path=StaticSegment("impressum") view=ImpressumPage/>
            <RouteView path=StaticSegment("datenschutz") view=DatenschutzPage/>
            <RouteView path=StaticSegment("agb") view=AgbPage/>
            <RouteView path=StaticSegment("ueber-uns") view=AboutPage/>
        </Routes>
        <Footer/>
        <ContactModal open=contact/>
        <CookieBanner/>
        <ThemeWave/>
        <EasterEggOverlay/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_site_config_parses() {
        assert!(SiteConfig::from_json(include_str!("../site.json")).is_ok());
    }

    #[test]
    fn test_page_applies_stored_mode_before_load() {
        use adaptify_core::{AppearanceMode, THEME_KEY};

        let html = include_str!("../index.html");
        let script = html.find("<script>").expect("inline script");
        let trunk = html.find("data-trunk").expect("trunk link");
        assert!(script < trunk, "mode must be applied before the bundle loads");
        assert!(html.contains(&format!("localStorage.getItem('{THEME_KEY}')")));
        for mode in [AppearanceMode::Dark, AppearanceMode::Light] {
            assert!(html.contains(mode.theme_color()));
        }
    }

    #[test]
    fn test_route_segments_match_core_paths() {
        for (segment, route) in [
            ("", Route::Landing),
            ("impressum", Route::Impressum),
            ("datenschutz", Route::Datenschutz),
            ("agb", Route::Agb),
            ("ueber-uns", Route::UeberUns),
        ] {
            assert_eq!(Route::from_path(&format!("/{segment}")), Some(route));
        }
    }
}
