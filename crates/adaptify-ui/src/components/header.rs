//! Site header with navigation and the toggles.

use adaptify_core::Route;
use leptos::prelude::*;
use leptos_router::components::A;

use super::{LanguageToggle, ThemeToggle, use_contact};

/// In-page anchors on the landing page.
const SECTIONS: [(&str, &str); 3] = [
    ("/#problem", "Problem"),
    ("/#leistungen", "Leistungen"),
    ("/#technologie", "Technologie"),
];

/// Sticky header.
#[component]
pub fn Header() -> impl IntoView {
    let contact = use_contact();
    let menu_open = RwSignal::new(false);

    let links = move || {
        SECTIONS
            .into_iter()
            .map(|(href, label)| {
                view! {
                    <a href=href class="nav-link" on:click=move |_| menu_open.set(false)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <A href=Route::Landing.path() attr:class="logo">
                    <span class="logo-mark" aria-hidden="true">"A"</span>
                    <span class="logo-text">"Adaptify"</span>
                </A>

                <nav class="header-nav" aria-label="Hauptnavigation">
                    {links}
                    <A href=Route::UeberUns.path() attr:class="nav-link">"Über uns"</A>
                </nav>

                <div class="header-actions">
                    <LanguageToggle/>
                    <ThemeToggle/>
                    <button class="btn btn-primary header-cta" on:click=move |_| contact.set(true)>
                        "Gespräch buchen"
                    </button>
                    <button
                        class="menu-button"
                        class:is-open=move || menu_open.get()
                        aria-label="Menü öffnen"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            <nav class="mobile-menu" class:is-open=move || menu_open.get() aria-label="Mobile Navigation">
                {links}
                <button
                    class="btn btn-primary btn-block"
                    on:click=move |_| {
                        contact.set(true);
                        menu_open.set(false);
                    }
                >
                    "Gespräch buchen"
                </button>
            </nav>
        </header>
    }
}

/// Footer with the legal links.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>"© 2025 Adaptify. Alle Rechte vorbehalten."</p>
                <nav class="footer-nav" aria-label="Rechtliches">
                    {Route::ALL
                        .into_iter()
                        .filter(|route| route.is_legal())
                        .map(|route| {
                            let label = route.title().split(" | ").next().unwrap_or_default();
                            view! { <A href=route.path()>{label}</A> }
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
