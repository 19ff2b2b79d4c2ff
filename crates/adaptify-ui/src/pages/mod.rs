//! Pages, one per route.

mod about;
mod landing;
mod legal;

pub use about::AboutPage;
pub use landing::LandingPage;
pub use legal::{AgbPage, DatenschutzPage, ImpressumPage};

use adaptify_core::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// Shown for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main id="main-content" class="not-found">
            <h1>"404"</h1>
            <p>"Diese Seite gibt es leider nicht."</p>
            <A href=Route::Landing.path()>"Zur Startseite"</A>
        </main>
    }
}
