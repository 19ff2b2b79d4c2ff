//! Über uns.

use leptos::prelude::*;

use crate::components::use_contact;

const VALUES: [(&str, &str); 4] = [
    (
        "Alles aus einer Hand",
        "Webseite, App, Automatisierung und KI. Ein Ansprechpartner statt fünf Agenturen.",
    ),
    (
        "Schnell geliefert",
        "KI-gestützte Entwicklung bringt euch in Wochen dorthin, wo andere Monate brauchen.",
    ),
    (
        "Mittelstand im Blick",
        "Wir kennen die Abläufe kleiner und mittlerer Unternehmen und bauen, was dort wirklich hilft.",
    ),
    (
        "Langfristig an eurer Seite",
        "Nach dem Launch bleiben wir dran: Updates, Optimierung, Support.",
    ),
];

/// About page.
#[component]
pub fn AboutPage() -> impl IntoView {
    let contact = use_contact();

    view! {
        <main id="main-content" class="about">
            <section class="hero hero-compact">
                <span class="eyebrow">"Über uns"</span>
                <h1>"Wir machen den Mittelstand digital"</h1>
                <p class="hero-lead">
                    "Adaptify verbindet Design, Entwicklung und Automatisierung zu Lösungen, die im Alltag funktionieren."
                </p>
            </section>

            <section class="section">
                <h2>"Wofür wir stehen"</h2>
                <div class="grid grid-2">
                    {VALUES
                        .into_iter()
                        .map(|(title, desc)| {
                            view! {
                                <article class="card">
                                    <h3>{title}</h3>
                                    <p>{desc}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section cta">
                <h2>"Lernen wir uns kennen"</h2>
                <button class="btn btn-primary btn-large" on:click=move |_| contact.set(true)>
                    "Gespräch buchen"
                </button>
            </section>
        </main>
    }
}
