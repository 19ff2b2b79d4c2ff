//! Landing page.

use leptos::prelude::*;

use crate::components::use_contact;

struct Card {
    title: &'static str,
    desc: &'static str,
}

const PAIN_POINTS: [Card; 3] = [
    Card {
        title: "Veraltete oder keine Webseite?",
        desc: "Eure Konkurrenz hat moderne Seiten & Apps. Ihr verliert Kunden, bevor sie euch überhaupt finden.",
    },
    Card {
        title: "Manuelle Prozesse überall?",
        desc: "Excel-Listen, Copy-Paste, E-Mail-Chaos. Jede Aufgabe dauert 3x so lang wie nötig.",
    },
    Card {
        title: "Keine Automatisierung?",
        desc: "Während andere KI nutzen, macht ihr alles von Hand. Ineffizienz kostet bares Geld.",
    },
];

const SERVICES: [Card; 6] = [
    Card {
        title: "Moderne Webseiten & Shops",
        desc: "Webflow, Shopify oder Custom. Schnell, schön und konvertierend.",
    },
    Card {
        title: "KI-gestützte Automatisierung",
        desc: "Workflows, die von selbst laufen. Mehr Zeit fürs Kerngeschäft, weniger Routinearbeit.",
    },
    Card {
        title: "Apps & Custom Software",
        desc: "Interne Tools, Kundenportale, individuelle Lösungen. Professionell entwickelt, schnell geliefert.",
    },
    Card {
        title: "Design & Branding",
        desc: "Logo, CI, Design-System. Alles, damit ihr professionell ausseht.",
    },
    Card {
        title: "Prozesse & Kollaboration",
        desc: "Jira, Confluence & Co. Strukturierte Abläufe für euer Team.",
    },
    Card {
        title: "Laufender Support",
        desc: "Wir bleiben dran. Updates, Optimierung, Ansprechpartner.",
    },
];

const STATS: [(&str, &str); 4] = [
    ("40%", "schnellere Prozesse"),
    ("5+", "Jahre Erfahrung"),
    ("2-4", "Wochen Setup"),
    ("100%", "maßgeschneidert"),
];

const TECHNOLOGIES: [(&str, &str, &str); 4] = [
    (
        "Atlassian Suite",
        "Prozesse & Kollaboration",
        "Jira, Confluence, Bitbucket. Wir digitalisieren eure Prozesse damit und arbeiten transparent mit euch zusammen.",
    ),
    (
        "Codium AI / Windsurf",
        "Entwicklung mit KI-Turbo",
        "Modernste KI-Tools beschleunigen unsere Entwicklung. Was sonst Monate braucht, liefern wir in Wochen.",
    ),
    (
        "Automation & AI Hub",
        "Intelligente Workflows",
        "Make, Zapier, n8n und eigene KI-Agents. Eure Prozesse laufen automatisiert.",
    ),
    (
        "Web & App Builder",
        "Schnelle Umsetzung",
        "Webflow, Shopify, React, Next.js. Performante Webseiten, Apps und Shops für eure Marke.",
    ),
];

fn cards(items: &'static [Card], class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|card| {
            view! {
                <article class=class>
                    <h3>{card.title}</h3>
                    <p>{card.desc}</p>
                </article>
            }
        })
        .collect_view()
}

/// The landing page.
#[component]
pub fn LandingPage() -> impl IntoView {
    let contact = use_contact();

    view! {
        <a href="#main-content" class="skip-link">"Zum Hauptinhalt springen"</a>
        <main id="main-content" class="landing">
            <section class="hero">
                <p class="hero-badge">"Digitalisierung aus einer Hand für ambitionierte Mittelständler"</p>
                <h1>
                    "Euer kompletter "
                    <span class="gradient-text">"Digitalisierungspartner"</span>
                    <br/>
                    <span class="hero-sub">"von der Webseite bis zur KI"</span>
                </h1>
                <p class="hero-lead">
                    "Keine halben Sachen. Wir bauen Webseiten, Apps, Automationen & KI-Workflows. Alles aus einer Hand."
                </p>
                <button class="btn btn-primary btn-large" on:click=move |_| contact.set(true)>
                    "Kostenloses Strategiegespräch"
                </button>
            </section>

            <section id="problem" class="section">
                <span class="eyebrow eyebrow-warn">"Das Problem"</span>
                <h2>"Kommt euch das bekannt vor?"</h2>
                <div class="grid grid-3">{cards(&PAIN_POINTS, "card card-pain")}</div>
            </section>

            <section id="leistungen" class="section">
                <span class="eyebrow">"Unsere Leistungen"</span>
                <h2>"Alles, was ihr für die Digitalisierung braucht"</h2>
                <div class="grid grid-3">{cards(&SERVICES, "card")}</div>
            </section>

            <section class="section stats">
                <div class="grid grid-4">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat">
                                    <div class="stat-value">{value}</div>
                                    <div class="stat-label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="technologie" class="section">
                <span class="eyebrow eyebrow-violet">"Technologie"</span>
                <h2>"Unser Tech-Stack"</h2>
                <div class="grid grid-2">
                    {TECHNOLOGIES
                        .into_iter()
                        .map(|(name, tagline, desc)| {
                            view! {
                                <article class="card card-tech">
                                    <h3>{name}</h3>
                                    <p class="card-tagline">{tagline}</p>
                                    <p>{desc}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section cta">
                <h2>"Bereit für den nächsten Schritt?"</h2>
                <p>"30 Minuten, die euer Business verändern können."</p>
                <button class="btn btn-primary btn-large" on:click=move |_| contact.set(true)>
                    "Jetzt Gespräch buchen"
                </button>
            </section>
        </main>
    }
}
