//! Impressum, Datenschutz and AGB.

use adaptify_core::Route;
use leptos::prelude::*;
use leptos_router::components::A;

struct Section {
    heading: &'static str,
    paragraphs: &'static [&'static str],
}

const IMPRESSUM: &[Section] = &[
    Section {
        heading: "Angaben gemäß § 5 TMG",
        paragraphs: &["Adaptify Labs", "Anschrift auf Anfrage per E-Mail."],
    },
    Section {
        heading: "Kontakt",
        paragraphs: &["E-Mail: kontakt@adaptify.de"],
    },
    Section {
        heading: "Berufsbezeichnung",
        paragraphs: &["IT-Dienstleister / Digitalisierungsberater, verliehen in Deutschland."],
    },
    Section {
        heading: "EU-Streitschlichtung",
        paragraphs: &[
            "Die Europäische Kommission stellt eine Plattform zur Online-Streitbeilegung (OS) bereit: https://ec.europa.eu/consumers/odr",
            "Unsere E-Mail-Adresse finden Sie oben im Impressum.",
        ],
    },
    Section {
        heading: "Verbraucherstreitbeilegung/Universalschlichtungsstelle",
        paragraphs: &[
            "Wir sind nicht bereit oder verpflichtet, an Streitbeilegungsverfahren vor einer Verbraucherschlichtungsstelle teilzunehmen.",
        ],
    },
    Section {
        heading: "Haftung für Inhalte",
        paragraphs: &[
            "Als Diensteanbieter sind wir gemäß § 7 Abs. 1 TMG für eigene Inhalte auf diesen Seiten nach den allgemeinen Gesetzen verantwortlich. Nach §§ 8 bis 10 TMG sind wir jedoch nicht verpflichtet, übermittelte oder gespeicherte fremde Informationen zu überwachen.",
            "Bei Bekanntwerden von entsprechenden Rechtsverletzungen werden wir diese Inhalte umgehend entfernen.",
        ],
    },
    Section {
        heading: "Haftung für Links",
        paragraphs: &[
            "Unser Angebot enthält Links zu externen Websites Dritter, auf deren Inhalte wir keinen Einfluss haben. Für die Inhalte der verlinkten Seiten ist stets der jeweilige Anbieter verantwortlich.",
        ],
    },
    Section {
        heading: "Urheberrecht",
        paragraphs: &[
            "Die durch die Seitenbetreiber erstellten Inhalte und Werke auf diesen Seiten unterliegen dem deutschen Urheberrecht.",
        ],
    },
];

const DATENSCHUTZ: &[Section] = &[
    Section {
        heading: "1. Datenschutz auf einen Blick",
        paragraphs: &[
            "Die folgenden Hinweise geben einen Überblick darüber, was mit Ihren personenbezogenen Daten passiert, wenn Sie diese Website besuchen.",
        ],
    },
    Section {
        heading: "2. Lokale Speicherung",
        paragraphs: &[
            "Wir speichern Ihre Auswahl für Farbschema, Sprache und Cookie-Einwilligung ausschließlich lokal in Ihrem Browser. Diese Daten verlassen Ihr Gerät nicht.",
        ],
    },
    Section {
        heading: "3. Kontaktformular",
        paragraphs: &[
            "Wenn Sie uns per Kontaktformular Anfragen zukommen lassen, werden Ihre Angaben aus dem Formular inklusive der von Ihnen dort angegebenen Kontaktdaten zwecks Bearbeitung der Anfrage bei uns gespeichert.",
            "Die Verarbeitung erfolgt auf Grundlage Ihrer Einwilligung (Art. 6 Abs. 1 lit. a DSGVO).",
        ],
    },
    Section {
        heading: "4. Ihre Rechte",
        paragraphs: &[
            "Sie haben jederzeit das Recht auf unentgeltliche Auskunft über Herkunft, Empfänger und Zweck Ihrer gespeicherten personenbezogenen Daten sowie ein Recht auf Berichtigung oder Löschung dieser Daten.",
        ],
    },
];

const AGB: &[Section] = &[
    Section {
        heading: "§ 1 Geltungsbereich",
        paragraphs: &[
            "Diese Allgemeinen Geschäftsbedingungen gelten für alle Verträge zwischen Adaptify Labs und ihren Auftraggebern über Leistungen der Digitalisierung, Webentwicklung und Automatisierung.",
        ],
    },
    Section {
        heading: "§ 2 Vertragsschluss",
        paragraphs: &[
            "Ein Vertrag kommt durch die schriftliche Auftragsbestätigung oder durch den Beginn der Leistungserbringung zustande.",
        ],
    },
    Section {
        heading: "§ 3 Leistungsumfang",
        paragraphs: &[
            "Der Umfang der Leistungen ergibt sich aus dem jeweiligen Angebot. Änderungen bedürfen der Textform.",
        ],
    },
    Section {
        heading: "§ 4 Vergütung und Zahlung",
        paragraphs: &[
            "Rechnungen sind innerhalb von 14 Tagen nach Zugang ohne Abzug zahlbar, sofern nichts anderes vereinbart ist.",
        ],
    },
    Section {
        heading: "§ 5 Schlussbestimmungen",
        paragraphs: &[
            "Es gilt das Recht der Bundesrepublik Deutschland. Sollten einzelne Bestimmungen unwirksam sein, bleibt die Wirksamkeit der übrigen unberührt.",
        ],
    },
];

#[component]
fn LegalLayout(title: &'static str, sections: &'static [Section]) -> impl IntoView {
    view! {
        <main id="main-content" class="legal">
            <A href=Route::Landing.path() attr:class="back-link">"← Zurück zur Startseite"</A>
            <h1>{title}</h1>
            {sections
                .iter()
                .map(|section| {
                    view! {
                        <section class="legal-section">
                            <h2>{section.heading}</h2>
                            {section
                                .paragraphs
                                .iter()
                                .map(|text| view! { <p>{*text}</p> })
                                .collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </main>
    }
}

/// Legal imprint.
#[component]
pub fn ImpressumPage() -> impl IntoView {
    view! { <LegalLayout title="Impressum" sections=IMPRESSUM/> }
}

/// Privacy policy.
#[component]
pub fn DatenschutzPage() -> impl IntoView {
    view! { <LegalLayout title="Datenschutzerklärung" sections=DATENSCHUTZ/> }
}

/// Terms and conditions.
#[component]
pub fn AgbPage() -> impl IntoView {
    view! { <LegalLayout title="Allgemeine Geschäftsbedingungen" sections=AGB/> }
}
