//! Contact modal posting to the site's form endpoint.

use adaptify_core::{
    Clock, ContactForm, ContactFormError, SubmitAction, Submission, SubmissionState,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::browser::{self, PerformanceClock};
use crate::context::use_theme;

/// German message for a rejected field.
#[must_use]
pub const fn validation_message(error: ContactFormError) -> &'static str {
    match error {
        ContactFormError::MissingName => "Bitte gib deinen Namen an.",
        ContactFormError::MissingEmail => "Bitte gib deine E-Mail-Adresse an.",
        ContactFormError::InvalidEmail => "Diese E-Mail-Adresse sieht nicht gültig aus.",
        ContactFormError::MissingMessage => "Bitte beschreibe kurz euer Anliegen.",
        ContactFormError::ConsentRequired => "Bitte stimme der Datenschutzerklärung zu.",
    }
}

/// Modal with the contact form. `open` controls visibility; the modal
/// closes itself a moment after a successful submission.
#[component]
pub fn ContactModal(open: RwSignal<bool>) -> impl IntoView {
    let config = use_theme()
        .with_site(|s| s.contact.clone())
        .unwrap_or_default();
    let fallback_email = StoredValue::new(config.fallback_email.clone());
    let submission = StoredValue::new(Submission::new(&config));
    let config = StoredValue::new(config);
    let timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let privacy = RwSignal::new(false);
    let honeypot = RwSignal::new(String::new());
    let (state, set_state) = signal(SubmissionState::Idle);
    let (error, set_error) = signal(None::<&'static str>);

    Effect::new(move |_| browser::set_scroll_locked(open.get()));

    let cancel_timer = move || {
        if let Some(Some(handle)) = timer.try_get_value() {
            handle.clear();
        }
        timer.try_set_value(None);
    };

    on_cleanup(move || {
        cancel_timer();
        browser::set_scroll_locked(false);
    });

    let sync = move || {
        if let Some(current) = submission.try_with_value(Submission::state) {
            set_state.try_set(current);
        }
    };

    let schedule_dismiss = move || {
        cancel_timer();
        let Some(delay) = submission
            .try_with_value(|s| s.dismiss_deadline())
            .flatten()
            .map(|deadline| deadline.saturating_since(PerformanceClock.now()))
        else {
            return;
        };
        let dismiss = move || {
            timer.try_set_value(None);
            let closed = submission
                .try_update_value(|s| s.poll(PerformanceClock.now()))
                .unwrap_or(false);
            if closed {
                sync();
                open.try_set(false);
            }
        };
        match set_timeout_with_handle(dismiss, delay) {
            Ok(handle) => {
                timer.try_set_value(Some(handle));
            }
            Err(e) => warn!("Failed to arm dismiss timer: {:?}", e),
        }
    };

    let clear_fields = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        message.set(String::new());
        privacy.set(false);
        honeypot.set(String::new());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
            privacy_consent: privacy.get_untracked(),
            honeypot: honeypot.get_untracked(),
        };
        let now = PerformanceClock.now();
        let Some(outcome) = submission.try_update_value(|s| s.begin(&form, now)) else {
            return;
        };

        match outcome {
            Err(e) => set_error.set(Some(validation_message(e))),
            Ok(SubmitAction::Busy) => {}
            Ok(SubmitAction::Discard) => {
                set_error.set(None);
                clear_fields();
                sync();
                schedule_dismiss();
            }
            Ok(SubmitAction::Send(valid)) => {
                set_error.set(None);
                sync();
                let Some((endpoint, form_name)) =
                    config.try_with_value(|c| (c.endpoint.clone(), c.form_name.clone()))
                else {
                    return;
                };
                spawn_local(async move {
                    let fields = valid.form_fields(&form_name);
                    let result = browser::submit_form(&endpoint, &fields).await;
                    if let Err(e) = &result {
                        warn!("Contact form error: {}", e);
                    }
                    let accepted = result.is_ok();
                    submission.try_update_value(|s| s.finish(PerformanceClock.now(), accepted));
                    sync();
                    if accepted {
                        clear_fields();
                        schedule_dismiss();
                    }
                });
            }
        }
    };

    let close = move || {
        cancel_timer();
        submission.try_update_value(Submission::reset);
        sync();
        set_error.set(None);
        open.set(false);
    };

    let submitting = move || state.get() == SubmissionState::Submitting;
    let succeeded = move || matches!(state.get(), SubmissionState::Succeeded { .. });

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| close() data-testid="contact-modal">
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-title"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="modal-close" aria-label="Schließen" on:click=move |_| close()>
                        "×"
                    </button>
                    <div class="modal-header">
                        <h3 id="contact-title">"Kostenloses Strategiegespräch"</h3>
                        <p>"30 Minuten, die euer Business verändern können."</p>
                    </div>

                    <Show when=succeeded>
                        <div class="form-status form-status-success" role="status">
                            <p class="form-status-title">"Danke für deine Nachricht!"</p>
                            <p>"Wir melden uns innerhalb von 24 Stunden."</p>
                        </div>
                    </Show>

                    <Show when=move || state.get() == SubmissionState::Failed>
                        <div class="form-status form-status-error" role="alert">
                            <p class="form-status-title">"Fehler beim Senden"</p>
                            <p>
                                "Bitte schreibe uns direkt: "
                                <a href=move || format!("mailto:{}", fallback_email.get_value())>
                                    {move || fallback_email.get_value()}
                                </a>
                            </p>
                        </div>
                    </Show>

                    <Show when=move || !succeeded()>
                        <form class="contact-form" name="contact" on:submit=on_submit novalidate>
                            <input type="hidden" name="bot-field" bind:value=honeypot />

                            <label class="form-field">
                                <span>"Name *"</span>
                                <input
                                    type="text"
                                    name="name"
                                    placeholder="Max Mustermann"
                                    bind:value=name
                                    disabled=submitting
                                />
                            </label>
                            <label class="form-field">
                                <span>"E-Mail *"</span>
                                <input
                                    type="email"
                                    name="email"
                                    placeholder="max@firma.de"
                                    bind:value=email
                                    disabled=submitting
                                />
                            </label>
                            <label class="form-field">
                                <span>"Telefon (optional)"</span>
                                <input
                                    type="tel"
                                    name="phone"
                                    placeholder="+49 123 456789"
                                    bind:value=phone
                                    disabled=submitting
                                />
                            </label>
                            <label class="form-field">
                                <span>"Was ist eure größte Herausforderung? *"</span>
                                <textarea
                                    name="message"
                                    rows="3"
                                    placeholder="z.B. Wir brauchen eine moderne Webseite + Automatisierung..."
                                    bind:value=message
                                    disabled=submitting
                                ></textarea>
                            </label>
                            <label class="form-checkbox">
                                <input type="checkbox" name="privacy" bind:checked=privacy disabled=submitting />
                                <span>"Ich habe die Datenschutzerklärung gelesen und stimme zu. *"</span>
                            </label>

                            {move || error.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}

                            <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                                {move || if submitting() { "Wird gesendet..." } else { "Gespräch anfragen" }}
                            </button>
                            <p class="form-hint">"Wir melden uns innerhalb von 24 Stunden."</p>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        let errors = [
            ContactFormError::MissingName,
            ContactFormError::MissingEmail,
            ContactFormError::InvalidEmail,
            ContactFormError::MissingMessage,
            ContactFormError::ConsentRequired,
        ];
        let messages: std::collections::HashSet<_> =
            errors.into_iter().map(validation_message).collect();
        assert_eq!(messages.len(), errors.len());
    }
}
