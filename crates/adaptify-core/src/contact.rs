//! Contact form validation and submission state.
//!
//! The form posts URL-encoded fields to the hosting provider's form
//! endpoint. This module decides *what* is sent and tracks the request's
//! lifecycle; the UI performs the request itself.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::Timestamp;
use crate::config::ContactConfig;
use crate::error::ContactFormError;

/// Hidden field that only bots fill in.
pub const HONEYPOT_FIELD: &str = "bot-field";

/// Hidden field naming the form for the endpoint.
pub const FORM_NAME_FIELD: &str = "form-name";

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Visitor's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Optional phone number.
    pub phone: String,
    /// The request itself.
    pub message: String,
    /// Privacy policy checkbox.
    pub privacy_consent: bool,
    /// Honeypot value.
    pub honeypot: String,
}

impl ContactForm {
    /// Whether the honeypot was filled in.
    #[must_use]
    pub fn is_spam(&self) -> bool {
        !self.honeypot.trim().is_empty()
    }

    /// Check required fields and the email shape.
    pub fn validate(&self) -> Result<ValidContact, ContactFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        if !self.privacy_consent {
            return Err(ContactFormError::ConsentRequired);
        }

        let phone = self.phone.trim();
        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: message.to_string(),
        })
    }
}

/// Loose address check: one `@`, something before it, a dotted domain
/// after it, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidContact {
    /// Trimmed name.
    pub name: String,
    /// Trimmed email.
    pub email: String,
    /// Phone, if given.
    pub phone: Option<String>,
    /// Trimmed message.
    pub message: String,
}

impl ValidContact {
    /// Fields in submission order, including the hidden ones.
    #[must_use]
    pub fn form_fields<'a>(&'a self, form_name: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            (FORM_NAME_FIELD, form_name),
            (HONEYPOT_FIELD, ""),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_deref().unwrap_or_default()),
            ("message", self.message.as_str()),
        ]
    }
}

/// Where a submission stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Request sent, no answer yet.
    Submitting,
    /// Endpoint accepted the form.
    Succeeded {
        /// When the confirmation appeared.
        at: Timestamp,
    },
    /// Request failed; the fallback address is shown.
    Failed,
}

/// What the caller should do after [`Submission::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Send these fields.
    Send(ValidContact),
    /// Honeypot tripped: show success, send nothing.
    Discard,
    /// A request is already in flight.
    Busy,
}

/// Submission lifecycle. No retries: a failure stays failed until the
/// visitor submits again.
#[derive(Debug, Clone)]
pub struct Submission {
    state: SubmissionState,
    dismiss_after: Duration,
}

impl Submission {
    /// Create an idle submission.
    #[must_use]
    pub const fn new(config: &ContactConfig) -> Self {
        Self {
            state: SubmissionState::Idle,
            dismiss_after: Duration::from_millis(config.success_dismiss_ms),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Start submitting `form`.
    pub fn begin(
        &mut self,
        form: &ContactForm,
        now: Timestamp,
    ) -> Result<SubmitAction, ContactFormError> {
        if self.state == SubmissionState::Submitting {
            return Ok(SubmitAction::Busy);
        }
        if form.is_spam() {
            debug!("Honeypot filled, discarding submission");
            self.state = SubmissionState::Succeeded { at: now };
            return Ok(SubmitAction::Discard);
        }
        let valid = form.validate()?;
        self.state = SubmissionState::Submitting;
        Ok(SubmitAction::Send(valid))
    }

    /// Record the endpoint's answer.
    pub fn finish(&mut self, now: Timestamp, accepted: bool) {
        if self.state != SubmissionState::Submitting {
            return;
        }
        self.state = if accepted {
            info!("Contact form submitted");
            SubmissionState::Succeeded { at: now }
        } else {
            warn!("Contact form submission failed");
            SubmissionState::Failed
        };
    }

    /// When the success confirmation closes.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Timestamp> {
        match self.state {
            SubmissionState::Succeeded { at } => Some(at + self.dismiss_after),
            _ => None,
        }
    }

    /// Close the confirmation once its time is up. Returns true when this
    /// call closed it.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        match self.dismiss_deadline() {
            Some(deadline) if now >= deadline => {
                self.state = SubmissionState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Back to idle, e.g. when the modal is closed by hand.
    ///
    /// A request in flight keeps the submission busy until its answer
    /// arrives, so a second request cannot be started in the meantime.
    pub fn reset(&mut self) {
        if self.state == SubmissionState::Submitting {
            debug!("Reset while submitting, waiting for the answer");
            return;
        }
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Max Mustermann ".to_string(),
            email: "max@firma.de".to_string(),
            phone: String::new(),
            message: "Neue Webseite".to_string(),
            privacy_consent: true,
            honeypot: String::new(),
        }
    }

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_validate_trims_and_drops_empty_phone() {
        let valid = filled().validate().unwrap();
        assert_eq!(valid.name, "Max Mustermann");
        assert_eq!(valid.phone, None);
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut form = filled();
        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingName));

        let mut form = filled();
        form.email = "max@firma".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingMessage));

        let mut form = filled();
        form.privacy_consent = false;
        assert_eq!(form.validate(), Err(ContactFormError::ConsentRequired));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_plausible_email("a@b.de"));
        assert!(is_plausible_email("first.last@sub.example.com"));
        assert!(!is_plausible_email("@b.de"));
        assert!(!is_plausible_email("a@.de"));
        assert!(!is_plausible_email("a@b."));
        assert!(!is_plausible_email("a b@c.de"));
        assert!(!is_plausible_email("a@b@c.de"));
    }

    #[test]
    fn test_form_fields_order() {
        let mut form = filled();
        form.phone = "+49 123".to_string();
        let valid = form.validate().unwrap();
        let fields = valid.form_fields("contact");
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec!["form-name", "bot-field", "name", "email", "phone", "message"]
        );
        assert_eq!(fields[0].1, "contact");
        assert_eq!(fields[4].1, "+49 123");
    }

    #[test]
    fn test_successful_submission_auto_dismisses() {
        let mut submission = Submission::new(&ContactConfig::default());
        assert!(matches!(
            submission.begin(&filled(), at(0)),
            Ok(SubmitAction::Send(_))
        ));
        assert_eq!(submission.state(), SubmissionState::Submitting);
        assert_eq!(
            submission.begin(&filled(), at(10)),
            Ok(SubmitAction::Busy)
        );

        submission.finish(at(300), true);
        assert_eq!(submission.dismiss_deadline(), Some(at(2800)));
        assert!(!submission.poll(at(2799)));
        assert!(submission.poll(at(2800)));
        assert_eq!(submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_failure_has_no_deadline() {
        let mut submission = Submission::new(&ContactConfig::default());
        submission.begin(&filled(), at(0)).unwrap();
        submission.finish(at(100), false);
        assert_eq!(submission.state(), SubmissionState::Failed);
        assert_eq!(submission.dismiss_deadline(), None);
    }

    #[test]
    fn test_reset_waits_for_request_in_flight() {
        let mut submission = Submission::new(&ContactConfig::default());
        assert!(matches!(
            submission.begin(&filled(), at(0)),
            Ok(SubmitAction::Send(_))
        ));

        submission.reset();
        assert_eq!(submission.state(), SubmissionState::Submitting);
        assert_eq!(submission.begin(&filled(), at(10)), Ok(SubmitAction::Busy));

        submission.finish(at(20), false);
        assert_eq!(submission.state(), SubmissionState::Failed);
        submission.reset();
        assert_eq!(submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_honeypot_discards() {
        let mut form = filled();
        form.honeypot = "http://spam".to_string();
        let mut submission = Submission::new(&ContactConfig::default());
        assert_eq!(submission.begin(&form, at(5)), Ok(SubmitAction::Discard));
        assert_eq!(submission.state(), SubmissionState::Succeeded { at: at(5) });
    }

    #[test]
    fn test_invalid_form_leaves_state() {
        let mut submission = Submission::new(&ContactConfig::default());
        let form = ContactForm::default();
        assert_eq!(
            submission.begin(&form, at(0)),
            Err(ContactFormError::MissingName)
        );
        assert_eq!(submission.state(), SubmissionState::Idle);
    }
}
