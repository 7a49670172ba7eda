//! Contact form state, validation and the submission seam.
//!
//! The form moves idle → validating → submitting → (success | error) → idle.
//! [`ContactForm`] holds the state the view renders from; the asynchronous
//! part of a submission goes through a [`ContactSubmitter`], so a real
//! delivery backend can replace [`SimulatedSubmitter`] without touching
//! validation or display.

use std::rc::Rc;

use dioxus::logger::tracing::{error, info};
use futures::future::LocalBoxFuture;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::language::Language;
use super::timing;
use crate::t;

/// Delay of the simulated delivery.
pub const SIMULATED_DELAY_MS: u64 = 1_500;
/// How long a success message stays on screen.
pub const SUCCESS_DISMISS_MS: u64 = 5_000;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name / id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{}` is empty", .0.name())]
    MissingField(Field),
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ValidationError {
    pub fn message(self, lang: Language) -> String {
        match self {
            ValidationError::MissingField(_) => t!(lang, "form-validation"),
            ValidationError::InvalidEmail => t!(lang, "form-invalid-email"),
        }
    }
}

/// All four fields must be non-empty after trimming and the email well formed.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|field| fields.get(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }
    if !is_valid_email(fields.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

/// Delivers a validated contact message.
pub trait ContactSubmitter {
    fn submit<'a>(&'a self, fields: &'a ContactFields) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

/// Stand-in for a message delivery endpoint: waits, logs the payload, succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u64,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit<'a>(&'a self, fields: &'a ContactFields) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        Box::pin(async move {
            timing::sleep_ms(self.delay_ms).await;
            info!(
                sender = %fields.name,
                email = %fields.email,
                subject = %fields.subject,
                "contact form data: {}",
                fields.message
            );
            Ok(())
        })
    }
}

/// Submitter shared through the Dioxus context.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn ContactSubmitter>);

impl Default for SubmitterHandle {
    fn default() -> Self {
        Self(Rc::new(SimulatedSubmitter::default()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "form-success",
            StatusKind::Error => "form-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
}

/// A submission that passed validation and is waiting on the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub fields: ContactFields,
    pub lang: Language,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    submitting: bool,
    status: Option<StatusMessage>,
    next_status_id: u64,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Submit button label: the localized "sending" text while pending.
    pub fn submit_label(&self, lang: Language) -> String {
        if self.submitting {
            t!(lang, "form-sending")
        } else {
            t!(lang, "form-submit")
        }
    }

    /// Handle a submit request. Clears the previous status, validates and,
    /// on success, locks the form and hands back what to deliver.
    pub fn begin_submit(&mut self, lang: Language) -> Option<PendingSubmission> {
        if self.submitting {
            return None;
        }
        self.status = None;
        if let Err(err) = validate(&self.fields) {
            self.show(StatusKind::Error, err.message(lang));
            return None;
        }
        self.submitting = true;
        Some(PendingSubmission {
            fields: self.fields.clone(),
            lang,
        })
    }

    /// Apply the submitter outcome. The form is always unlocked again.
    /// Returns the id of a success message that should be dismissed later.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>, lang: Language) -> Option<u64> {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                Some(self.show(StatusKind::Success, t!(lang, "form-success")))
            }
            Err(err) => {
                error!("Form submission error: {err}");
                self.show(StatusKind::Error, t!(lang, "form-error"));
                None
            }
        }
    }

    /// Remove the status message `id`, unless it was already replaced.
    pub fn dismiss(&mut self, id: u64) {
        if self.status.as_ref().is_some_and(|status| status.id == id) {
            self.status = None;
        }
    }

    fn show(&mut self, kind: StatusKind, text: String) -> u64 {
        self.next_status_id += 1;
        let id = self.next_status_id;
        self.status = Some(StatusMessage { id, kind, text });
        id
    }
}

/// Resolves with `id` once a success message has been shown long enough.
pub async fn dismissal_after_display(id: u64) -> u64 {
    timing::sleep_ms(SUCCESS_DISMISS_MS).await;
    id
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use futures::executor::block_on;

    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ann".into(),
            email: "user@example.com".into(),
            subject: "Hello".into(),
            message: "A project idea".into(),
        }
    }

    struct CountingSubmitter {
        calls: Cell<u32>,
        fail: bool,
    }

    impl CountingSubmitter {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl ContactSubmitter for CountingSubmitter {
        fn submit<'a>(
            &'a self,
            _fields: &'a ContactFields,
        ) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
            self.calls.set(self.calls.get() + 1);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(SubmitError::Delivery("endpoint down".into()))
                } else {
                    Ok(())
                }
            })
        }
    }

    fn run(form: &mut ContactForm, submitter: &dyn ContactSubmitter, lang: Language) -> Option<u64> {
        let pending = form.begin_submit(lang)?;
        assert!(form.is_submitting());
        let outcome = block_on(submitter.submit(&pending.fields));
        form.finish(outcome, pending.lang)
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn any_empty_field_blocks_submission() {
        for field in Field::ALL {
            let mut form = ContactForm::default();
            form.fields = filled();
            form.fields.set(field, "   ".into());

            let submitter = CountingSubmitter::new(false);
            assert_eq!(run(&mut form, &submitter, Language::En), None);
            assert_eq!(submitter.calls.get(), 0, "submitted with empty {}", field.name());
            assert!(!form.is_submitting());

            let status = form.status().unwrap();
            assert_eq!(status.kind, StatusKind::Error);
            assert_eq!(status.text, "Please fill in all required fields.");
        }
    }

    #[test]
    fn malformed_email_is_rejected_in_current_language() {
        let mut form = ContactForm::default();
        form.fields = filled();
        form.fields.email = "not-an-email".into();
        assert_eq!(validate(&form.fields), Err(ValidationError::InvalidEmail));
        assert!(form.begin_submit(Language::Nl).is_none());
        assert_eq!(form.status().unwrap().text, "Voer een geldig e-mailadres in.");
    }

    #[test]
    fn success_clears_fields_and_unlocks() {
        let mut form = ContactForm::default();
        form.fields = filled();
        let submitter = CountingSubmitter::new(false);

        let dismiss_id = run(&mut form, &submitter, Language::En);
        assert!(dismiss_id.is_some());
        assert_eq!(submitter.calls.get(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.status().unwrap().kind, StatusKind::Success);
        assert_eq!(form.submit_label(Language::En), "Send message");
    }

    #[test]
    fn failure_keeps_fields_and_unlocks() {
        let mut form = ContactForm::default();
        form.fields = filled();
        let submitter = CountingSubmitter::new(true);

        assert_eq!(run(&mut form, &submitter, Language::Nl), None);
        assert!(!form.is_submitting());
        assert_eq!(form.fields, filled());
        let status = form.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(
            status.text,
            "Versturen mislukt. Probeer opnieuw of neem direct contact op."
        );
    }

    #[test]
    fn pending_form_shows_sending_label_and_refuses_resubmission() {
        let mut form = ContactForm::default();
        form.fields = filled();
        assert!(form.begin_submit(Language::En).is_some());
        assert_eq!(form.submit_label(Language::En), "Sending...");
        assert!(form.begin_submit(Language::En).is_none());
    }

    #[test]
    fn new_submission_clears_previous_message() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit(Language::En).is_none());
        let first = form.status().unwrap().id;

        form.fields = filled();
        form.begin_submit(Language::En);
        assert!(form.status().is_none());
        let id = form.finish(Ok(()), Language::En).unwrap();
        assert_ne!(id, first);
    }

    #[test]
    fn stale_dismissal_does_not_remove_newer_message() {
        let mut form = ContactForm::default();
        form.fields = filled();
        form.begin_submit(Language::En);
        let id = form.finish(Ok(()), Language::En).unwrap();

        form.begin_submit(Language::En);
        let newer = form.status().cloned();
        form.dismiss(id);
        assert_eq!(form.status().cloned(), newer);
    }

    #[tokio::test(start_paused = true)]
    async fn success_message_dismissed_after_five_seconds() {
        let mut form = ContactForm::default();
        form.fields = filled();
        form.begin_submit(Language::En);
        let id = form.finish(Ok(()), Language::En).unwrap();

        let early = tokio::time::timeout(Duration::from_millis(4_999), dismissal_after_display(id)).await;
        assert!(early.is_err(), "dismissed before five seconds");
        assert!(form.status().is_some());

        let due = tokio::time::timeout(Duration::from_millis(5_001), dismissal_after_display(id))
            .await
            .expect("dismissed within five seconds");
        form.dismiss(due);
        assert!(form.status().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submitter_always_succeeds_after_delay() {
        let submitter = SimulatedSubmitter::default();
        let fields = filled();
        let start = tokio::time::Instant::now();
        assert_eq!(submitter.submit(&fields).await, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(SIMULATED_DELAY_MS));
    }
}
