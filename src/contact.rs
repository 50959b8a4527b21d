use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::relay::{Relay, RelayError};

/// The browser's `type=email` rule.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message, ready to hand to the relay. Values are kept exactly
/// as the sender typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingName => Field::Name,
            ValidationError::MissingEmail | ValidationError::InvalidEmail => Field::Email,
            ValidationError::MissingMessage => Field::Message,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<Submission, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Outcome shown to the sender once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Sent => "Message Sent Successfully!",
            Notice::Failed => "Message Failed!",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Sent => "Thank you for reaching out. I'll get back to you soon.",
            Notice::Failed => "Something went wrong. Please try again later.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// State of the contact form: `Idle -> Submitting -> Idle`, with the last
/// notice kept until the next attempt starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmitPhase,
    notice: Option<Notice>,
    invalid: Option<ValidationError>,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.invalid
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.get_mut(field) = value;
        if self.invalid.is_some_and(|e| e.field() == field) {
            self.invalid = None;
        }
    }

    /// Starts a submission. Must be called synchronously from the submit
    /// handler so a second click sees `Submitting` before any await.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        let submission = self.fields.validate().inspect_err(|e| {
            self.invalid = Some(*e);
        })?;
        self.invalid = None;
        self.notice = None;
        self.phase = SubmitPhase::Submitting;
        Ok(submission)
    }

    pub fn settle(&mut self, outcome: &Result<(), RelayError>) -> Notice {
        self.phase = SubmitPhase::Idle;
        let notice = match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                Notice::Sent
            }
            Err(_) => Notice::Failed,
        };
        self.notice = Some(notice);
        notice
    }
}

/// Sends one submission. Failures are logged here and handed back for
/// [`ContactForm::settle`]; nothing is retried.
pub async fn deliver<R: Relay>(relay: &R, submission: &Submission) -> Result<(), RelayError> {
    let res = relay.send(submission).await;
    if let Err(e) = &res {
        log::error!("contact submission failed: {e}");
    }
    res
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use http::StatusCode;

    use super::*;

    struct MockRelay {
        calls: RefCell<Vec<Submission>>,
        response: Result<(), RelayError>,
    }

    impl MockRelay {
        fn accepting() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: Ok(()),
            }
        }

        fn rejecting() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: Err(RelayError::Rejected {
                    status: StatusCode::BAD_REQUEST,
                    reason: "The template ID is invalid".to_string(),
                }),
            }
        }
    }

    impl Relay for MockRelay {
        async fn send(&self, submission: &Submission) -> Result<(), RelayError> {
            self.calls.borrow_mut().push(submission.clone());
            self.response.clone()
        }
    }

    fn filled_form(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::Message, message.to_string());
        form
    }

    // Mirrors what the submit handler does: start, await the relay, settle
    fn run_submit(form: &mut ContactForm, relay: &MockRelay) -> Result<Notice, SubmitRejected> {
        let submission = form.begin_submit()?;
        assert!(form.is_submitting());
        let outcome = block_on(deliver(relay, &submission));
        Ok(form.settle(&outcome))
    }

    #[test]
    fn test_successful_submission_clears_fields() {
        let relay = MockRelay::accepting();
        let mut form = filled_form("Jane Doe", "jane@example.com", "Hello");

        let notice = run_submit(&mut form, &relay).unwrap();

        assert_eq!(
            *relay.calls.borrow(),
            vec![Submission {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                message: "Hello".to_string(),
            }]
        );
        assert_eq!(notice, Notice::Sent);
        assert_eq!(form.notice(), Some(Notice::Sent));
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let relay = MockRelay::rejecting();
        let mut form = filled_form("Jane Doe", "jane@example.com", "Hello");

        let notice = run_submit(&mut form, &relay).unwrap();

        assert_eq!(relay.calls.borrow().len(), 1);
        assert_eq!(notice, Notice::Failed);
        assert!(notice.is_error());
        assert_eq!(form.fields().name, "Jane Doe");
        assert_eq!(form.fields().email, "jane@example.com");
        assert_eq!(form.fields().message, "Hello");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_empty_name_blocks_submission() {
        let relay = MockRelay::accepting();
        let mut form = filled_form("", "jane@example.com", "Hello");

        let res = run_submit(&mut form, &relay);

        assert_eq!(
            res,
            Err(SubmitRejected::Invalid(ValidationError::MissingName))
        );
        assert!(relay.calls.borrow().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.validation_error(), Some(ValidationError::MissingName));
    }

    #[test]
    fn test_every_missing_field_blocks() {
        let cases = [
            ("   ", "jane@example.com", "Hello", ValidationError::MissingName),
            ("Jane", "", "Hello", ValidationError::MissingEmail),
            ("Jane", "jane@", "Hello", ValidationError::InvalidEmail),
            ("Jane", "jane@example.com", "", ValidationError::MissingMessage),
        ];
        for (name, email, message, expected) in cases {
            let relay = MockRelay::accepting();
            let mut form = filled_form(name, email, message);
            assert_eq!(
                run_submit(&mut form, &relay),
                Err(SubmitRejected::Invalid(expected))
            );
            assert!(relay.calls.borrow().is_empty());
        }
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let mut form = filled_form("Jane Doe", "jane@example.com", "Hello");

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

        form.settle(&Ok(()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut form = filled_form("Jane Doe", "jane@example.com", "Hello");
        assert_eq!(
            run_submit(&mut form, &MockRelay::rejecting()),
            Ok(Notice::Failed)
        );

        let relay = MockRelay::accepting();
        assert_eq!(run_submit(&mut form, &relay), Ok(Notice::Sent));
        assert_eq!(relay.calls.borrow()[0].name, "Jane Doe");
    }

    #[test]
    fn test_new_attempt_clears_previous_notice() {
        let mut form = filled_form("Jane Doe", "jane@example.com", "Hello");
        form.begin_submit().unwrap();
        form.settle(&Err(RelayError::Network("offline".to_string())));
        assert_eq!(form.notice(), Some(Notice::Failed));

        form.begin_submit().unwrap();
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn test_editing_field_clears_its_validation_error() {
        let mut form = filled_form("Jane", "not-an-email", "Hello");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.validation_error(), Some(ValidationError::InvalidEmail));

        form.set_field(Field::Name, "Jane Doe".to_string());
        assert_eq!(form.validation_error(), Some(ValidationError::InvalidEmail));

        form.set_field(Field::Email, "jane@example.com".to_string());
        assert_eq!(form.validation_error(), None);
    }

    #[test]
    fn test_submission_keeps_values_as_typed() {
        let form = filled_form("  Jane Doe ", " jane@example.com ", "Hi\n");
        let submission = form.fields().validate().unwrap();
        assert_eq!(submission.name, "  Jane Doe ");
        assert_eq!(submission.email, " jane@example.com ");
        assert_eq!(submission.message, "Hi\n");
    }

    #[test]
    fn test_email_syntax() {
        for ok in [
            "jane@example.com",
            "first.last+tag@sub.example.co.uk",
            "user@localhost",
        ] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "jane",
            "@example.com",
            "jane@",
            "jane doe@example.com",
            "jane@-example.com",
            "jane@example..com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_notice_copy() {
        assert_eq!(
            Notice::Failed.description(),
            "Something went wrong. Please try again later."
        );
        assert!(!Notice::Sent.is_error());
    }
}
