//! Contact-form state machine and the contract of the delivery backend.
//! The form only ever has one submission in flight; duplicates are
//! rejected before anything is sent.

use serde::Serialize;
use thiserror::Error;

/// Maximum message length in UTF-16 code units, clamped at input time.
pub const MESSAGE_LIMIT: usize = 800;

/// The payload the (eventual) submission backend accepts. Serialized
/// camelCase to match its wire contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Structural validation only: the four required fields must be
    /// non-blank. Email format is left to the browser's native checks.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (name, value) in [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(name));
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("the submission backend rejected the message")]
    Backend,
}

/// Whatever actually delivers the message. The site ships with a stub
/// that resolves after a fixed delay; real delivery plugs in here.
pub trait ContactBackend {
    fn deliver(&self, request: ContactRequest, done: Box<dyn FnOnce(Result<(), SubmitError>)>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastResult {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    pub message: String,
    pub is_submitting: bool,
    pub last_result: LastResult,
}

impl ContactFormState {
    /// Replace the message text, clamped to [`MESSAGE_LIMIT`].
    pub fn edit_message(&mut self, text: &str) {
        self.message = clamp_message(text);
    }

    pub fn message_len(&self) -> usize {
        self.message.encode_utf16().count()
    }

    /// Move `none -> submitting`. Fails without side effects while a
    /// submission is in flight or when required fields are blank.
    pub fn begin_submit(&mut self, request: &ContactRequest) -> Result<(), ContactError> {
        if self.is_submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        request.validate()?;
        self.is_submitting = true;
        self.last_result = LastResult::None;
        Ok(())
    }

    /// Finish the in-flight submission. Success clears the message text;
    /// an error keeps it so the user can retry.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.last_result = LastResult::Success;
                self.message.clear();
            }
            Err(_) => self.last_result = LastResult::Error,
        }
    }
}

/// Truncate to at most [`MESSAGE_LIMIT`] UTF-16 code units without
/// splitting a scalar value.
pub fn clamp_message(text: &str) -> String {
    let mut units = 0;
    let mut out = String::new();
    for ch in text.chars() {
        units += ch.len_utf16();
        if units > MESSAGE_LIMIT {
            break;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            first_name: "Haleem".to_string(),
            last_name: "Akmal".to_string(),
            email: "haleem@example.com".to_string(),
            subject: None,
            message: "Hello there".to_string(),
        }
    }

    /// Backend double that records requests and completes synchronously.
    struct RecordingBackend {
        outcome: Result<(), SubmitError>,
        delivered: Rc<RefCell<Vec<ContactRequest>>>,
    }

    impl ContactBackend for RecordingBackend {
        fn deliver(&self, request: ContactRequest, done: Box<dyn FnOnce(Result<(), SubmitError>)>) {
            self.delivered.borrow_mut().push(request);
            done(self.outcome.clone());
        }
    }

    #[test]
    fn validate_flags_each_required_field() {
        let mut req = valid_request();
        req.first_name = "  ".to_string();
        assert_eq!(req.validate(), Err(ContactError::MissingField("first name")));

        let mut req = valid_request();
        req.email = String::new();
        assert_eq!(req.validate(), Err(ContactError::MissingField("email")));

        let mut req = valid_request();
        req.message = "\n".to_string();
        assert_eq!(req.validate(), Err(ContactError::MissingField("message")));

        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn subject_is_optional() {
        let mut req = valid_request();
        req.subject = Some("Project inquiry".to_string());
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn successful_submission_clears_message() {
        let mut state = ContactFormState::default();
        state.edit_message("Hello there");
        let request = valid_request();

        assert_eq!(state.begin_submit(&request), Ok(()));
        assert!(state.is_submitting);
        assert_eq!(state.last_result, LastResult::None);

        state.complete(Ok(()));
        assert!(!state.is_submitting);
        assert_eq!(state.last_result, LastResult::Success);
        assert!(state.message.is_empty());
    }

    #[test]
    fn failed_submission_keeps_message() {
        let mut state = ContactFormState::default();
        state.edit_message("Hello there");

        state.begin_submit(&valid_request()).unwrap();
        state.complete(Err(SubmitError::Backend));

        assert!(!state.is_submitting);
        assert_eq!(state.last_result, LastResult::Error);
        assert_eq!(state.message, "Hello there");
    }

    #[test]
    fn duplicate_submit_is_rejected_without_side_effects() {
        let mut state = ContactFormState::default();
        state.begin_submit(&valid_request()).unwrap();

        let err = state.begin_submit(&valid_request());
        assert_eq!(err, Err(ContactError::AlreadySubmitting));
        assert!(state.is_submitting);
        assert_eq!(state.last_result, LastResult::None);
    }

    #[test]
    fn invalid_request_does_not_enter_submitting() {
        let mut state = ContactFormState::default();
        let mut req = valid_request();
        req.last_name = String::new();
        assert!(state.begin_submit(&req).is_err());
        assert!(!state.is_submitting);
    }

    #[test]
    fn resubmit_after_completion_is_allowed() {
        let mut state = ContactFormState::default();
        state.begin_submit(&valid_request()).unwrap();
        state.complete(Err(SubmitError::Backend));
        assert_eq!(state.begin_submit(&valid_request()), Ok(()));
    }

    #[test]
    fn full_cycle_through_a_backend() {
        let delivered = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            outcome: Ok(()),
            delivered: delivered.clone(),
        };

        let state = Rc::new(RefCell::new(ContactFormState::default()));
        state.borrow_mut().edit_message("Hello there");
        let request = valid_request();

        state.borrow_mut().begin_submit(&request).unwrap();
        let state_done = state.clone();
        backend.deliver(
            request.clone(),
            Box::new(move |outcome| state_done.borrow_mut().complete(outcome)),
        );

        assert_eq!(delivered.borrow().len(), 1);
        assert_eq!(delivered.borrow()[0], request);
        assert_eq!(state.borrow().last_result, LastResult::Success);
        assert!(!state.borrow().is_submitting);
    }

    #[test]
    fn clamp_is_a_noop_under_the_limit() {
        assert_eq!(clamp_message("short"), "short");
        let exactly = "a".repeat(MESSAGE_LIMIT);
        assert_eq!(clamp_message(&exactly), exactly);
    }

    #[test]
    fn clamp_truncates_at_the_limit() {
        let long = "a".repeat(MESSAGE_LIMIT + 50);
        let clamped = clamp_message(&long);
        assert_eq!(clamped.encode_utf16().count(), MESSAGE_LIMIT);
    }

    #[test]
    fn clamp_counts_utf16_units_and_keeps_scalars_whole() {
        // '𝄞' is two UTF-16 code units; an odd budget can't split it
        let text = "a".repeat(MESSAGE_LIMIT - 1) + "𝄞";
        let clamped = clamp_message(&text);
        assert_eq!(clamped.encode_utf16().count(), MESSAGE_LIMIT - 1);
        assert!(clamped.ends_with('a'));
    }

    #[test]
    fn edit_message_clamps_and_counts() {
        let mut state = ContactFormState::default();
        state.edit_message(&"x".repeat(MESSAGE_LIMIT * 2));
        assert_eq!(state.message_len(), MESSAGE_LIMIT);
    }

    #[test]
    fn request_serializes_to_the_backend_contract() {
        let mut req = valid_request();
        req.subject = Some("Hiring".to_string());
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstName": "Haleem",
                "lastName": "Akmal",
                "email": "haleem@example.com",
                "subject": "Hiring",
                "message": "Hello there",
            })
        );

        // subject is omitted entirely when absent
        let value = serde_json::to_value(valid_request()).unwrap();
        assert!(value.get("subject").is_none());
    }
}
