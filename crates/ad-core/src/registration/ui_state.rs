//! Registration view state.
//!
//! [`RegistrationUiState`] is the only thing the rendering layer reads. It is
//! rebuilt from `(form, submission)` on every change and handed over by value.

use serde::Serialize;

use super::form::RegistrationForm;
use super::submission::SubmissionState;
use super::validation::validate;

/// Immutable snapshot rendered by the sign-up screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationUiState {
    pub name: String,
    pub last_name: String,
    pub document_id: String,
    pub email: String,
    pub password: String,
    pub cellphone: String,
    pub accepted_terms: bool,
    pub password_hidden: bool,
    /// True exactly when `submit` would start a new attempt.
    pub is_submit_enabled: bool,
    pub is_loading: bool,
    pub last_message: Option<String>,
    pub is_last_message_error: bool,
}

impl RegistrationUiState {
    pub fn project(form: &RegistrationForm, submission: &SubmissionState) -> Self {
        let (last_message, is_last_message_error) = match submission.message() {
            Some((message, is_error)) => (Some(message.to_string()), is_error),
            None => (None, false),
        };

        Self {
            name: form.name.clone(),
            last_name: form.last_name.clone(),
            document_id: form.document_id.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            cellphone: form.cellphone.clone(),
            accepted_terms: form.accepted_terms,
            password_hidden: form.password_hidden,
            is_submit_enabled: submission.is_idle() && validate(form),
            is_loading: submission.is_in_flight(),
            last_message,
            is_last_message_error,
        }
    }

    /// Snapshot of a freshly opened screen.
    pub fn initial() -> Self {
        Self::project(&RegistrationForm::default(), &SubmissionState::Idle)
    }
}
