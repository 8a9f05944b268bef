//! Registration domain module.
//!
//! Holds the multi-field sign-up form, its validation rules, the submission
//! state machine and the pure projection into a renderable view state.

pub mod form;
pub mod submission;
pub mod ui_state;
pub mod validation;

pub use form::{FormField, RegistrationForm};
pub use submission::{
    FailureKind, SubmissionState, DEFAULT_AUTH_FAILURE_MESSAGE, DEFAULT_PROFILE_FAILURE_MESSAGE,
};
pub use ui_state::RegistrationUiState;
pub use validation::{validate, violations, Violation};
