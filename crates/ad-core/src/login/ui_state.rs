use serde::Serialize;

use super::form::{validate_login, LoginForm};
use super::state::LoginState;

/// Immutable snapshot rendered by the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUiState {
    pub email: String,
    pub password: String,
    pub password_hidden: bool,
    pub is_submit_enabled: bool,
    pub is_loading: bool,
    pub last_message: Option<String>,
    pub is_last_message_error: bool,
}

impl LoginUiState {
    pub fn project(form: &LoginForm, state: &LoginState) -> Self {
        let (last_message, is_last_message_error) = match state.message() {
            Some((message, is_error)) => (Some(message.to_string()), is_error),
            None => (None, false),
        };

        Self {
            email: form.email.clone(),
            password: form.password.clone(),
            password_hidden: form.password_hidden,
            is_submit_enabled: state.is_idle() && validate_login(form),
            is_loading: state.is_in_flight(),
            last_message,
            is_last_message_error,
        }
    }

    pub fn initial() -> Self {
        Self::project(&LoginForm::default(), &LoginState::Idle)
    }
}
