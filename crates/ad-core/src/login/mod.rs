//! Login domain module.
//!
//! Email/password form with the same validate-on-every-edit discipline as
//! registration, plus federated sign-in states.

pub mod form;
pub mod state;
pub mod ui_state;

pub use form::{validate_login, LoginField, LoginForm};
pub use state::{LoginState, DEFAULT_LOGIN_FAILURE_MESSAGE};
pub use ui_state::LoginUiState;
