//! Login orchestrator.
//!
//! Email/password sign-in plus the Google and Facebook federated flows. Shares
//! the registration screen's guard rules: one attempt at a time, loading is
//! published before the gateway call, and a reset discards late results.

use std::sync::{Arc, Mutex, MutexGuard};

use ad_core::login::{validate_login, LoginField, LoginForm, LoginState};
use ad_core::ports::{AuthError, SessionGatewayPort, ViewStatePort};
use ad_core::session::{AuthenticatedUser, SignInProvider};
use ad_core::LoginUiState;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::usecases::{LoginWithEmail, LoginWithFacebook, LoginWithGoogle};

#[derive(Default)]
struct LoginSession {
    form: LoginForm,
    state: LoginState,
    generation: u64,
}

pub struct LoginOrchestrator {
    session: Mutex<LoginSession>,

    login_with_email: Arc<LoginWithEmail>,
    login_with_google: Arc<LoginWithGoogle>,
    login_with_facebook: Arc<LoginWithFacebook>,
    view_state: Arc<dyn ViewStatePort<LoginUiState>>,
}

impl LoginOrchestrator {
    pub fn new(
        login_with_email: Arc<LoginWithEmail>,
        login_with_google: Arc<LoginWithGoogle>,
        login_with_facebook: Arc<LoginWithFacebook>,
        view_state: Arc<dyn ViewStatePort<LoginUiState>>,
    ) -> Self {
        Self {
            session: Mutex::new(LoginSession::default()),
            login_with_email,
            login_with_google,
            login_with_facebook,
            view_state,
        }
    }

    pub fn from_ports(
        session: Arc<dyn SessionGatewayPort>,
        view_state: Arc<dyn ViewStatePort<LoginUiState>>,
    ) -> Self {
        Self::new(
            Arc::new(LoginWithEmail::from_ports(session.clone())),
            Arc::new(LoginWithGoogle::from_ports(session.clone())),
            Arc::new(LoginWithFacebook::from_ports(session)),
            view_state,
        )
    }

    fn lock(&self) -> MutexGuard<'_, LoginSession> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn ui_state(&self) -> LoginUiState {
        let session = self.lock();
        LoginUiState::project(&session.form, &session.state)
    }

    pub fn state(&self) -> LoginState {
        self.lock().state.clone()
    }

    pub fn on_field_change(&self, field: LoginField, value: impl Into<String>) -> LoginUiState {
        let ui = {
            let mut session = self.lock();
            session.form.set_field(field, value);
            LoginUiState::project(&session.form, &session.state)
        };
        self.emit(ui)
    }

    pub fn toggle_password_visibility(&self) -> LoginUiState {
        let ui = {
            let mut session = self.lock();
            session.form.toggle_password_visibility();
            LoginUiState::project(&session.form, &session.state)
        };
        self.emit(ui)
    }

    /// Sign in with the email and password currently in the form.
    pub async fn login(&self) -> LoginUiState {
        let Some((form, generation)) = self.begin(true) else {
            return self.ui_state();
        };

        let result = self
            .login_with_email
            .execute(&form.email, &form.password)
            .instrument(info_span!(
                "usecase.login_orchestrator.login",
                provider = ?SignInProvider::Password
            ))
            .await;
        self.finish(generation, SignInProvider::Password, result)
    }

    pub async fn login_with_google(&self, id_token: &str) -> LoginUiState {
        let Some((_, generation)) = self.begin(false) else {
            return self.ui_state();
        };

        let result = self
            .login_with_google
            .execute(id_token)
            .instrument(info_span!(
                "usecase.login_orchestrator.login",
                provider = ?SignInProvider::Google
            ))
            .await;
        self.finish(generation, SignInProvider::Google, result)
    }

    pub async fn login_with_facebook(&self, access_token: &str) -> LoginUiState {
        let Some((_, generation)) = self.begin(false) else {
            return self.ui_state();
        };

        let result = self
            .login_with_facebook
            .execute(access_token)
            .instrument(info_span!(
                "usecase.login_orchestrator.login",
                provider = ?SignInProvider::Facebook
            ))
            .await;
        self.finish(generation, SignInProvider::Facebook, result)
    }

    pub fn reset(&self) -> LoginUiState {
        let ui = {
            let mut session = self.lock();
            let generation = session.generation.wrapping_add(1);
            *session = LoginSession {
                generation,
                ..LoginSession::default()
            };
            LoginUiState::project(&session.form, &session.state)
        };
        debug!("login reset");
        self.emit(ui)
    }

    /// `Idle → InFlight`. Federated flows skip form validation.
    fn begin(&self, require_valid_form: bool) -> Option<(LoginForm, u64)> {
        let (form, generation, ui) = {
            let mut session = self.lock();
            if !session.state.is_idle() {
                debug!("login ignored: attempt not idle");
                return None;
            }
            if require_valid_form && !validate_login(&session.form) {
                debug!("login ignored: form invalid");
                return None;
            }
            session.state = LoginState::InFlight;
            (
                session.form.clone(),
                session.generation,
                LoginUiState::project(&session.form, &session.state),
            )
        };
        info!(from = "idle", to = "in_flight", "login state transition");
        self.emit(ui);
        Some((form, generation))
    }

    fn finish(
        &self,
        generation: u64,
        provider: SignInProvider,
        result: Result<AuthenticatedUser, AuthError>,
    ) -> LoginUiState {
        let (next, to) = match result {
            Ok(user) => {
                info!(provider = ?provider, uid = %user.uid, "login succeeded");
                (LoginState::signed_in(user), "signed_in")
            }
            Err(err) => {
                warn!(provider = ?provider, error = %err, "login failed");
                (LoginState::failed(&err), "failed")
            }
        };

        let ui = {
            let mut session = self.lock();
            if session.generation != generation {
                None
            } else {
                session.state = next;
                Some(LoginUiState::project(&session.form, &session.state))
            }
        };
        match ui {
            Some(ui) => {
                info!(from = "in_flight", to, "login state transition");
                self.emit(ui)
            }
            None => {
                warn!(outcome = to, "login finished after reset; result discarded");
                self.ui_state()
            }
        }
    }

    fn emit(&self, ui: LoginUiState) -> LoginUiState {
        self.view_state.emit(ui.clone());
        ui
    }
}
