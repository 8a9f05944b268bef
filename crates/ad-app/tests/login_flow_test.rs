use std::sync::{Arc, Mutex};

use ad_app::usecases::{GetCurrentUser, LogOut};
use ad_app::LoginOrchestrator;
use ad_core::login::{LoginField, LoginState};
use ad_core::ports::{SessionGatewayPort, ViewStatePort};
use ad_core::session::SignInProvider;
use ad_core::LoginUiState;
use ad_infra::InMemorySessionGateway;

#[derive(Default)]
struct LatestViewState {
    latest: Mutex<Option<LoginUiState>>,
}

impl ViewStatePort<LoginUiState> for LatestViewState {
    fn emit(&self, state: LoginUiState) {
        *self.latest.lock().unwrap() = Some(state);
    }
}

async fn gateway_with_account() -> Arc<InMemorySessionGateway> {
    let session = Arc::new(InMemorySessionGateway::new());
    session.create_credential("a@b.com", "secret").await.unwrap();
    session.log_out();
    session
}

#[tokio::test]
async fn email_login_signs_in_registered_account() {
    let session = gateway_with_account().await;
    let view_state = Arc::new(LatestViewState::default());
    let orchestrator = LoginOrchestrator::from_ports(session.clone(), view_state.clone());

    orchestrator.on_field_change(LoginField::Email, " a@b.com ");
    orchestrator.on_field_change(LoginField::Password, "secret");
    let ui = orchestrator.login().await;

    assert_eq!(ui.last_message.as_deref(), Some("Bienvenido a@b.com"));
    assert_eq!(view_state.latest.lock().unwrap().clone(), Some(ui));
    assert!(GetCurrentUser::from_ports(session.clone()).execute().is_some());

    LogOut::from_ports(session.clone()).execute();
    assert!(session.current_user().is_none());
}

#[tokio::test]
async fn wrong_password_reports_default_message() {
    let session = gateway_with_account().await;
    let orchestrator =
        LoginOrchestrator::from_ports(session.clone(), Arc::new(LatestViewState::default()));

    orchestrator.on_field_change(LoginField::Email, "a@b.com");
    orchestrator.on_field_change(LoginField::Password, "not-it");
    let ui = orchestrator.login().await;

    assert_eq!(ui.last_message.as_deref(), Some("Error al iniciar sesión"));
    assert!(matches!(orchestrator.state(), LoginState::Failed { .. }));
    assert!(session.current_user().is_none());
}

#[tokio::test]
async fn google_login_uses_registered_identity() {
    let session = Arc::new(InMemorySessionGateway::new());
    let uid = session.register_federated_identity(
        SignInProvider::Google,
        "google-id-token",
        Some("g@b.com".to_string()),
    );
    let orchestrator =
        LoginOrchestrator::from_ports(session.clone(), Arc::new(LatestViewState::default()));

    let ui = orchestrator.login_with_google("google-id-token").await;

    assert_eq!(ui.last_message.as_deref(), Some("Bienvenido g@b.com"));
    assert_eq!(session.current_user().map(|u| u.uid), Some(uid));
}

#[tokio::test]
async fn unknown_facebook_token_fails() {
    let session = Arc::new(InMemorySessionGateway::new());
    let orchestrator =
        LoginOrchestrator::from_ports(session, Arc::new(LatestViewState::default()));

    let ui = orchestrator.login_with_facebook("unknown").await;

    assert!(ui.is_last_message_error);
    assert!(!ui.is_loading);
}
