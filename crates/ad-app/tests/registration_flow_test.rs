use std::sync::{Arc, Mutex};

use ad_app::usecases::{GetCurrentUser, GetUser};
use ad_app::RegistrationOrchestrator;
use ad_core::ports::{ClockPort, ProfileError, ProfileStorePort, SessionGatewayPort, ViewStatePort};
use ad_core::registration::{FailureKind, FormField, SubmissionState};
use ad_core::RegistrationUiState;
use ad_infra::{FileProfileStore, InMemoryProfileStore, InMemorySessionGateway};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingViewState {
    emitted: Mutex<Vec<RegistrationUiState>>,
}

impl RecordingViewState {
    fn loading_trace(&self) -> Vec<bool> {
        self.emitted
            .lock()
            .unwrap()
            .iter()
            .map(|ui| ui.is_loading)
            .collect()
    }
}

impl ViewStatePort<RegistrationUiState> for RecordingViewState {
    fn emit(&self, state: RegistrationUiState) {
        self.emitted.lock().unwrap().push(state);
    }
}

struct FixedClock(i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

struct Harness {
    session: Arc<InMemorySessionGateway>,
    orchestrator: RegistrationOrchestrator,
    view_state: Arc<RecordingViewState>,
}

fn harness(profiles: Arc<dyn ProfileStorePort>) -> Harness {
    let session = Arc::new(InMemorySessionGateway::new());
    let view_state = Arc::new(RecordingViewState::default());
    let orchestrator = RegistrationOrchestrator::from_ports(
        session.clone(),
        profiles,
        Arc::new(FixedClock(1_700_000_000_000)),
        view_state.clone(),
    );
    Harness {
        session,
        orchestrator,
        view_state,
    }
}

fn fill(orchestrator: &RegistrationOrchestrator, email: &str) {
    orchestrator.on_field_change(FormField::Name, "Ana");
    orchestrator.on_field_change(FormField::LastName, "Lima");
    orchestrator.on_field_change(FormField::DocumentId, "12345678");
    orchestrator.on_field_change(FormField::Email, email);
    orchestrator.on_field_change(FormField::Password, "secret");
    orchestrator.on_field_change(FormField::Cellphone, "987654321");
    orchestrator.toggle_terms();
}

#[tokio::test]
async fn registration_creates_credential_and_profile() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    let h = harness(profiles.clone());
    fill(&h.orchestrator, "a@b.com");

    let ui = h.orchestrator.submit().await;

    assert_eq!(ui.last_message.as_deref(), Some("Bienvenido Ana"));
    let SubmissionState::Succeeded { profile_id, .. } = h.orchestrator.submission_state() else {
        panic!("expected success");
    };

    let stored = GetUser::from_ports(profiles.clone())
        .execute(&profile_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.email, "a@b.com");
    assert_eq!(stored.role, "cliente");
    assert_eq!(stored.registered_at_ms, 1_700_000_000_000);
    assert!(!stored.anonymous);

    let current = GetCurrentUser::from_ports(h.session.clone()).execute();
    assert_eq!(current.map(|u| u.uid), Some(profile_id));

    let trace = h.view_state.loading_trace();
    assert_eq!(&trace[trace.len() - 2..], &[true, false]);
}

#[tokio::test]
async fn existing_email_fails_before_profile_write() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    let h = harness(profiles.clone());
    h.session.create_credential("a@b.com", "secret").await.unwrap();
    fill(&h.orchestrator, "a@b.com");

    let ui = h.orchestrator.submit().await;

    assert!(matches!(
        h.orchestrator.submission_state(),
        SubmissionState::Failed {
            kind: FailureKind::Auth,
            ..
        }
    ));
    assert_eq!(
        ui.last_message.as_deref(),
        Some("The email address is already in use by another account.")
    );
    assert!(profiles.is_empty());
}

#[tokio::test]
async fn profile_failure_leaves_orphaned_credential() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    profiles.fail_next_write(ProfileError::Unavailable);
    let h = harness(profiles.clone());
    fill(&h.orchestrator, "a@b.com");

    let ui = h.orchestrator.submit().await;

    assert_eq!(ui.last_message.as_deref(), Some("Error al guardar usuario"));
    assert!(ui.is_last_message_error);
    assert!(profiles.is_empty());
    // No compensation: the credential created in step one survives.
    assert_eq!(h.session.account_count(), 1);
}

#[tokio::test]
async fn retry_after_reset_with_new_email_succeeds() {
    let profiles = Arc::new(InMemoryProfileStore::new());
    let h = harness(profiles.clone());
    h.session.create_credential("a@b.com", "secret").await.unwrap();
    fill(&h.orchestrator, "a@b.com");
    h.orchestrator.submit().await;

    let ui = h.orchestrator.reset();
    assert_eq!(ui, RegistrationUiState::initial());

    fill(&h.orchestrator, "c@d.com");
    let ui = h.orchestrator.submit().await;

    assert_eq!(ui.last_message.as_deref(), Some("Bienvenido Ana"));
    assert_eq!(profiles.len(), 1);
}

#[tokio::test]
async fn registration_persists_to_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let profiles = Arc::new(FileProfileStore::with_base_dir(temp_dir.path()));
    let h = harness(profiles.clone());
    fill(&h.orchestrator, "a@b.com");

    h.orchestrator.submit().await;

    let SubmissionState::Succeeded { profile_id, .. } = h.orchestrator.submission_state() else {
        panic!("expected success");
    };
    let reopened = FileProfileStore::with_base_dir(temp_dir.path());
    let stored = reopened.get_profile(&profile_id).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Ana");
    assert_eq!(stored.document_id, "12345678");
}
