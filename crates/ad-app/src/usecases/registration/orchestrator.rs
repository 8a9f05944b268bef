//! Registration orchestrator.
//!
//! Owns the sign-up form and submission state, re-validates on every edit and
//! runs the two-step remote sequence (credential, then profile) on submit.

use std::sync::Arc;

use ad_core::ports::{ClockPort, ProfileStorePort, SessionGatewayPort, ViewStatePort};
use ad_core::registration::{FormField, RegistrationForm, SubmissionState};
use ad_core::{RegistrationUiState, SubjectId, UserProfile};
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::context::RegistrationContext;
use crate::usecases::{CreateUser, RegisterWithEmail};

/// Orchestrator that drives the registration screen.
///
/// Every public operation returns the freshly projected view state and also
/// pushes it to the view-state port. Gateway failures never escape: they end
/// up as a `Failed` submission state with a user-facing message.
pub struct RegistrationOrchestrator {
    context: RegistrationContext,

    register_with_email: Arc<RegisterWithEmail>,
    create_user: Arc<CreateUser>,
    clock: Arc<dyn ClockPort>,
    view_state: Arc<dyn ViewStatePort<RegistrationUiState>>,
}

impl RegistrationOrchestrator {
    pub fn new(
        register_with_email: Arc<RegisterWithEmail>,
        create_user: Arc<CreateUser>,
        clock: Arc<dyn ClockPort>,
        view_state: Arc<dyn ViewStatePort<RegistrationUiState>>,
    ) -> Self {
        Self {
            context: RegistrationContext::new(),
            register_with_email,
            create_user,
            clock,
            view_state,
        }
    }

    pub fn from_ports(
        session: Arc<dyn SessionGatewayPort>,
        profiles: Arc<dyn ProfileStorePort>,
        clock: Arc<dyn ClockPort>,
        view_state: Arc<dyn ViewStatePort<RegistrationUiState>>,
    ) -> Self {
        Self::new(
            Arc::new(RegisterWithEmail::from_ports(session)),
            Arc::new(CreateUser::from_ports(profiles)),
            clock,
            view_state,
        )
    }

    pub fn ui_state(&self) -> RegistrationUiState {
        self.context.ui_state()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.context.submission()
    }

    /// Replace one text field and re-validate. Never suspends.
    pub fn on_field_change(&self, field: FormField, value: impl Into<String>) -> RegistrationUiState {
        let value = value.into();
        let ui = self.context.edit(|form| form.set_field(field, value));
        self.emit(ui)
    }

    pub fn toggle_terms(&self) -> RegistrationUiState {
        let ui = self.context.edit(RegistrationForm::toggle_terms);
        self.emit(ui)
    }

    /// Show or hide the password. Has no effect on validation.
    pub fn toggle_password_visibility(&self) -> RegistrationUiState {
        let ui = self.context.edit(RegistrationForm::toggle_password_visibility);
        self.emit(ui)
    }

    /// Create the credential, then the profile.
    ///
    /// No-op unless the submission is idle and the form is valid. The loading
    /// snapshot is emitted before the first remote call is issued.
    pub async fn submit(&self) -> RegistrationUiState {
        let started = match self.context.begin_submission() {
            Ok(started) => started,
            Err(reason) => {
                debug!(reason = %reason, "registration submit ignored");
                return self.context.ui_state();
            }
        };
        info!(from = "idle", to = "in_flight", "registration state transition");
        self.emit(started.ui);

        let span = info_span!(
            "usecase.registration_orchestrator.submit",
            generation = started.generation
        );
        let form = started.form;
        let outcome = async {
            match self.create_account(&form).await {
                Ok(subject_id) => SubmissionState::succeeded(subject_id, &form.name),
                Err(failed) => failed,
            }
        }
        .instrument(span)
        .await;

        let to = if matches!(outcome, SubmissionState::Succeeded { .. }) {
            "succeeded"
        } else {
            "failed"
        };
        match self.context.finish_submission(started.generation, outcome) {
            Some(ui) => {
                info!(from = "in_flight", to, "registration state transition");
                self.emit(ui)
            }
            None => {
                warn!(outcome = to, "registration finished after reset; result discarded");
                self.context.ui_state()
            }
        }
    }

    /// Back to an empty form and an idle submission. Safe in any state.
    ///
    /// An in-flight remote sequence is not cancelled; its result is discarded.
    pub fn reset(&self) -> RegistrationUiState {
        let ui = self.context.reset();
        debug!("registration reset");
        self.emit(ui)
    }

    /// Sequential pipeline; the profile write depends on the credential's id.
    ///
    /// A profile failure leaves the freshly created credential in place.
    async fn create_account(&self, form: &RegistrationForm) -> Result<SubjectId, SubmissionState> {
        let subject_id = self
            .register_with_email
            .execute(&form.email, &form.password)
            .await
            .map_err(|err| {
                warn!(step = "create_credential", error = %err, "registration failed");
                SubmissionState::auth_failed(&err)
            })?;

        let profile = UserProfile::new_customer(subject_id.clone(), form, self.clock.now_ms());
        self.create_user.execute(&profile).await.map_err(|err| {
            error!(
                step = "create_profile",
                subject_id = %subject_id,
                error = %err,
                "registration failed after credential was created; credential kept"
            );
            SubmissionState::profile_failed(&err)
        })?;

        Ok(subject_id)
    }

    fn emit(&self, ui: RegistrationUiState) -> RegistrationUiState {
        self.view_state.emit(ui.clone());
        ui
    }
}
