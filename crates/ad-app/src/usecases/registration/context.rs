use std::sync::{Mutex, MutexGuard};

use ad_core::registration::{validate, violations, RegistrationForm, SubmissionState};
use ad_core::RegistrationUiState;

/// Why a submit request did not start a new attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("submission already {0}")]
    NotIdle(&'static str),
    #[error("form invalid ({0} rule(s) broken)")]
    Invalid(usize),
}

/// Form, submission state and attempt generation owned by one orchestrator.
///
/// ## Locking
/// The lock is only held inside synchronous sections; it is never held across
/// an await point, so edits and reads never suspend.
pub(crate) struct RegistrationContext {
    inner: Mutex<RegistrationSession>,
}

#[derive(Default)]
struct RegistrationSession {
    form: RegistrationForm,
    submission: SubmissionState,
    /// Bumped by every reset so a late completion can tell it is stale.
    generation: u64,
}

/// Everything the remote pipeline needs, captured when an attempt starts.
pub(crate) struct StartedSubmission {
    pub form: RegistrationForm,
    pub generation: u64,
    pub ui: RegistrationUiState,
}

impl RegistrationContext {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistrationSession::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistrationSession> {
        // The session holds plain values, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn ui_state(&self) -> RegistrationUiState {
        let session = self.lock();
        RegistrationUiState::project(&session.form, &session.submission)
    }

    pub fn submission(&self) -> SubmissionState {
        self.lock().submission.clone()
    }

    /// Apply an edit to the form and return the re-projected view state.
    pub fn edit(&self, apply: impl FnOnce(&mut RegistrationForm)) -> RegistrationUiState {
        let mut session = self.lock();
        apply(&mut session.form);
        RegistrationUiState::project(&session.form, &session.submission)
    }

    /// Move `Idle → InFlight` if the form is valid.
    pub fn begin_submission(&self) -> Result<StartedSubmission, SubmitRejected> {
        let mut session = self.lock();
        match session.submission {
            SubmissionState::Idle => {}
            SubmissionState::InFlight => return Err(SubmitRejected::NotIdle("in flight")),
            SubmissionState::Succeeded { .. } => return Err(SubmitRejected::NotIdle("succeeded")),
            SubmissionState::Failed { .. } => return Err(SubmitRejected::NotIdle("failed")),
        }
        if !validate(&session.form) {
            return Err(SubmitRejected::Invalid(violations(&session.form).len()));
        }

        session.submission = SubmissionState::InFlight;
        Ok(StartedSubmission {
            form: session.form.clone(),
            generation: session.generation,
            ui: RegistrationUiState::project(&session.form, &session.submission),
        })
    }

    /// Store the terminal state of attempt `generation`.
    ///
    /// Returns `None` when a reset happened in between; the result is dropped.
    pub fn finish_submission(
        &self,
        generation: u64,
        outcome: SubmissionState,
    ) -> Option<RegistrationUiState> {
        let mut session = self.lock();
        if session.generation != generation {
            return None;
        }
        session.submission = outcome;
        Some(RegistrationUiState::project(
            &session.form,
            &session.submission,
        ))
    }

    pub fn reset(&self) -> RegistrationUiState {
        let mut session = self.lock();
        let generation = session.generation.wrapping_add(1);
        *session = RegistrationSession {
            generation,
            ..RegistrationSession::default()
        };
        RegistrationUiState::project(&session.form, &session.submission)
    }
}
