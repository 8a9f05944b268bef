//! # ad-core
//!
//! Core domain models and business rules for AppDelivery.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! form models, validation rules, submission state machines, view-state projections
//! and the ports that infrastructure adapters implement.

pub mod config;
pub mod ids;
pub mod login;
pub mod ports;
pub mod registration;
pub mod session;
pub mod user;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::SubjectId;
pub use login::{LoginForm, LoginState, LoginUiState};
pub use registration::{
    FailureKind, FormField, RegistrationForm, RegistrationUiState, SubmissionState,
};
pub use session::{AuthenticatedUser, SignInProvider};
pub use user::UserProfile;
