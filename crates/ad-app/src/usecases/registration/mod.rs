//! Registration use cases.
//!
//! This module exposes the registration orchestrator.

mod context;
pub mod orchestrator;

pub use context::SubmitRejected;
pub use orchestrator::RegistrationOrchestrator;
