//! AppDelivery Application Orchestration Layer
//!
//! This crate contains the use cases wrapping each port capability and the
//! orchestrators that drive the registration and login screens.

pub mod usecases;

pub use usecases::{LoginOrchestrator, RegistrationOrchestrator};
