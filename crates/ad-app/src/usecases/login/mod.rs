pub mod orchestrator;

pub use orchestrator::LoginOrchestrator;
