//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases and
//! orchestrators) and infrastructure implementations. Adapters are passed in
//! explicitly through constructors; nothing is looked up from a global registry.

mod clock;
pub mod errors;
pub mod profile_store;
pub mod session_gateway;
mod view_state;

pub use clock::ClockPort;
pub use errors::{AuthError, ProfileError};
pub use profile_store::ProfileStorePort;
pub use session_gateway::SessionGatewayPort;
pub use view_state::ViewStatePort;
