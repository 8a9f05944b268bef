pub mod config;
pub mod profile;
pub mod session;
pub mod time;

pub use config::load_config;
pub use profile::{FileProfileStore, InMemoryProfileStore};
pub use session::InMemorySessionGateway;
pub use time::SystemClock;
