pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::load_app_config;
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::{wire_dependencies, AppDeps};
