//! User profile domain module.

pub mod document;
pub mod profile;

pub use document::USERS_COLLECTION;
pub use profile::{UserProfile, DEFAULT_ROLE};
