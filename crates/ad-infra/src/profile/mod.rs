mod file;
mod in_memory;

pub use file::{FileProfileStore, DEFAULT_PROFILE_EXTENSION};
pub use in_memory::InMemoryProfileStore;
