//! Profile use cases
//!
//! Thin wrappers over the profile store port.

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod update_user;

pub use create_user::CreateUser;
pub use delete_user::DeleteUser;
pub use get_user::GetUser;
pub use update_user::UpdateUser;
