//! Authentication use cases
//!
//! Each use case wraps one capability of the session gateway.

pub mod get_current_user;
pub mod log_out;
pub mod login_with_email;
pub mod login_with_facebook;
pub mod login_with_google;
pub mod register_with_email;

pub use get_current_user::GetCurrentUser;
pub use log_out::LogOut;
pub use login_with_email::LoginWithEmail;
pub use login_with_facebook::LoginWithFacebook;
pub use login_with_google::LoginWithGoogle;
pub use register_with_email::RegisterWithEmail;
