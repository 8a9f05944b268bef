pub mod auth;
pub mod login;
pub mod registration;
pub mod user;

pub use auth::{
    GetCurrentUser, LogOut, LoginWithEmail, LoginWithFacebook, LoginWithGoogle, RegisterWithEmail,
};
pub use login::LoginOrchestrator;
pub use registration::RegistrationOrchestrator;
pub use user::{CreateUser, DeleteUser, GetUser, UpdateUser};
