pub mod auth;
pub mod otp;
pub mod password;
pub mod user;

pub use auth::AuthService;
pub use user::UserService;
