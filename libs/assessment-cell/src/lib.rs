pub mod handlers;
pub mod models;
pub mod questions;
pub mod repository;
pub mod router;
pub mod services;

pub use handlers::AssessmentState;
pub use models::*;
