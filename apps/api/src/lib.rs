pub mod router;
pub mod services;

pub use router::create_router;
pub use services::AppServices;
