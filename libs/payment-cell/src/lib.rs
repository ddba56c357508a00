pub mod client;
pub mod gateway;
pub mod models;

pub use client::RazorpayClient;
pub use gateway::PaymentGateway;
pub use models::PaymentError;
