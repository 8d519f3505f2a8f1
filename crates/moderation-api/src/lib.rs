mod client;
mod error;
pub mod models;
mod traits;

pub use client::{HttpClient, SuccessPolicy};
pub use error::ApiError;
pub use traits::DashboardApi;
