// Remote analytics service: wire types, errors and the HTTP client
pub mod client;
pub mod error;
pub mod wire;

// Re-export commonly used types
pub use client::{AnalyticsApi, ClientSettings, HttpAnalyticsClient};
pub use error::{ApiError, Operation};
