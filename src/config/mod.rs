//! Configuration module for the sales dashboard.

pub mod api;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod pricing;

// Re-export commonly used items
pub use api::API;
pub use persistence::APP_STATE_PATH;
pub use pricing::PRICING;
