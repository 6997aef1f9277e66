// Display models derived from dashboard state
// Pure functions of current state, independent of UI/visualization

pub mod metrics;

// Re-export key types for convenience
pub use metrics::{DashboardMetrics, GainSentiment, PotentialGain};
